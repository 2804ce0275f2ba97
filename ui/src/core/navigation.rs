//! Full-page navigation capability.
//!
//! Components never touch `window.location` directly. They ask the
//! [`NavigationHandle`] found in context to `follow` a site-relative path,
//! which resolves the path against the current origin and hands the
//! absolute URL to the host. The host unloads the page; nothing survives.
//!
//! Platforms:
//! - wasm32: [`BrowserNavigation`] (assigns `location.href` via `web-sys`).
//! - native (server rendering, tests): [`DetachedNavigation`], which has an
//!   origin but no page to replace.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Failures reported by the host while resolving or performing a navigation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("browser window unavailable")]
    WindowUnavailable,

    #[error("current origin unavailable: {reason}")]
    OriginUnavailable { reason: String },

    #[error("navigation to {url} rejected: {reason}")]
    Rejected { url: String, reason: String },

    #[error("no page to navigate from (requested {url})")]
    Detached { url: String },
}

/// Host capability: read the current origin, replace the current document.
pub trait Navigation {
    /// Scheme, host and port of the loaded page, without a trailing slash.
    fn current_origin(&self) -> Result<String, NavigationError>;

    /// Load `url`, replacing the current document.
    fn navigate(&self, url: &str) -> Result<(), NavigationError>;
}

/// Absolute URL for a site-relative `path`.
///
/// The empty path is the site root. Nothing else is validated or rewritten.
pub fn destination(origin: &str, path: &str) -> String {
    if path.is_empty() {
        format!("{origin}/")
    } else {
        format!("{origin}{path}")
    }
}

/// Shared, cloneable handle so a navigation capability can live in Dioxus context.
#[derive(Clone)]
pub struct NavigationHandle(Rc<dyn Navigation>);

impl NavigationHandle {
    pub fn new<N: Navigation + 'static>(navigation: N) -> Self {
        Self(Rc::new(navigation))
    }

    /// Platform default: the real browser location on wasm, detached elsewhere.
    pub fn browser() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(BrowserNavigation)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(DetachedNavigation::default())
        }
    }

    /// Navigate to `path` relative to the current origin.
    ///
    /// Issues exactly one `navigate` call and returns the destination it used.
    pub fn follow(&self, path: &str) -> Result<String, NavigationError> {
        let origin = self.0.current_origin()?;
        let url = destination(&origin, path);
        tracing::debug!(%url, "full-page navigation");
        self.0.navigate(&url)?;
        Ok(url)
    }
}

impl fmt::Debug for NavigationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationHandle").finish_non_exhaustive()
    }
}

/// `window.location` of the running page.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigation;

#[cfg(target_arch = "wasm32")]
impl BrowserNavigation {
    fn location() -> Result<web_sys::Location, NavigationError> {
        web_sys::window()
            .map(|w| w.location())
            .ok_or(NavigationError::WindowUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl Navigation for BrowserNavigation {
    fn current_origin(&self) -> Result<String, NavigationError> {
        Self::location()?
            .origin()
            .map_err(|err| NavigationError::OriginUnavailable {
                reason: format!("{err:?}"),
            })
    }

    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        Self::location()?
            .set_href(url)
            .map_err(|err| NavigationError::Rejected {
                url: url.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Stand-in for hosts without a browser page (server rendering, native tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachedNavigation {
    origin: String,
}

impl DetachedNavigation {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

impl Default for DetachedNavigation {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

impl Navigation for DetachedNavigation {
    fn current_origin(&self) -> Result<String, NavigationError> {
        Ok(self.origin.clone())
    }

    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        tracing::warn!(%url, "navigation requested without a browser page");
        Err(NavigationError::Detached {
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        visits: RefCell<Vec<String>>,
    }

    struct RecordingNavigation {
        origin: &'static str,
        log: Rc<Recorder>,
    }

    impl Navigation for RecordingNavigation {
        fn current_origin(&self) -> Result<String, NavigationError> {
            Ok(self.origin.to_string())
        }

        fn navigate(&self, url: &str) -> Result<(), NavigationError> {
            self.log.visits.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn recording(origin: &'static str) -> (NavigationHandle, Rc<Recorder>) {
        let log = Rc::new(Recorder::default());
        let handle = NavigationHandle::new(RecordingNavigation {
            origin,
            log: log.clone(),
        });
        (handle, log)
    }

    #[test]
    fn destination_appends_path_to_origin() {
        assert_eq!(
            destination("https://example.com", "/play"),
            "https://example.com/play"
        );
        assert_eq!(
            destination("http://localhost:3000", "/add"),
            "http://localhost:3000/add"
        );
    }

    #[test]
    fn empty_path_resolves_to_site_root() {
        assert_eq!(destination("https://example.com", ""), "https://example.com/");
    }

    #[test]
    fn malformed_paths_pass_through_untouched() {
        assert_eq!(
            destination("https://example.com", "play?x=1#top"),
            "https://example.complay?x=1#top"
        );
    }

    #[test]
    fn follow_issues_exactly_one_navigation() {
        let (handle, log) = recording("https://example.com");
        let url = handle.follow("/play").unwrap();
        assert_eq!(url, "https://example.com/play");
        assert_eq!(*log.visits.borrow(), vec!["https://example.com/play".to_string()]);
    }

    #[test]
    fn repeated_follows_each_navigate() {
        let (handle, log) = recording("https://example.com");
        handle.follow("").unwrap();
        handle.follow("").unwrap();
        assert_eq!(log.visits.borrow().len(), 2);
    }

    #[test]
    fn detached_host_reports_error_without_navigating() {
        let handle = NavigationHandle::new(DetachedNavigation::new("https://example.com"));
        let err = handle.follow("/add").unwrap_err();
        assert_eq!(
            err,
            NavigationError::Detached {
                url: "https://example.com/add".into()
            }
        );
    }

    #[test]
    fn origin_failure_skips_navigation() {
        struct NoOrigin(Rc<Recorder>);
        impl Navigation for NoOrigin {
            fn current_origin(&self) -> Result<String, NavigationError> {
                Err(NavigationError::WindowUnavailable)
            }
            fn navigate(&self, url: &str) -> Result<(), NavigationError> {
                self.0.visits.borrow_mut().push(url.to_string());
                Ok(())
            }
        }

        let log = Rc::new(Recorder::default());
        let handle = NavigationHandle::new(NoOrigin(log.clone()));
        assert_eq!(handle.follow("/play"), Err(NavigationError::WindowUnavailable));
        assert!(log.visits.borrow().is_empty());
    }
}
