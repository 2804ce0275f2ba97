use dioxus::prelude::*;

use crate::core::navigation::{NavigationError, NavigationHandle};
use crate::i18n;
use crate::t;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Visual slot of a header entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRole {
    Title,
    Subtitle,
    Prompt,
}

impl EntryRole {
    pub fn css_class(self) -> &'static str {
        match self {
            EntryRole::Title => "App-header__title",
            EntryRole::Subtitle => "App-header__subtitle",
            EntryRole::Prompt => "App-header__prompt",
        }
    }
}

/// One clickable header element: a localized label and the site-relative
/// path it navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderEntry {
    pub role: EntryRole,
    pub label_key: &'static str,
    pub target: &'static str,
}

impl HeaderEntry {
    /// Click behaviour: one full-page navigation to `target` under the current origin.
    pub fn activate(&self, navigation: &NavigationHandle) -> Result<String, NavigationError> {
        navigation.follow(self.target)
    }
}

/// Header layout, in render order. The empty target is the site root.
pub const HEADER_ENTRIES: &[HeaderEntry] = &[
    HeaderEntry {
        role: EntryRole::Title,
        label_key: "header-title",
        target: "",
    },
    HeaderEntry {
        role: EntryRole::Subtitle,
        label_key: "header-all-questions",
        target: "",
    },
    HeaderEntry {
        role: EntryRole::Prompt,
        label_key: "header-add-question",
        target: "/add",
    },
    HeaderEntry {
        role: EntryRole::Prompt,
        label_key: "header-play",
        target: "/play",
    },
];

/// Site header: application title, tagline and the two navigation prompts.
///
/// Every entry triggers a full-page navigation through the `NavigationHandle`
/// provided in context (the platform default when none is provided):
/// ```ignore
/// use_context_provider(NavigationHandle::browser);
/// rsx! { TriviaHeader {} }
/// ```
#[component]
pub fn TriviaHeader() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        HeaderBar {}
    }
}

/// Header markup without the stylesheet side channel.
#[component]
pub fn HeaderBar() -> Element {
    rsx! {
        div {
            class: "App-header",
            role: "navigation",
            aria_label: t!("header-nav-label"),
            for entry in HEADER_ENTRIES.iter().copied() {
                HeaderLink { key: "{entry.label_key}", entry: entry }
            }
        }
    }
}

#[component]
fn HeaderLink(entry: HeaderEntry) -> Element {
    let navigation =
        use_hook(|| try_consume_context::<NavigationHandle>().unwrap_or_else(NavigationHandle::browser));
    let label = i18n::tr(entry.label_key);
    let class = entry.role.css_class();

    let onclick = move |_: MouseEvent| {
        if let Err(err) = entry.activate(&navigation) {
            tracing::warn!(%err, path = entry.target, "header navigation failed");
        }
    };

    match entry.role {
        EntryRole::Title => rsx! {
            h1 { class: "{class}", onclick: onclick, "{label}" }
        },
        EntryRole::Subtitle | EntryRole::Prompt => rsx! {
            h2 { class: "{class}", onclick: onclick, "{label}" }
        },
    }
}
