//! Internationalization (i18n) support for `titrivia-ui`.
//!
//! Header labels are Fluent messages so the shell can serve translated
//! navigation without touching component code.
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/titrivia-ui.ftl   (fallback/reference)
//!   es-ES/titrivia-ui.ftl
//!   fr-FR/titrivia-ui.ftl
//! ```
//!
//! Lookups work before `init()` against the en-US fallback; the shell calls
//! `init()` once at startup to switch to the user's preferred locale.
//! ```ignore
//! ui::i18n::init(); // idempotent
//! let label = ui::i18n::tr("header-play");
//! let aria = ui::t!("header-nav-label");
//! ```
//!
//! To add a new locale, copy `en-US/titrivia-ui.ftl` to
//! `i18n/<lang-id>/titrivia-ui.ftl` and translate each value (keep IDs identical).
//! The completeness tests fail until every fallback key is present.
//!
//! Native hosts pick the OS locale list, wasm uses `navigator.languages`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro for literal keys (checked at compile time against the fallback FTL).
///
/// ```ignore
/// t!("header-nav-label")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
pub(crate) const DOMAIN: &str = "titrivia-ui";

#[derive(Embed)]
#[folder = "i18n"]
pub(crate) struct Localizations;

/// Global language loader shared by `tr` and the `t!` macro. Starts out on the fallback bundle.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    if let Err(err) = loader.load_fallback_language(&Localizations) {
        tracing::warn!(%err, "failed loading fallback language bundle");
    }
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Runtime lookup for keys held in data (e.g. the header entry table).
pub fn tr(key: &str) -> String {
    LOADER.get(key)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
