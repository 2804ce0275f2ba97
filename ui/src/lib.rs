//! Shared UI crate for Titrivia: the site header and the navigation capability it drives.

pub mod core;
pub mod i18n;

pub mod components {
    // Site header with full-page navigation prompts (components/trivia_header.rs)
    pub mod trivia_header;
    pub use trivia_header::{HeaderBar, TriviaHeader};
}

pub use crate::core::navigation::NavigationHandle;
