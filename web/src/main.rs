use dioxus::prelude::*;

use ui::components::TriviaHeader;
use ui::NavigationHandle;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Header prompts perform full-page navigations against the live `window.location`.
    use_context_provider(NavigationHandle::browser);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "UD Titrivia" }

        TriviaHeader {}
    }
}
