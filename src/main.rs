use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use nextsound_share::components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#f59e0b" }
        document::Meta { name: "apple-mobile-web-app-title", content: "NextSound" }
        document::Title { "NextSound" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
