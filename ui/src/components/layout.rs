use dioxus::prelude::*;

// Shared theme stylesheet (hero, buttons, layout primitives).
const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Page chrome shared by every route: head metadata plus the main column
/// wrapped around the page body.
#[component]
pub fn Layout(title: String, permalink: String, description: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
        document::Meta { property: "og:title", content: "{title}" }
        document::Meta { property: "og:description", content: "{description}" }
        document::Link { rel: "canonical", href: "{permalink}" }

        main { class: "main-wrapper", {children} }
    }
}
