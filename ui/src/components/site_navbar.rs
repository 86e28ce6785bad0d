use dioxus::prelude::*;

use crate::context::SiteContext;
use crate::i18n::{self, Translate};

// Navbar stylesheet (shared by every platform shell).
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

const GITHUB_URL: &str = "https://github.com/typescript-cheatsheets/react";

/// Site-wide navigation bar.
///
/// Platforms own routing, so links render as plain anchors resolved through
/// the site's base URL rather than a platform-specific `Link`. The locale
/// switcher writes back into the platform-owned `locale` signal; every render
/// pulls fresh localized strings from the context's catalog.
#[component]
pub fn SiteNavbar(site: SiteContext, mut locale: Signal<String>) -> Element {
    let locales = use_signal(i18n::available_locales);
    let show_switcher = locales().len() > 1;

    let brand_href = site.base_url.resolve("/");
    let docs_href = site
        .config
        .custom_fields
        .first_doc
        .as_deref()
        .map(|path| site.base_url.resolve(path))
        .unwrap_or_default();

    let docs_label = Translate::id("navbar.docsLabel", "Docs").resolve(&site.catalog);
    let language_label = Translate::id("navbar.languageLabel", "Language").resolve(&site.catalog);

    let on_change = move |evt: dioxus::events::FormEvent| {
        // Select options are locale tags already; anything else is ignored.
        if let Some(tag) = i18n::normalize_locale(&evt.value()) {
            locale.set(tag);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "{brand_href}",
                    span { class: "navbar__brand-mark", "{site.config.title}" }
                }

                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "{docs_href}", "{docs_label}" }
                    a {
                        class: "navbar__link",
                        href: GITHUB_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "GitHub"
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            "{language_label}"
                        }
                        select {
                            id: "locale-select",
                            value: "{locale()}",
                            oninput: on_change,
                            { locales().iter().map(|tag| {
                                let t = tag.clone();
                                rsx! {
                                    option { key: "{t}", value: "{t}", "{t}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
