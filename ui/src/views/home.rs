use dioxus::prelude::*;

use crate::components::Layout;
use crate::context::SiteContext;
use crate::i18n::Translate;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

const DISCORD_URL: &str = "https://discord.gg/wTGS5z9";

#[cfg(debug_assertions)]
fn log_home_render(heading: &str) {
    // Lightweight render trace for diagnosing locale refresh issues.
    use dioxus::logger::tracing::debug;
    debug!("Home render (heading={heading})");
}

/// Landing page: a centered hero with the translated site title and tagline
/// plus the two entry-point buttons.
///
/// The whole page is a pure function of the supplied [`SiteContext`]; it owns
/// no state and re-renders whenever the platform hands it a new context.
#[component]
pub fn Home(site: SiteContext) -> Element {
    let heading = Translate::id("homepage.siteTitle", "{siteTitle}")
        .value("siteTitle", &site.config.title)
        .resolve(&site.catalog);
    let subtitle = Translate::id("homepage.siteTagLine", "{siteTagLine}")
        .value("siteTagLine", &site.config.tagline)
        .resolve(&site.catalog);

    let get_started = Translate::text("Getting started").resolve(&site.catalog);
    let join_discord = Translate::text("Join Official Discord").resolve(&site.catalog);

    let first_doc_href = site
        .config
        .custom_fields
        .first_doc
        .as_deref()
        .map(|path| site.base_url.resolve(path))
        .unwrap_or_default();

    #[cfg(debug_assertions)]
    log_home_render(&heading);

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        Layout {
            title: "React TypeScript Cheatsheets",
            permalink: "/",
            description: "React TypeScript Cheatsheets",

            div { class: "hero text--center",
                div { class: "container",
                    div { class: "padding-vert--md",
                        h1 { class: "hero__title", "{heading}" }
                        p { class: "hero__subtitle", "{subtitle}" }
                    }
                    div { class: "homePageBtns",
                        a {
                            class: "button button--lg button--outline button--primary",
                            href: "{first_doc_href}",
                            "{get_started}"
                        }
                        a {
                            class: "button button--lg button--outline button--secondary",
                            href: DISCORD_URL,
                            "{join_discord}"
                        }
                    }
                }
            }
        }
    }
}
