use dioxus::prelude::*;

use ui::components::SiteNavbar;
use ui::config::SiteConfig;
use ui::context::SiteContext;
use ui::views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Site-wide state every route reads: the configuration and the active
    // locale. The locale signal is what the navbar switcher writes into.
    let config = use_context_provider(SiteConfig::default);
    let locale = use_signal(move || config.i18n.default_locale.clone());
    use_context_provider(|| locale);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Build the context for the active locale. Views take it as a plain prop;
/// only this shell reaches into ambient state.
fn use_site() -> SiteContext {
    let config = use_context::<SiteConfig>();
    let locale = use_context::<Signal<String>>();
    SiteContext::for_locale(config, &locale())
}

/// A web-specific shell around the shared `SiteNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn SiteShell() -> Element {
    let locale = use_context::<Signal<String>>();
    let site = use_site();

    rsx! {
        SiteNavbar { site, locale }
        Outlet::<Route> {}
    }
}

/// Route wrapper: the router constructs route components without props, so
/// this builds the [`SiteContext`] the shared view renders from.
#[component]
fn Home() -> Element {
    let site = use_site();

    rsx! {
        views::Home { site }
    }
}
