//! Shared UI crate for the React TypeScript Cheatsheets site. The views, the
//! site chrome, and the configuration/i18n plumbing all live here.

pub mod baseurl;
pub mod config;
pub mod context;
pub mod i18n;
pub mod views;

pub mod components {
    // Page chrome around every view (components/layout.rs)
    pub mod layout;
    pub use layout::Layout;

    // Site navigation bar with the locale switcher (components/site_navbar.rs)
    pub mod site_navbar;
    pub use site_navbar::SiteNavbar;
}
