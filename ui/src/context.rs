//! Everything a page needs to render, bundled into one explicit value.
//!
//! Pages receive a [`SiteContext`] as a prop instead of reaching into
//! ambient state, so tests can hand-build one and render synchronously.

use dioxus::logger::tracing::warn;

use crate::baseurl::BaseUrl;
use crate::config::SiteConfig;
use crate::i18n::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContext {
    pub config: SiteConfig,
    pub base_url: BaseUrl,
    pub catalog: Catalog,
}

impl SiteContext {
    pub fn new(config: SiteConfig, catalog: Catalog) -> Self {
        let base_url = BaseUrl::new(&config.url, &config.base_url);
        Self {
            config,
            base_url,
            catalog,
        }
    }

    /// Build a context for `locale`.
    ///
    /// Falls back to the configured default locale, then to an empty catalog,
    /// when no catalog can be loaded. A broken locale never takes the page
    /// down; it renders untranslated defaults instead.
    pub fn for_locale(config: SiteConfig, locale: &str) -> Self {
        let catalog = match Catalog::for_locale(locale) {
            Ok(catalog) => catalog,
            Err(err) => {
                let fallback = config.i18n.default_locale.clone();
                warn!("no catalog for locale `{locale}` ({err}), falling back to `{fallback}`");
                Catalog::for_locale(&fallback).unwrap_or_else(|err| {
                    warn!("no catalog for default locale `{fallback}` ({err}), rendering untranslated defaults");
                    Catalog::empty()
                })
            }
        };
        Self::new(config, catalog)
    }
}
