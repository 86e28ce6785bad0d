//! Site configuration. The shipped values live in `SiteConfig::default()`;
//! deployments can also deserialize a camelCase JSON document with the same
//! shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    /// Canonical deployment host, no trailing slash.
    pub url: String,
    pub base_url: String,
    pub custom_fields: CustomFields,
    pub i18n: I18nConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomFields {
    /// Site-relative path the "Getting started" button points at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_doc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct I18nConfig {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "React TypeScript Cheatsheets".to_string(),
            tagline: "Cheatsheets for experienced React developers getting started with TypeScript"
                .to_string(),
            url: "https://react-typescript-cheatsheet.netlify.app".to_string(),
            base_url: "/".to_string(),
            custom_fields: CustomFields::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for CustomFields {
    fn default() -> Self {
        Self {
            first_doc: Some("docs/basic/setup".to_string()),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: crate::i18n::DEFAULT_LOCALE.to_string(),
            locales: vec!["en".to_string(), "ja".to_string(), "pt-BR".to_string()],
        }
    }
}
