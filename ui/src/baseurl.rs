//! Deployment-aware URL resolution for site-relative paths.
//!
//! Internal links are written site-relative ("docs/basic/setup") and must be
//! prefixed with the configured base path so the site keeps working when it is
//! deployed under a subpath. Fragment anchors and protocol-qualified URLs pass
//! through untouched.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    base: String,
}

impl BaseUrl {
    /// Build a resolver from the canonical site URL and the base path.
    ///
    /// The base path is normalized to exactly one leading and one trailing
    /// slash; the site URL keeps no trailing slash.
    pub fn new(url: &str, base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        let base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        Self {
            url: url.trim_end_matches('/').to_string(),
            base,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve a site-relative path against the base path.
    ///
    /// Paths that already start with the base path are not prefixed twice.
    pub fn resolve(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with('#') || has_protocol(path) {
            return path.to_string();
        }
        if path.starts_with(self.base.as_str()) {
            return path.to_string();
        }
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// Resolve a path into a fully qualified URL on the canonical site host.
    pub fn absolute(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with('#') || has_protocol(path) {
            return path.to_string();
        }
        format!("{}{}", self.url, self.resolve(path))
    }
}

fn has_protocol(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    match path.find(':') {
        // A scheme is word characters only; anything else before the colon
        // means the colon is part of a plain path.
        Some(idx) => path[..idx]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> BaseUrl {
        BaseUrl::new("https://react-typescript-cheatsheet.netlify.app", "/")
    }

    #[test]
    fn prefixes_relative_paths_with_the_base() {
        assert_eq!(site().resolve("docs/basic/setup"), "/docs/basic/setup");
        assert_eq!(site().resolve("/docs/intro"), "/docs/intro");
    }

    #[test]
    fn keeps_paths_already_under_the_base() {
        let sub = BaseUrl::new("https://example.com", "/cheatsheets/");
        assert_eq!(
            sub.resolve("/cheatsheets/docs/intro"),
            "/cheatsheets/docs/intro"
        );
        assert_eq!(sub.resolve("docs/intro"), "/cheatsheets/docs/intro");
    }

    #[test]
    fn passes_external_urls_through() {
        assert_eq!(
            site().resolve("https://discord.gg/wTGS5z9"),
            "https://discord.gg/wTGS5z9"
        );
        assert_eq!(site().resolve("//cdn.example.com/x.js"), "//cdn.example.com/x.js");
        assert_eq!(site().resolve("mailto:hi@example.com"), "mailto:hi@example.com");
    }

    #[test]
    fn passes_anchors_and_empty_paths_through() {
        assert_eq!(site().resolve("#top"), "#top");
        assert_eq!(site().resolve(""), "");
    }

    #[test]
    fn colons_inside_plain_paths_are_not_schemes() {
        assert_eq!(site().resolve("docs/a:b"), "/docs/a:b");
    }

    #[test]
    fn normalizes_the_base_path() {
        assert_eq!(
            BaseUrl::new("https://example.com", "cheatsheets").base(),
            "/cheatsheets/"
        );
        assert_eq!(BaseUrl::new("https://example.com/", "").base(), "/");
        assert_eq!(BaseUrl::new("https://example.com", "//docs//").base(), "/docs/");
    }

    #[test]
    fn absolute_joins_the_site_url() {
        assert_eq!(
            site().absolute("docs/basic/setup"),
            "https://react-typescript-cheatsheet.netlify.app/docs/basic/setup"
        );
        assert_eq!(
            site().absolute("https://discord.gg/wTGS5z9"),
            "https://discord.gg/wTGS5z9"
        );
    }
}
