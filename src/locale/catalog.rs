//! Label templates per locale with fallback.
//!
//! # Invariants
//!
//! 1. **Fallback chain terminates**: a lookup tries the requested tag, its
//!    base language, then each fallback entry once, and returns `None` if
//!    nothing matched.
//!
//! 2. **Interpolation is single-pass**: `{count}` is replaced once; the
//!    rendered count is never re-scanned.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown locale | Tag and chain not loaded | `resolve` returns `None` |
//! | Template without `{count}` | Fixed wording | Returned verbatim |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the selection count.
pub const COUNT_TOKEN: &str = "{count}";

/// The two templates behind the "N selected" label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelTemplates {
    /// Used for counts up to one.
    pub one: String,
    /// Used for counts above one.
    pub other: String,
}

impl LabelTemplates {
    pub fn new(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            other: other.into(),
        }
    }

    /// German, the default pack.
    pub fn german() -> Self {
        Self::new("1 Option gewählt", "{count} Optionen gewählt")
    }

    pub fn english() -> Self {
        Self::new("1 option selected", "{count} options selected")
    }

    /// Pick the template for `count` and interpolate it.
    pub fn render(&self, count: usize) -> String {
        let template = if count > 1 { &self.other } else { &self.one };
        template.replace(COUNT_TOKEN, &count.to_string())
    }
}

/// Label templates keyed by locale tag.
///
/// # Example
///
/// ```
/// use spark_select::{LabelCatalog, LabelTemplates};
///
/// let mut catalog = LabelCatalog::default();
/// catalog.add_locale("fr", LabelTemplates::new("1 option choisie", "{count} options choisies"));
///
/// assert_eq!(catalog.render("fr-CA", 3).as_deref(), Some("3 options choisies"));
/// assert_eq!(catalog.render("de", 1).as_deref(), Some("1 Option gewählt"));
/// // Unknown tags fall back to the default chain
/// assert_eq!(catalog.render("ja", 2).as_deref(), Some("2 Optionen gewählt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCatalog {
    locales: HashMap<String, LabelTemplates>,
    #[serde(default)]
    fallback_chain: Vec<String>,
}

impl Default for LabelCatalog {
    /// Built-in `de` and `en` packs, falling back to `de`.
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.add_locale("de", LabelTemplates::german());
        catalog.add_locale("en", LabelTemplates::english());
        catalog.set_fallback_chain(vec!["de".into()]);
        catalog
    }
}

impl LabelCatalog {
    /// A catalog with no locales and no fallback.
    pub fn empty() -> Self {
        Self {
            locales: HashMap::new(),
            fallback_chain: Vec::new(),
        }
    }

    /// Add or replace the templates for a locale.
    pub fn add_locale(&mut self, locale: impl Into<String>, templates: LabelTemplates) {
        self.locales.insert(locale.into(), templates);
    }

    /// Set the fallback chain (tried in order when a locale is missing).
    pub fn set_fallback_chain(&mut self, chain: Vec<String>) {
        self.fallback_chain = chain;
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Find templates for `locale`: exact tag, base language, then the
    /// fallback chain.
    pub fn resolve(&self, locale: &str) -> Option<&LabelTemplates> {
        if let Some(templates) = self.locales.get(locale) {
            return Some(templates);
        }
        if let Some((base, _)) = locale.split_once(['-', '_']) {
            if let Some(templates) = self.locales.get(base) {
                return Some(templates);
            }
        }
        self.fallback_chain
            .iter()
            .find_map(|fallback| self.locales.get(fallback))
    }

    /// Render the label for `count` selections in `locale`.
    pub fn render(&self, locale: &str, count: usize) -> Option<String> {
        self.resolve(locale).map(|templates| templates.render(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_default_pack() {
        let catalog = LabelCatalog::default();
        assert_eq!(catalog.render("de", 1).as_deref(), Some("1 Option gewählt"));
        assert_eq!(catalog.render("de", 2).as_deref(), Some("2 Optionen gewählt"));
        assert_eq!(catalog.render("de", 0).as_deref(), Some("1 Option gewählt"));
    }

    #[test]
    fn base_language_fallback() {
        let catalog = LabelCatalog::default();
        assert_eq!(catalog.render("en-GB", 4).as_deref(), Some("4 options selected"));
        assert_eq!(catalog.render("en_US", 1).as_deref(), Some("1 option selected"));
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let catalog = LabelCatalog::empty();
        assert!(catalog.resolve("de").is_none());
        assert!(catalog.render("de", 1).is_none());
    }

    #[test]
    fn templates_without_token_are_verbatim() {
        let templates = LabelTemplates::new("one picked", "several picked");
        assert_eq!(templates.render(1), "one picked");
        assert_eq!(templates.render(7), "several picked");
    }

    #[test]
    fn interpolation_is_single_pass() {
        let templates = LabelTemplates::new("x", "{count}{count}");
        assert_eq!(templates.render(12), "1212");
    }

    #[test]
    fn deserializes_from_json() {
        let catalog: LabelCatalog = serde_json::from_str(
            r#"{
                "locales": { "nl": { "one": "1 optie gekozen", "other": "{count} opties gekozen" } },
                "fallback_chain": ["nl"]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.render("sv", 3).as_deref(), Some("3 opties gekozen"));
    }
}
