//! Localized label resolution.
//!
//! A label is either plain text or a locale-keyed mapping. Resolution
//! prefers the requested locale, then the default locale, then the first
//! declared entry. The last step covers documents that carry neither the
//! requested nor the default locale; an empty mapping resolves to nothing.

use crate::types::Label;

/// Trait for the host's site/language registry.
pub trait LocaleRegistry: Send + Sync {
    /// Locale of the language the current request is being served in.
    fn current_locale(&self) -> String;
    /// Locale of the site's default language.
    fn default_locale(&self) -> String;
}

/// Fixed locale registry: one current and one default locale.
#[derive(Debug, Clone)]
pub struct StaticLocales {
    current: String,
    default: String,
}

impl StaticLocales {
    /// Create a registry with the given current and default locales.
    pub fn new(current: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            default: default.into(),
        }
    }
}

impl Default for StaticLocales {
    fn default() -> Self {
        Self::new("en", "en")
    }
}

impl LocaleRegistry for StaticLocales {
    fn current_locale(&self) -> String {
        self.current.clone()
    }

    fn default_locale(&self) -> String {
        self.default.clone()
    }
}

/// Resolve a label for `requested`, falling back to `fallback` and then
/// to the first declared entry. Plain labels are returned unchanged.
pub fn resolve_label<'a>(label: &'a Label, requested: &str, fallback: &str) -> Option<&'a str> {
    match label {
        Label::Plain(text) => Some(text),
        Label::Localized(map) => map
            .get(requested)
            .or_else(|| map.get(fallback))
            .or_else(|| map.values().next())
            .map(String::as_str),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn localized(entries: &[(&str, &str)]) -> Label {
        Label::Localized(IndexMap::from_iter(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        ))
    }

    #[test]
    fn plain_label_ignores_locales() {
        let label = Label::Plain("Title".into());
        assert_eq!(resolve_label(&label, "de", "en"), Some("Title"));
        assert_eq!(resolve_label(&label, "fr", "fr"), Some("Title"));
    }

    #[test]
    fn requested_locale_wins() {
        let label = localized(&[("en", "Title"), ("de", "Titel")]);
        assert_eq!(resolve_label(&label, "de", "en"), Some("Titel"));
    }

    #[test]
    fn absent_locale_falls_back_to_default() {
        let label = localized(&[("en", "Title"), ("de", "Titel")]);
        assert_eq!(resolve_label(&label, "fr", "en"), Some("Title"));
    }

    #[test]
    fn absent_default_falls_back_to_first_entry() {
        let label = localized(&[("de", "Titel"), ("it", "Titolo")]);
        assert_eq!(resolve_label(&label, "fr", "en"), Some("Titel"));
    }

    #[test]
    fn empty_mapping_resolves_to_nothing() {
        let label = localized(&[]);
        assert_eq!(resolve_label(&label, "en", "en"), None);
    }

    #[test]
    fn static_locales_default_is_english() {
        let locales = StaticLocales::default();
        assert_eq!(locales.current_locale(), "en");
        assert_eq!(locales.default_locale(), "en");
    }
}
