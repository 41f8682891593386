//! Select-menu description and rendering.
//!
//! The context builds a [`SelectMenu`] — an abstract description carrying
//! the ordered options, the required flag, and whether a blank placeholder
//! precedes them. [`SelectMenu::to_html`] renders it as a `<select>`
//! element; hosts with their own element builder can walk the description
//! instead.

use std::collections::HashMap;
use std::fmt::Write as _;

/// Configuration key listing option values excluded from rendered menus.
pub const BLACKLIST_KEY: &str = "architect.blacklist";

/// Trait for the host's request-parameter reader.
///
/// Values are reported in canonical scalar string form (see
/// [`crate::types::scalar_string`]).
pub trait RequestParams: Send + Sync {
    /// Current value of the named parameter, if the request carries one.
    fn get(&self, name: &str) -> Option<String>;
}

/// Request-parameter reader for requests carrying no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParams;

impl RequestParams for NoParams {
    fn get(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Request-parameter reader backed by a fixed map.
#[derive(Debug, Clone, Default)]
pub struct MapParams {
    params: HashMap<String, String>,
}

impl MapParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter value, replacing any existing one.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl RequestParams for MapParams {
    fn get(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }
}

/// Trait for the host's configuration store, read here only for the
/// option blacklist.
pub trait SettingsStore: Send + Sync {
    /// Ordered scalar values configured under `key`; empty when unset.
    fn values(&self, key: &str) -> Vec<String>;
}

/// Settings store with nothing configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSettings;

impl SettingsStore for NoSettings {
    fn values(&self, _key: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Settings store backed by a fixed map of value lists.
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    entries: HashMap<String, Vec<String>>,
}

impl MapSettings {
    /// Create an empty settings store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value list for `key`, replacing any existing one.
    pub fn with(mut self, key: impl Into<String>, values: Vec<String>) -> Self {
        self.entries.insert(key.into(), values);
        self
    }
}

impl SettingsStore for MapSettings {
    fn values(&self, key: &str) -> Vec<String> {
        self.entries.get(key).cloned().unwrap_or_default()
    }
}

/// Loose scalar comparison used for option selection and blacklisting.
///
/// Both sides are expected in canonical scalar string form, so `"1"`
/// matches an option declared with the bare scalar `1`. Surrounding
/// whitespace is ignored.
pub fn scalars_match(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}

/// One selectable entry of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// Submitted value.
    pub value: String,
    /// Resolved, localized label.
    pub label: String,
    /// Whether the current request already carries this value.
    pub selected: bool,
}

/// Description of a `<select>` control built from a field's options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectMenu {
    /// Field name, used as the element's `id` and `name`.
    pub field: String,
    /// Whether the control is marked required.
    pub required: bool,
    /// Whether a blank placeholder option precedes the entries.
    pub blank: bool,
    /// Selectable entries in blueprint declaration order.
    pub options: Vec<MenuOption>,
}

impl SelectMenu {
    /// Render the menu as an HTML `<select>` element.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<select id=\"{id}\" name=\"{id}\"",
            id = escape_html(&self.field)
        );
        if self.required {
            html.push_str(" required");
        }
        html.push('>');
        if self.blank {
            html.push_str("<option value=\"\"></option>");
        }
        for option in &self.options {
            let _ = write!(html, "<option value=\"{}\"", escape_html(&option.value));
            if option.selected {
                html.push_str(" selected");
            }
            let _ = write!(html, ">{}</option>", escape_html(&option.label));
        }
        html.push_str("</select>");
        html
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_match_is_string_normalized() {
        assert!(scalars_match("1", "1"));
        assert!(scalars_match(" 1", "1 "));
        assert!(!scalars_match("1", "10"));
        assert!(!scalars_match("", "0"));
    }

    #[test]
    fn map_params_get() {
        let params = MapParams::new().with("category", "news");
        assert_eq!(params.get("category").as_deref(), Some("news"));
        assert_eq!(params.get("title"), None);
        assert_eq!(NoParams.get("category"), None);
    }

    #[test]
    fn map_settings_values() {
        let settings =
            MapSettings::new().with(BLACKLIST_KEY, vec!["0".to_string(), "draft".to_string()]);
        assert_eq!(settings.values(BLACKLIST_KEY), vec!["0", "draft"]);
        assert!(settings.values("architect.other").is_empty());
        assert!(NoSettings.values(BLACKLIST_KEY).is_empty());
    }

    #[test]
    fn to_html_renders_blank_and_selection() {
        let menu = SelectMenu {
            field: "category".into(),
            required: false,
            blank: true,
            options: vec![
                MenuOption {
                    value: "news".into(),
                    label: "News".into(),
                    selected: true,
                },
                MenuOption {
                    value: "opinion".into(),
                    label: "Opinion".into(),
                    selected: false,
                },
            ],
        };
        assert_eq!(
            menu.to_html(),
            "<select id=\"category\" name=\"category\">\
             <option value=\"\"></option>\
             <option value=\"news\" selected>News</option>\
             <option value=\"opinion\">Opinion</option>\
             </select>"
        );
    }

    #[test]
    fn to_html_renders_required_without_blank() {
        let menu = SelectMenu {
            field: "category".into(),
            required: true,
            blank: false,
            options: Vec::new(),
        };
        assert_eq!(
            menu.to_html(),
            "<select id=\"category\" name=\"category\" required></select>"
        );
    }

    #[test]
    fn to_html_escapes_values_and_labels() {
        let menu = SelectMenu {
            field: "q\"uote".into(),
            required: false,
            blank: false,
            options: vec![MenuOption {
                value: "a&b".into(),
                label: "<Ampersand>".into(),
                selected: false,
            }],
        };
        let html = menu.to_html();
        assert!(html.contains("id=\"q&quot;uote\""));
        assert!(html.contains("value=\"a&amp;b\""));
        assert!(html.contains(">&lt;Ampersand&gt;<"));
    }
}
