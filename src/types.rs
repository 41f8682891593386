//! Core blueprint schema types.
//!
//! All types deserialize from YAML via serde. A blueprint describes one
//! content type: a `fields` mapping from field name to field descriptor,
//! kept in declaration order. Labels are either plain strings or mappings
//! from locale code to string.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A label for a field or an option: plain text, or one text per locale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Label {
    /// A single string used for every locale.
    Plain(String),
    /// Locale code → string, in declaration order.
    Localized(IndexMap<String, String>),
}

/// A field's selectable options: value → label, in declaration order.
///
/// Keys are stored in canonical string form; bare scalar keys in the
/// source document (`1: "Yes"`) are coerced during deserialization.
pub type OptionsMap = IndexMap<String, Label>;

/// Descriptor for a single field within a blueprint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FieldDef {
    /// Human-facing label, single-locale or locale-keyed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    /// The field's widget type tag (`select`, `radio`, `text`, ...). Not
    /// interpreted by this crate.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Selectable options for choice-type fields.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_options"
    )]
    pub options: Option<OptionsMap>,
    /// Whether a value must be chosen for this field.
    #[serde(default)]
    pub required: bool,
}

/// A parsed blueprint document for one content type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Blueprint {
    /// Blueprint title shown in the panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Field name → descriptor, in declaration order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldDef>,
}

impl Blueprint {
    /// Look up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }
}

/// Canonical string form of a scalar YAML value.
///
/// This is the normalization used everywhere a value is compared or used
/// as a lookup key: `1` and `"1"` both normalize to `"1"`. Non-scalar
/// values have no canonical form and yield `None`.
pub fn scalar_string(value: &serde_yaml_ng::Value) -> Option<String> {
    use serde_yaml_ng::Value;
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Deserialize an options mapping, coercing scalar keys to strings.
fn de_options<'de, D>(deserializer: D) -> Result<Option<OptionsMap>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = IndexMap::<serde_yaml_ng::Value, Label>::deserialize(deserializer)?;
    let mut options = OptionsMap::with_capacity(raw.len());
    for (key, label) in raw {
        let key = scalar_string(&key).ok_or_else(|| {
            serde::de::Error::custom(format!("field option keys must be scalars, got: {key:?}"))
        })?;
        options.insert(key, label);
    }
    Ok(Some(options))
}
