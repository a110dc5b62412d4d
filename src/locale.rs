//! Locale dictionary data model.
//!
//! A locale file is a JSON object mapping translation keys to either a
//! string value or a nested object of further keys. In memory this is a
//! [`LocaleMap`] over [`LocaleValue`], an insertion-ordered map so that
//! converter output keeps the spreadsheet's row order.
//!
//! On the wire the variant tag disappears: `LocaleValue` serializes
//! untagged, so files stay plain JSON dictionaries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::{ValidateError, ValidateResult};

/// Insertion-ordered mapping from translation key to value.
pub type LocaleMap = IndexMap<String, LocaleValue>;

/// One value inside a locale dictionary.
///
/// `Node` is a nested dictionary; `Leaf` is everything else. Translation
/// values are strings, but arrays and other scalars occasionally appear in
/// real locale files and must pass through untouched, so `Leaf` carries a
/// raw JSON value rather than a `String`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleValue {
    /// A nested dictionary of further keys.
    Node(LocaleMap),
    /// A translation string, array, or other non-object value.
    Leaf(Value),
}

impl LocaleValue {
    /// Create a leaf from a translation string.
    pub fn leaf(text: impl Into<String>) -> Self {
        LocaleValue::Leaf(Value::String(text.into()))
    }

    /// The nested map, if this is a node.
    pub fn as_node(&self) -> Option<&LocaleMap> {
        match self {
            LocaleValue::Node(map) => Some(map),
            LocaleValue::Leaf(_) => None,
        }
    }

    /// True if this is a nested dictionary.
    pub fn is_node(&self) -> bool {
        matches!(self, LocaleValue::Node(_))
    }
}

impl From<Value> for LocaleValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(obj) => LocaleValue::Node(
                obj.into_iter().map(|(k, v)| (k, LocaleValue::from(v))).collect(),
            ),
            other => LocaleValue::Leaf(other),
        }
    }
}

/// Join a parent key path and a child key into a dotted path.
///
/// Dotted paths are used only for diagnostics (`"menu.file.open"`).
pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Read a locale file into an ordered dictionary.
///
/// The top level of a locale file must be a JSON object; anything else is
/// rejected rather than silently wrapped.
pub fn read_locale_file(path: &Path) -> ValidateResult<LocaleMap> {
    let content = std::fs::read_to_string(path).map_err(|source| ValidateError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| ValidateError::Json {
        path: path.display().to_string(),
        source,
    })?;

    match LocaleValue::from(value) {
        LocaleValue::Node(map) => Ok(map),
        LocaleValue::Leaf(_) => Err(ValidateError::NotADictionary {
            path: path.display().to_string(),
        }),
    }
}

/// Write a locale dictionary as 2-space-indented JSON with a trailing
/// newline.
pub fn write_locale_file(path: &Path, map: &LocaleMap) -> ValidateResult<()> {
    let mut json =
        serde_json::to_string_pretty(map).map_err(|source| ValidateError::Json {
            path: path.display().to_string(),
            source,
        })?;
    json.push('\n');
    std::fs::write(path, json).map_err(|source| ValidateError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_untagged_roundtrip() {
        let json_text = r#"{"greeting":"你好","menu":{"file":"File"}}"#;
        let map: LocaleMap = serde_json::from_str(json_text).unwrap();

        assert_eq!(map["greeting"], LocaleValue::leaf("你好"));
        let menu = map["menu"].as_node().unwrap();
        assert_eq!(menu["file"], LocaleValue::leaf("File"));

        let back = serde_json::to_string(&map).unwrap();
        assert_eq!(back, json_text);
    }

    #[test]
    fn test_from_value_preserves_arrays_as_leaves() {
        let value = json!({"list": ["a", "b"], "n": 3});
        let converted = LocaleValue::from(value);
        let map = converted.as_node().unwrap();

        assert_eq!(map["list"], LocaleValue::Leaf(json!(["a", "b"])));
        assert_eq!(map["n"], LocaleValue::Leaf(json!(3)));
    }

    #[test]
    fn test_insertion_order_kept() {
        let json_text = r#"{"z":"1","a":"2","m":"3"}"#;
        let map: LocaleMap = serde_json::from_str(json_text).unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "a"), "a");
        assert_eq!(join_path("a", "b"), "a.b");
        assert_eq!(join_path("a.b", "c"), "a.b.c");
    }
}
