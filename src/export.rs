//! JSON→CSV export pipeline.
//!
//! Turns a flat JSON locale dictionary back into a translation spreadsheet
//! for translators. Each key becomes a row `"key","value",""` — the third
//! column is a placeholder the translator fills in by hand.
//!
//! The input is read as an ordered list of `(key, value)` pairs rather
//! than a map, so that a key appearing twice in the raw JSON text (which a
//! materialized dictionary would silently collapse) is observable and can
//! be reported. Duplicates are a warning, never a failure.
//!
//! Values are written verbatim: embedded quotes and commas are NOT
//! escaped. This matches the spreadsheet format the rest of the toolchain
//! expects; keys and translation texts containing `"` or `,` will produce
//! malformed rows.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::error::ExportResult;

/// Spreadsheet header row, matching the converter's expected columns.
const CSV_HEADER: &str = "\"Key\",\"English Value\",\"Chinese Value\"";

/// A flat dictionary read as ordered pairs, duplicates included.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryPairs(pub Vec<(String, String)>);

impl DictionaryPairs {
    /// Keys that appear more than once, in first-repeat order.
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for (key, _) in &self.0 {
            if !seen.insert(key.as_str()) && !duplicates.contains(key) {
                duplicates.push(key.clone());
            }
        }
        duplicates
    }
}

impl<'de> Deserialize<'de> for DictionaryPairs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = DictionaryPairs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON dictionary of translation strings")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    // Non-string values are rendered as-is so nothing is
                    // silently dropped from the spreadsheet.
                    let text = match value {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    pairs.push((key, text));
                }
                Ok(DictionaryPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

/// Result of a completed export.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Number of rows written (excluding the header).
    pub row_count: usize,
    /// Keys that appeared more than once in the raw JSON text.
    pub duplicate_keys: Vec<String>,
}

/// Render dictionary pairs as spreadsheet text.
///
/// Header first, then one `"key","value",""` row per pair, in input
/// order. No escaping is applied to embedded quotes or commas, and no
/// trailing newline is written.
pub fn pairs_to_csv(pairs: &DictionaryPairs) -> String {
    let rows: Vec<String> = pairs
        .0
        .iter()
        .map(|(key, value)| format!("\"{}\",\"{}\",\"\"", key, value))
        .collect();
    format!("{}\n{}", CSV_HEADER, rows.join("\n"))
}

/// Export a JSON locale dictionary to a translation spreadsheet.
///
/// Reads `input` as ordered pairs, scans for duplicate keys, and writes
/// the spreadsheet to `output`, creating parent directories as needed.
pub fn export_json(input: &Path, output: &Path) -> ExportResult<ExportOutcome> {
    let content = std::fs::read_to_string(input)?;
    let pairs: DictionaryPairs = serde_json::from_str(&content)?;
    let duplicate_keys = pairs.duplicate_keys();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, pairs_to_csv(&pairs))?;

    Ok(ExportOutcome {
        row_count: pairs.0.len(),
        duplicate_keys,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_keep_raw_order_and_duplicates() {
        let json = r#"{"b":"2","a":"1","b":"3"}"#;
        let pairs: DictionaryPairs = serde_json::from_str(json).unwrap();

        assert_eq!(
            pairs.0,
            vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(pairs.duplicate_keys(), vec!["b"]);
    }

    #[test]
    fn test_no_duplicates_in_clean_input() {
        let json = r#"{"a":"1","b":"2"}"#;
        let pairs: DictionaryPairs = serde_json::from_str(json).unwrap();
        assert!(pairs.duplicate_keys().is_empty());
    }

    #[test]
    fn test_csv_rows_have_blank_third_column() {
        let pairs = DictionaryPairs(vec![("greeting".into(), "你好".into())]);
        let csv = pairs_to_csv(&pairs);

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"Key\",\"English Value\",\"Chinese Value\""
        );
        assert_eq!(lines.next().unwrap(), "\"greeting\",\"你好\",\"\"");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_values_written_verbatim() {
        // Embedded quotes are not escaped: the row is malformed on
        // purpose, matching the documented spreadsheet format.
        let pairs = DictionaryPairs(vec![("q".into(), "say \"hi\"".into())]);
        let csv = pairs_to_csv(&pairs);
        assert!(csv.contains("\"q\",\"say \"hi\"\",\"\""));
    }

    #[test]
    fn test_non_string_values_rendered() {
        let json = r#"{"n":3,"list":["a"]}"#;
        let pairs: DictionaryPairs = serde_json::from_str(json).unwrap();

        assert_eq!(pairs.0[0], ("n".to_string(), "3".to_string()));
        assert_eq!(pairs.0[1], ("list".to_string(), "[\"a\"]".to_string()));
    }
}
