//! CSV→JSON conversion pipeline.
//!
//! Turns a translation spreadsheet into an ordered JSON locale dictionary.
//! Each row carries a key and its English and Chinese values; the output
//! maps each key to the Chinese value when present, falling back to the
//! English one. Row order in the spreadsheet becomes key order in the JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use locsync::{convert_csv, rows_to_dictionary};
//!
//! let outcome = convert_csv(
//!     Path::new("translations/en_web.csv"),
//!     Path::new("locales/web/en_web.json"),
//! )?;
//! println!("{} keys written", outcome.key_count);
//! ```

use csv::{ReaderBuilder, Trim};
use indexmap::IndexMap;
use std::io::Read;
use std::path::Path;

use crate::error::{ConvertError, ConvertResult};

/// Required spreadsheet column: translation key.
const COL_KEY: &str = "Key";

/// Required spreadsheet column: English source text.
const COL_ENGLISH: &str = "English Value";

/// Required spreadsheet column: Chinese translation.
const COL_CHINESE: &str = "Chinese Value";

/// One parsed spreadsheet row.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRow {
    pub key: String,
    pub english: String,
    pub chinese: String,
}

/// Result of a completed conversion.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    /// Number of unique keys written.
    pub key_count: usize,
    /// Keys that appeared more than once in the spreadsheet. Only the
    /// first occurrence is kept.
    pub duplicate_keys: Vec<String>,
}

/// Parse spreadsheet rows from a CSV reader.
///
/// Cell whitespace is trimmed. The header row must contain the `Key`,
/// `English Value` and `Chinese Value` columns; extra columns are ignored.
pub fn parse_rows<R: Read>(reader: R) -> ConvertResult<Vec<TranslationRow>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let key_idx = column_index(&headers, COL_KEY)?;
    let english_idx = column_index(&headers, COL_ENGLISH)?;
    let chinese_idx = column_index(&headers, COL_CHINESE)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(TranslationRow {
            key: record.get(key_idx).unwrap_or("").to_string(),
            english: record.get(english_idx).unwrap_or("").to_string(),
            chinese: record.get(chinese_idx).unwrap_or("").to_string(),
        });
    }

    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> ConvertResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(ConvertError::MissingColumn(name))
}

/// Fold spreadsheet rows into an ordered dictionary.
///
/// The first occurrence of a key wins; later duplicates are dropped and
/// returned for reporting. Each key maps to the Chinese value when
/// non-empty, otherwise the English value.
pub fn rows_to_dictionary(
    rows: &[TranslationRow],
) -> (IndexMap<String, String>, Vec<String>) {
    let mut dictionary: IndexMap<String, String> = IndexMap::new();
    let mut duplicates = Vec::new();

    for row in rows {
        if row.key.is_empty() {
            continue;
        }
        if dictionary.contains_key(&row.key) {
            duplicates.push(row.key.clone());
            continue;
        }
        let value = if row.chinese.is_empty() {
            row.english.clone()
        } else {
            row.chinese.clone()
        };
        dictionary.insert(row.key.clone(), value);
    }

    (dictionary, duplicates)
}

/// Convert a translation spreadsheet into a JSON locale dictionary.
///
/// Reads `input`, folds the rows first-wins, and writes the dictionary as
/// 2-space-indented JSON to `output`, creating parent directories as
/// needed. The destination is overwritten unconditionally.
pub fn convert_csv(input: &Path, output: &Path) -> ConvertResult<ConvertOutcome> {
    let file = std::fs::File::open(input)?;
    let rows = parse_rows(file)?;
    let (dictionary, duplicate_keys) = rows_to_dictionary(&rows);

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&dictionary)?;
    std::fs::write(output, json)?;

    Ok(ConvertOutcome {
        key_count: dictionary.len(),
        duplicate_keys,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, english: &str, chinese: &str) -> TranslationRow {
        TranslationRow {
            key: key.into(),
            english: english.into(),
            chinese: chinese.into(),
        }
    }

    #[test]
    fn test_parse_rows_trims_cells() {
        let csv = "Key,English Value,Chinese Value\n greeting , Hello , 你好 \n";
        let rows = parse_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows, vec![row("greeting", "Hello", "你好")]);
    }

    #[test]
    fn test_parse_rows_extra_columns_ignored() {
        let csv = "Key,Notes,English Value,Chinese Value\na,ctx,A,甲\n";
        let rows = parse_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows, vec![row("a", "A", "甲")]);
    }

    #[test]
    fn test_parse_rows_missing_column() {
        let csv = "Key,English Value\na,A\n";
        let err = parse_rows(csv.as_bytes()).unwrap_err();

        assert!(err.to_string().contains("Chinese Value"));
    }

    #[test]
    fn test_chinese_preferred_english_fallback() {
        let rows = vec![row("a", "Hello", "你好"), row("b", "World", "")];
        let (dict, dups) = rows_to_dictionary(&rows);

        assert_eq!(dict["a"], "你好");
        assert_eq!(dict["b"], "World");
        assert!(dups.is_empty());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let rows = vec![row("greeting", "Hello", ""), row("greeting", "Hi", "")];
        let (dict, dups) = rows_to_dictionary(&rows);

        assert_eq!(dict.len(), 1);
        assert_eq!(dict["greeting"], "Hello");
        assert_eq!(dups, vec!["greeting"]);
    }

    #[test]
    fn test_row_order_preserved() {
        let rows = vec![row("z", "Z", ""), row("a", "A", ""), row("m", "M", "")];
        let (dict, _) = rows_to_dictionary(&rows);

        let keys: Vec<&String> = dict.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_empty_keys_skipped() {
        let rows = vec![row("", "Hello", ""), row("a", "A", "")];
        let (dict, dups) = rows_to_dictionary(&rows);

        assert_eq!(dict.len(), 1);
        assert!(dups.is_empty());
    }
}
