//! Cross-language locale validation pipeline.
//!
//! Checks that a target locale carries every key the base locale has:
//!
//! 1. Load both locale files.
//! 2. Recursively sort both dictionaries alphabetically.
//! 3. Diff the key sets, collecting dotted paths of missing keys.
//! 4. Rewrite BOTH files in sorted form, whatever the diff found.
//!
//! Step 4 is deliberate: the check doubles as a formatter, so running it
//! in a CI gate also normalizes key-order drift in the locale files.
//!
//! Validation returns a [`ValidationReport`]; the caller decides the exit
//! status. An incomplete locale is not an `Err` — only IO and parse
//! failures are.

use serde::Serialize;
use std::path::Path;

use crate::error::ValidateResult;
use crate::locale::{join_path, read_locale_file, write_locale_file, LocaleMap, LocaleValue};

/// Outcome of comparing a target locale against the base locale.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Dotted paths present in the base but absent from the target.
    ///
    /// When a whole subtree is absent only its root path appears; the
    /// comparison never descends into a missing subtree.
    pub missing: Vec<String>,

    /// Dotted paths where one side is a nested dictionary and the other a
    /// plain value. Reported for visibility but not counted as missing.
    pub mismatched: Vec<String>,
}

impl ValidationReport {
    /// True when the target has every key the base has.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Return a copy of the dictionary with keys sorted lexicographically at
/// every nesting level. Leaf values (arrays included) are untouched.
///
/// Sorting is idempotent and preserves the key set and every leaf value.
pub fn sort_recursive(map: &LocaleMap) -> LocaleMap {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    keys.into_iter()
        .map(|key| {
            let value = match &map[key] {
                LocaleValue::Node(nested) => LocaleValue::Node(sort_recursive(nested)),
                leaf @ LocaleValue::Leaf(_) => leaf.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Diff the key sets of two dictionaries into `report`.
///
/// For each base key: absent from the target records the dotted path as
/// missing; present on both sides as nested dictionaries recurses with
/// the accumulated prefix; a node on one side and a leaf on the other
/// records a mismatch and stops descending.
pub fn compare_keys(
    base: &LocaleMap,
    target: &LocaleMap,
    prefix: &str,
    report: &mut ValidationReport,
) {
    for (key, base_value) in base {
        let path = join_path(prefix, key);
        match target.get(key) {
            None => report.missing.push(path),
            Some(target_value) => match (base_value, target_value) {
                (LocaleValue::Node(base_nested), LocaleValue::Node(target_nested)) => {
                    compare_keys(base_nested, target_nested, &path, report);
                }
                (LocaleValue::Leaf(_), LocaleValue::Leaf(_)) => {}
                _ => report.mismatched.push(path),
            },
        }
    }
}

/// Validate one target locale file against the base locale file.
///
/// Both files are rewritten sorted (2-space indent, trailing newline)
/// regardless of the validation outcome.
pub fn check_translations(
    base_path: &Path,
    target_path: &Path,
) -> ValidateResult<ValidationReport> {
    let base = sort_recursive(&read_locale_file(base_path)?);
    let target = sort_recursive(&read_locale_file(target_path)?);

    let mut report = ValidationReport::default();
    compare_keys(&base, &target, "", &mut report);

    write_locale_file(base_path, &base)?;
    write_locale_file(target_path, &target)?;

    Ok(report)
}
