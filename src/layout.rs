//! File layout conventions for a translation tree.
//!
//! All three pipelines share the same fixed directory conventions:
//!
//! ```text
//! <root>/translations/<name>.csv      spreadsheet exchanged with translators
//! <root>/locales/web/<name>.json      converter output consumed by the web app
//! <root>/locales/<lang>.json          per-language dictionaries checked by the validator
//! <root>/locales/android/strings_<lang>.xml   Android resource export
//! <root>/locales/windows/resx_<lang>.resx     Windows resource export
//! ```
//!
//! Only the root is configurable; the layout below it is not.

use std::path::{Path, PathBuf};

/// Directory holding translation spreadsheets (relative to the root).
const TRANSLATIONS_DIR: &str = "translations";

/// Directory holding web locale dictionaries (relative to the root).
const WEB_LOCALES_DIR: &str = "locales/web";

/// Directory holding per-language locale dictionaries (relative to the root).
const LOCALES_DIR: &str = "locales";

/// Path conventions rooted at a translation tree.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// A layout rooted at the given directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// A layout rooted at the current directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// `translations/<name>.csv`
    pub fn translations_csv(&self, name: &str) -> PathBuf {
        self.root.join(TRANSLATIONS_DIR).join(format!("{}.csv", name))
    }

    /// `locales/web/<name>.json`
    pub fn web_locale(&self, name: &str) -> PathBuf {
        self.root.join(WEB_LOCALES_DIR).join(format!("{}.json", name))
    }

    /// `locales/<lang>.json`
    pub fn locale(&self, lang: &str) -> PathBuf {
        self.root.join(LOCALES_DIR).join(format!("{}.json", lang))
    }

    /// `locales/android/strings_<lang>.xml`
    pub fn android_strings(&self, lang: &str) -> PathBuf {
        self.root
            .join(LOCALES_DIR)
            .join("android")
            .join(format!("strings_{}.xml", lang))
    }

    /// `locales/windows/resx_<lang>.resx`
    pub fn windows_resx(&self, lang: &str) -> PathBuf {
        self.root
            .join(LOCALES_DIR)
            .join("windows")
            .join(format!("resx_{}.resx", lang))
    }
}
