//! # locsync - translation data conversion and locale validation
//!
//! locsync keeps a web app's translation data in shape: it converts
//! spreadsheets exchanged with translators into JSON locale dictionaries,
//! exports dictionaries back into spreadsheets, and checks that every
//! language carries the full key set of the base language.
//!
//! ## Architecture
//!
//! Four independent, linear pipelines sharing only file conventions:
//!
//! ```text
//! ┌──────────────┐  convert   ┌──────────────────┐  platform  ┌───────────────┐
//! │  CSV sheet   │───────────▶│  JSON dictionary │───────────▶│ strings.xml / │
//! │ translations/│◀───────────│  locales/        │            │ .resx         │
//! └──────────────┘   export   └──────────────────┘            └───────────────┘
//!
//! ┌──────────────┐   check    ┌──────────────────┐
//! │ locales/en   │───────────▶│  missing-key     │   sorted files
//! │ locales/zh   │            │  report          │ + rewritten to disk
//! └──────────────┘            └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use locsync::{check_translations, Layout};
//!
//! let layout = Layout::current_dir();
//! let report = check_translations(&layout.locale("en"), &layout.locale("zh"))?;
//! if !report.is_complete() {
//!     eprintln!("missing: {:?}", report.missing);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Per-pipeline error types
//! - [`locale`] - Ordered locale dictionary model
//! - [`layout`] - Fixed file-path conventions
//! - [`convert`] - CSV→JSON conversion
//! - [`export`] - JSON→CSV export
//! - [`platform`] - Android/Windows resource export
//! - [`validate`] - Cross-language key validation

// Core modules
pub mod error;
pub mod locale;

// File conventions
pub mod layout;

// Pipelines
pub mod convert;
pub mod export;
pub mod platform;
pub mod validate;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConvertError,
    ConvertResult,
    ExportError,
    ExportResult,
    PlatformError,
    PlatformResult,
    ValidateError,
    ValidateResult,
};

// =============================================================================
// Re-exports - Locale model
// =============================================================================

pub use locale::{
    join_path,
    read_locale_file,
    write_locale_file,
    LocaleMap,
    LocaleValue,
};

// =============================================================================
// Re-exports - Layout
// =============================================================================

pub use layout::Layout;

// =============================================================================
// Re-exports - Conversion
// =============================================================================

pub use convert::{
    convert_csv,
    parse_rows,
    rows_to_dictionary,
    ConvertOutcome,
    TranslationRow,
};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{
    export_json,
    pairs_to_csv,
    DictionaryPairs,
    ExportOutcome,
};

// =============================================================================
// Re-exports - Platform export
// =============================================================================

pub use platform::{
    escape_android,
    export_android,
    export_resx,
    flatten_resources,
    to_android_xml,
    to_resx_xml,
    PlatformOutcome,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validate::{
    check_translations,
    compare_keys,
    sort_recursive,
    ValidationReport,
};
