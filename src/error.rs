//! Error types for the locsync pipelines.
//!
//! One error enum per pipeline:
//!
//! - [`ConvertError`] - CSV→JSON conversion errors
//! - [`ExportError`] - JSON→CSV export errors
//! - [`ValidateError`] - locale validation errors
//! - [`PlatformError`] - platform resource export errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV→JSON Conversion Errors
// =============================================================================

/// Errors during CSV→JSON conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Failed to read or write a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input.
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("Missing CSV column: {0}")]
    MissingColumn(&'static str),

    /// Failed to serialize the dictionary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// JSON→CSV Export Errors
// =============================================================================

/// Errors during JSON→CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to read or write a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors during locale validation.
///
/// These are operational failures only. An incomplete locale is not an
/// error: it is reported through
/// [`ValidationReport`](crate::validate::ValidationReport).
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Failed to read or write a locale file.
    #[error("Cannot access '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Malformed JSON in a locale file.
    #[error("Invalid JSON in '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    /// The top level of a locale file is not a JSON object.
    #[error("'{path}' is not a JSON dictionary")]
    NotADictionary { path: String },
}

// =============================================================================
// Platform Export Errors
// =============================================================================

/// Errors during platform resource export.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to read or parse the source locale file, or to write the
    /// resource file.
    #[error("Locale error: {0}")]
    Locale(#[from] ValidateError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for validation operations.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Result type for platform export operations.
pub type PlatformResult<T> = Result<T, PlatformError>;
