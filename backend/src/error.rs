//! Error types for the export engine.
//!
//! - [`ParseError`] - Reading a workbook container
//! - [`WriteError`] - Serializing a workbook container
//! - [`ExportError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. The `Display` text of
//! each [`ExportError`] variant is the message surfaced to callers.

use thiserror::Error;

// =============================================================================
// Parsing Errors
// =============================================================================

/// Errors while reading an input table.
///
/// CSV parsing never fails: any text yields a (possibly empty) table.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The workbook container could not be opened or read.
    #[error("Failed to read XLSX workbook: {0}")]
    Xlsx(String),

    /// The workbook contains no worksheet.
    #[error("Workbook contains no worksheet")]
    NoWorksheet,
}

// =============================================================================
// Serialization Errors
// =============================================================================

/// Errors while serializing the output table.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Workbook serialization failed.
    #[error("Failed to write XLSX workbook: {0}")]
    Xlsx(String),

    /// More rows than a worksheet can hold.
    #[error("Too many rows for a worksheet: {0}")]
    TooManyRows(usize),

    /// More columns than a worksheet can hold.
    #[error("Too many columns for a worksheet: {0}")]
    TooManyColumns(usize),
}

impl From<rust_xlsxwriter::XlsxError> for WriteError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        WriteError::Xlsx(err.to_string())
    }
}

// =============================================================================
// Export Errors (top-level)
// =============================================================================

/// Top-level export errors.
///
/// Returned by [`crate::try_create_export`]; [`crate::create_export`] folds
/// them into a failed [`crate::ExportResult`].
#[derive(Debug, Error)]
pub enum ExportError {
    /// No input file given.
    #[error("No file provided")]
    NoFileProvided,

    /// Input shape not recognized.
    #[error("Invalid file format")]
    InvalidFileFormat,

    /// Filename suffix is neither `.csv` nor `.xlsx`.
    #[error("Unsupported file format")]
    UnsupportedFormat,

    /// No data row survived filtering.
    #[error("No data to export")]
    NoDataToExport,

    /// Path input could not be read.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Output could not be serialized.
    #[error("{0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for serialization operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for export operations.
///
/// Named `ExportOutcome` rather than `ExportResult` because
/// [`crate::ExportResult`] is the tagged result struct handed to callers.
pub type ExportOutcome<T> = Result<T, ExportError>;
