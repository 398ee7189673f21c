//! High-level export pipeline.
//!
//! ```text
//! validate input → detect format → read bytes → parse → transform → serialize
//! ```
//!
//! [`create_export`] never fails: every error becomes a failed
//! [`ExportResult`] carrying the error message.
//!
//! # Example
//!
//! ```rust
//! use sku_export::transform::pipeline::{create_export, ExportRequest};
//!
//! let csv = "Handle,Variant SKU,Google Category\nh1,SKU1,Cat\nh2,,Cat2\n";
//! let result = create_export(ExportRequest::new(csv.as_bytes().to_vec(), "products.csv"));
//!
//! assert!(result.success);
//! assert_eq!(result.filename.as_deref(), Some("products-export.csv"));
//! assert_eq!(result.row_count, Some(1));
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, ExportOutcome};
use crate::models::{FileFormat, Table};
use crate::parser::parse_table;
use crate::writer::write_table;

use super::{data_row_count, transform_data};

// =============================================================================
// Input
// =============================================================================

/// Anything that may hold the uploaded bytes.
pub trait BufferSource {
    /// The held bytes, or `None` if the object carries no buffer.
    fn buffer(&self) -> Option<&[u8]>;
}

/// An uploaded file as handed over by a file-delivery layer.
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub buffer: Option<Vec<u8>>,
}

impl UploadedFile {
    pub fn new(buffer: Vec<u8>) -> Self {
        Self { buffer: Some(buffer) }
    }
}

impl BufferSource for UploadedFile {
    fn buffer(&self) -> Option<&[u8]> {
        self.buffer.as_deref()
    }
}

/// The accepted shapes of an input file.
pub enum FileInput {
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// A file on disk, read in full.
    Path(PathBuf),
    /// An object holding the bytes.
    Buffered(Box<dyn BufferSource + Send + Sync>),
}

impl FileInput {
    /// Normalize to a single byte buffer.
    pub fn into_bytes(self) -> ExportOutcome<Vec<u8>> {
        match self {
            FileInput::Bytes(bytes) => Ok(bytes),
            FileInput::Path(path) => Ok(std::fs::read(path)?),
            FileInput::Buffered(source) => source
                .buffer()
                .map(<[u8]>::to_vec)
                .ok_or(ExportError::InvalidFileFormat),
        }
    }
}

impl std::fmt::Debug for FileInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileInput::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            FileInput::Path(path) => write!(f, "Path({})", path.display()),
            FileInput::Buffered(_) => write!(f, "Buffered"),
        }
    }
}

impl From<Vec<u8>> for FileInput {
    fn from(bytes: Vec<u8>) -> Self {
        FileInput::Bytes(bytes)
    }
}

impl From<PathBuf> for FileInput {
    fn from(path: PathBuf) -> Self {
        FileInput::Path(path)
    }
}

impl From<&Path> for FileInput {
    fn from(path: &Path) -> Self {
        FileInput::Path(path.to_path_buf())
    }
}

impl From<UploadedFile> for FileInput {
    fn from(file: UploadedFile) -> Self {
        FileInput::Buffered(Box::new(file))
    }
}

/// One export invocation: a file and the name it was uploaded under.
#[derive(Debug)]
pub struct ExportRequest {
    pub file: Option<FileInput>,
    pub filename: String,
}

impl ExportRequest {
    pub fn new(file: impl Into<FileInput>, filename: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            filename: filename.into(),
        }
    }
}

// =============================================================================
// Output
// =============================================================================

/// A successful export.
#[derive(Debug, Clone)]
pub struct ExportOutput {
    /// Derived output filename.
    pub filename: String,
    /// Format of both input and output.
    pub format: FileFormat,
    /// Serialized output file.
    pub buffer: Vec<u8>,
    /// Data rows written, header excluded.
    pub row_count: usize,
    /// The transformed table, header included.
    pub data: Table,
}

/// Tagged result handed back to callers.
///
/// On success `filename`, `buffer`, `row_count` and `data` are set; on
/// failure only `error` is.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Not serialized; callers deliver it as a download.
    #[serde(skip)]
    pub buffer: Option<Vec<u8>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Table>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportResult {
    /// Failed result with the given message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

impl From<ExportOutput> for ExportResult {
    fn from(output: ExportOutput) -> Self {
        Self {
            success: true,
            filename: Some(output.filename),
            buffer: Some(output.buffer),
            row_count: Some(output.row_count),
            data: Some(output.data),
            error: None,
        }
    }
}

impl From<ExportOutcome<ExportOutput>> for ExportResult {
    fn from(outcome: ExportOutcome<ExportOutput>) -> Self {
        match outcome {
            Ok(output) => output.into(),
            Err(err) => ExportResult::failure(err.to_string()),
        }
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Run an export and fold any error into the result.
pub fn create_export(request: ExportRequest) -> ExportResult {
    let outcome = try_create_export(request);
    if let Err(ref err) = outcome {
        tracing::warn!(error = %err, "export failed");
    }
    outcome.into()
}

/// Run an export, propagating errors.
///
/// 1. Reject a missing file
/// 2. Detect the format from the filename (nothing is read for unsupported names)
/// 3. Normalize the input to bytes
/// 4. Parse, prune columns, filter rows
/// 5. Fail if no data row is left, otherwise serialize
pub fn try_create_export(request: ExportRequest) -> ExportOutcome<ExportOutput> {
    let ExportRequest { file, filename } = request;

    let file = file.ok_or(ExportError::NoFileProvided)?;
    let format = FileFormat::detect(&filename).ok_or(ExportError::UnsupportedFormat)?;
    let bytes = file.into_bytes()?;

    tracing::debug!(%filename, ?format, size = bytes.len(), "parsing input");
    let table = parse_table(&bytes, format)?;
    let data = transform_data(&table);

    let row_count = data_row_count(&data);
    if row_count == 0 {
        return Err(ExportError::NoDataToExport);
    }

    let buffer = write_table(&data, format)?;
    let output_name = format.export_filename(&filename);

    tracing::info!(
        input = %filename,
        output = %output_name,
        rows = row_count,
        dropped = data_row_count(&table) - row_count,
        "export ready"
    );

    Ok(ExportOutput {
        filename: output_name,
        format,
        buffer,
        row_count,
        data,
    })
}
