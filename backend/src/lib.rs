//! # sku-export - Product spreadsheet pruning and SKU filtering
//!
//! Takes a product export (CSV or single-sheet XLSX), removes the columns
//! whose header starts with a known prefix (Google Shopping, options, images,
//! unit price), keeps only the rows that carry a `Variant SKU`, and writes the
//! result back in the same format as `<name>-export.<ext>`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ CSV / XLSX  │────▶│   Parser    │────▶│  Transform  │────▶│   Writer    │
//! │   (bytes)   │     │ (by suffix) │     │ (cols+rows) │     │ (same fmt)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use sku_export::{create_export, ExportRequest};
//!
//! let csv = b"Handle,Variant SKU\nh1,SKU1\nh2,\n".to_vec();
//! let result = create_export(ExportRequest::new(csv, "products.csv"));
//!
//! assert!(result.success);
//! assert_eq!(result.row_count, Some(1));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Table and file format models
//! - [`parser`] - CSV and XLSX parsing
//! - [`transform`] - Column pruning, row filtering and the export pipeline
//! - [`writer`] - CSV and XLSX serialization

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Serialization
pub mod writer;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ExportError, ExportOutcome, ParseError, WriteError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{content_type_for, FileFormat, Row, Table};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{decode_text, parse_csv_text, parse_table, parse_xlsx_bytes};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    data_row_count,
    filter_rows,
    prune_columns,
    transform_data,
    REMOVED_PREFIXES,
    SKU_COLUMN,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    create_export,
    try_create_export,
    BufferSource,
    ExportOutput,
    ExportRequest,
    ExportResult,
    FileInput,
    UploadedFile,
};

// =============================================================================
// Re-exports - Writer
// =============================================================================

pub use writer::{to_csv_string, write_table};
