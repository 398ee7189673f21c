//! Table serialization.
//!
//! - [`csv`] - Minimal-quoting CSV text
//! - [`xlsx`] - Single-sheet workbook

pub mod csv;
pub mod xlsx;

pub use self::csv::{escape_field, to_csv_string, write_csv};
pub use self::xlsx::{write_xlsx, SHEET_NAME};

use crate::error::WriteResult;
use crate::models::FileFormat;

/// Serialize a table in the given format.
pub fn write_table(table: &[Vec<String>], format: FileFormat) -> WriteResult<Vec<u8>> {
    match format {
        FileFormat::Csv => Ok(write_csv(table)),
        FileFormat::Xlsx => write_xlsx(table),
    }
}
