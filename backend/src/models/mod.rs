//! Domain models for the export engine.
//!
//! - [`Row`] / [`Table`] - Row-oriented text table, row 0 is the header
//! - [`FileFormat`] - Spreadsheet format, detected from the filename

use serde::{Deserialize, Serialize};

// =============================================================================
// Table
// =============================================================================

/// One row of text cells. Rows of a table may differ in length.
pub type Row = Vec<String>;

/// Ordered rows; row 0 is the header row.
pub type Table = Vec<Row>;

/// Cell at `index`, or `""` when the row is too short.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

// =============================================================================
// File Format
// =============================================================================

/// MIME type used for XLSX downloads.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// MIME type used for CSV downloads.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Supported spreadsheet formats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Xlsx,
    Csv,
}

impl FileFormat {
    /// Detect the format from the filename suffix, ignoring case.
    ///
    /// Returns `None` for anything other than `.xlsx` / `.csv`; the file
    /// content is never inspected.
    pub fn detect(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".xlsx") {
            Some(FileFormat::Xlsx)
        } else if lower.ends_with(".csv") {
            Some(FileFormat::Csv)
        } else {
            None
        }
    }

    /// Literal suffix, including the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Xlsx => ".xlsx",
            FileFormat::Csv => ".csv",
        }
    }

    /// MIME type of a file in this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            FileFormat::Xlsx => XLSX_CONTENT_TYPE,
            FileFormat::Csv => CSV_CONTENT_TYPE,
        }
    }

    /// Derive the output filename: `products.csv` -> `products-export.csv`.
    ///
    /// The suffix replacement is case-sensitive, unlike [`FileFormat::detect`]:
    /// `products.CSV` is returned unchanged.
    pub fn export_filename(&self, filename: &str) -> String {
        let pattern = format!(r"{}$", regex::escape(self.extension()));
        let replacement = format!("-export{}", self.extension());

        regex::Regex::new(&pattern)
            .ok()
            .map(|re| re.replace(filename, replacement.as_str()).to_string())
            .unwrap_or_else(|| filename.to_string())
    }
}

/// MIME type for a download named `filename`: XLSX by suffix, CSV otherwise.
pub fn content_type_for(filename: &str) -> &'static str {
    match FileFormat::detect(filename) {
        Some(FileFormat::Xlsx) => XLSX_CONTENT_TYPE,
        _ => CSV_CONTENT_TYPE,
    }
}
