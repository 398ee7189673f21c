//! XLSX serialization into a single worksheet named `Export`.

use rust_xlsxwriter::Workbook;

use crate::error::{WriteError, WriteResult};

/// Name of the only worksheet in an exported workbook.
pub const SHEET_NAME: &str = "Export";

/// Rows per worksheet.
const MAX_ROWS: usize = 1_048_576;

/// Columns per worksheet.
const MAX_COLUMNS: usize = 16_384;

/// Serialize a table to an XLSX workbook held in memory.
///
/// Every cell is written as a string, empty ones included, so the sheet keeps
/// the table's shape.
pub fn write_xlsx(table: &[Vec<String>]) -> WriteResult<Vec<u8>> {
    if table.len() > MAX_ROWS {
        return Err(WriteError::TooManyRows(table.len()));
    }
    let widest = table.iter().map(Vec::len).max().unwrap_or(0);
    if widest > MAX_COLUMNS {
        return Err(WriteError::TooManyColumns(widest));
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (row_idx, row) in table.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32, col_idx as u16, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
