//! First-sheet XLSX reader.
//!
//! Rows come back exactly as stored, without header inference. Cell values
//! are flattened to text; formulas and styles are not kept, only their
//! cached values.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::{ParseError, ParseResult};
use crate::models::{Row, Table};

/// Parse the first worksheet of an XLSX workbook into rows of text cells.
pub fn parse_xlsx_bytes(bytes: &[u8]) -> ParseResult<Table> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| ParseError::Xlsx(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ParseError::NoWorksheet)?
        .map_err(|e| ParseError::Xlsx(e.to_string()))?;

    let rows: Table = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Row>())
        .collect();

    Ok(rows)
}

/// Coerce a cell to its primitive text form.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        // Serial day number, as the sheet stores it
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}
