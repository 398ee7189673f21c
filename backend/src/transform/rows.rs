//! Row filtering on the `Variant SKU` column.

use crate::models::{cell, Row, Table};

/// Exact, case-sensitive header of the SKU column.
pub const SKU_COLUMN: &str = "Variant SKU";

/// Index of the first header cell equal to [`SKU_COLUMN`].
pub fn find_sku_column(header: &[String]) -> Option<usize> {
    header.iter().position(|name| name == SKU_COLUMN)
}

/// Whether a data row carries a non-blank SKU.
///
/// A missing SKU column means no row has a SKU.
pub fn has_sku(row: &[String], sku_column: Option<usize>) -> bool {
    sku_column.is_some_and(|index| !cell(row, index).trim().is_empty())
}

/// Keep the header row and every data row with a non-blank SKU.
pub fn filter_rows(table: Table) -> Table {
    let mut rows = table.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    let sku_column = find_sku_column(&header);
    match sku_column {
        Some(index) => tracing::debug!(column = index, "found {SKU_COLUMN} column"),
        None => tracing::warn!("no {SKU_COLUMN} column, every data row will be dropped"),
    }

    let mut kept: Table = vec![header];
    kept.extend(rows.filter(|row: &Row| has_sku(row, sku_column)));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_sku_column_first_match() {
        let header = row(&["Handle", "Variant SKU", "Variant SKU"]);
        assert_eq!(find_sku_column(&header), Some(1));
    }

    #[test]
    fn test_find_sku_column_is_exact() {
        assert_eq!(find_sku_column(&row(&["variant sku", "Variant SKU "])), None);
    }

    #[test]
    fn test_filter_rows_by_sku_presence() {
        let table = vec![
            row(&["Handle", "Variant SKU"]),
            row(&["h1", "S1"]),
            row(&["h1", ""]),
            row(&["h2", "   "]),
            row(&["h3"]),
            row(&["h3", " S3 "]),
        ];

        let kept = filter_rows(table);
        assert_eq!(
            kept,
            vec![row(&["Handle", "Variant SKU"]), row(&["h1", "S1"]), row(&["h3", " S3 "])]
        );
    }

    #[test]
    fn test_duplicate_skus_are_kept() {
        let table = vec![
            row(&["Handle", "Variant SKU"]),
            row(&["h1", "S1"]),
            row(&["h1", "S1"]),
        ];
        assert_eq!(filter_rows(table).len(), 3);
    }

    #[test]
    fn test_missing_sku_column_drops_all_data_rows() {
        let table = vec![row(&["Handle", "Title"]), row(&["h1", "Shirt"])];
        assert_eq!(filter_rows(table), vec![row(&["Handle", "Title"])]);
    }

    #[test]
    fn test_header_only() {
        let table = vec![row(&["Handle", "Variant SKU"])];
        assert_eq!(filter_rows(table).len(), 1);
    }
}
