//! Table transformation.
//!
//! - [`columns`] - Remove columns by header prefix
//! - [`rows`] - Keep rows that carry a `Variant SKU`
//! - [`pipeline`] - End-to-end export: detect, parse, transform, serialize

pub mod columns;
pub mod pipeline;
pub mod rows;

pub use columns::{columns_to_remove, matching_prefix, prune_columns, REMOVED_PREFIXES};
pub use pipeline::*;
pub use rows::{filter_rows, find_sku_column, SKU_COLUMN};

use crate::models::Table;

/// Prune prefixed columns, then drop data rows without a SKU.
///
/// The SKU column is located on the pruned header. The header row is always
/// kept unless the input is empty.
///
/// # Example
/// ```
/// use sku_export::transform::transform_data;
///
/// let table = vec![
///     vec!["Handle".to_string(), "Variant SKU".to_string(), "Google Category".to_string()],
///     vec!["h1".to_string(), "SKU1".to_string(), "Cat".to_string()],
///     vec!["h2".to_string(), "".to_string(), "Cat2".to_string()],
/// ];
///
/// let out = transform_data(&table);
/// assert_eq!(out, vec![vec!["Handle", "Variant SKU"], vec!["h1", "SKU1"]]);
/// ```
pub fn transform_data(table: &[Vec<String>]) -> Table {
    if table.is_empty() {
        return Vec::new();
    }

    let pruned = prune_columns(table);
    let input_rows = pruned.len() - 1;
    let kept = filter_rows(pruned);

    tracing::debug!(
        data_rows = input_rows,
        kept = kept.len() - 1,
        dropped = input_rows - (kept.len() - 1),
        "filtered rows on {SKU_COLUMN}"
    );

    kept
}

/// Number of data rows in a transformed table (header excluded).
pub fn data_row_count(table: &[Vec<String>]) -> usize {
    table.len().saturating_sub(1)
}
