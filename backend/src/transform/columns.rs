//! Column pruning by header prefix.

use std::collections::BTreeSet;

use crate::models::{Row, Table};

/// Header prefixes whose columns are removed from every export.
///
/// Matching is a case-sensitive `starts_with`; the order only matters for
/// diagnostics.
pub const REMOVED_PREFIXES: [&str; 9] = [
    "Google",
    "Option1",
    "Option2",
    "Option3",
    "Image Src",
    "Image Position",
    "Variant Image",
    "Image Alt Text",
    "Unit Price",
];

/// First prefix of [`REMOVED_PREFIXES`] that `header` starts with.
pub fn matching_prefix(header: &str) -> Option<&'static str> {
    REMOVED_PREFIXES
        .iter()
        .copied()
        .find(|prefix| header.starts_with(prefix))
}

/// Indices of header cells that start with a removed prefix.
pub fn columns_to_remove(header: &[String]) -> BTreeSet<usize> {
    header
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let prefix = matching_prefix(name)?;
            tracing::debug!(column = index, header = %name, prefix, "removing column");
            Some(index)
        })
        .collect()
}

/// Keep only the cells of `row` whose index is not in `removed`,
/// preserving their order.
pub fn prune_row(row: &[String], removed: &BTreeSet<usize>) -> Row {
    row.iter()
        .enumerate()
        .filter(|(index, _)| !removed.contains(index))
        .map(|(_, value)| value.clone())
        .collect()
}

/// Remove every column whose header (row 0) starts with a removed prefix.
pub fn prune_columns(table: &[Row]) -> Table {
    let Some(header) = table.first() else {
        return Vec::new();
    };

    let removed = columns_to_remove(header);
    if removed.is_empty() {
        return table.to_vec();
    }

    table.iter().map(|row| prune_row(row, &removed)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matching_prefix() {
        assert_eq!(matching_prefix("Google Shopping / Gender"), Some("Google"));
        assert_eq!(matching_prefix("Option1 Value"), Some("Option1"));
        assert_eq!(matching_prefix("Image Src"), Some("Image Src"));
        assert_eq!(matching_prefix("Variant Image"), Some("Variant Image"));
        assert_eq!(matching_prefix("Unit Price Total Measure"), Some("Unit Price"));
        assert_eq!(matching_prefix("Variant SKU"), None);
        assert_eq!(matching_prefix("google category"), None);
        assert_eq!(matching_prefix(" Google"), None);
    }

    #[test]
    fn test_columns_to_remove() {
        let header = row(&["Handle", "Option1 Name", "Title", "Image Alt Text", "Option4 Name"]);
        let removed = columns_to_remove(&header);
        assert_eq!(removed.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_prune_columns_all_rows() {
        let table = vec![
            row(&["Handle", "Google Category", "Variant SKU", "Image Position"]),
            row(&["h1", "Cat", "S1", "1"]),
            row(&["h2", "Cat2"]),
        ];

        let pruned = prune_columns(&table);
        assert_eq!(
            pruned,
            vec![row(&["Handle", "Variant SKU"]), row(&["h1", "S1"]), row(&["h2"])]
        );
    }

    #[test]
    fn test_pruning_is_idempotent() {
        let table = vec![
            row(&["Handle", "Option2 Value", "Variant SKU", "Google Age Group"]),
            row(&["h1", "Red", "S1", "adult"]),
        ];

        let once = prune_columns(&table);
        let twice = prune_columns(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_prune_empty_table() {
        assert!(prune_columns(&[]).is_empty());
    }
}
