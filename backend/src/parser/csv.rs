//! Hand-rolled RFC 4180 style CSV reader.
//!
//! Fields are separated by `,`, records by `\n`, `\r\n` or a bare `\r`.
//! Inside a double-quoted field `""` is a literal quote and separators
//! lose their meaning. Blank lines produce no row.

use std::iter::Peekable;
use std::str::Chars;

use crate::models::{Row, Table};

/// Parse CSV text into rows of fields.
///
/// # Example
/// ```
/// use sku_export::parser::parse_csv_text;
///
/// let rows = parse_csv_text("name,note\nAlice,\"says \"\"hi\"\"\"\n");
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1][1], "says \"hi\"");
/// ```
pub fn parse_csv_text(text: &str) -> Table {
    CsvReader::new(text).read_all()
}

struct CsvReader<'a> {
    chars: Peekable<Chars<'a>>,
    rows: Table,
    row: Row,
    field: String,
}

impl<'a> CsvReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            rows: Vec::new(),
            row: Vec::new(),
            field: String::new(),
        }
    }

    fn read_all(mut self) -> Table {
        let mut in_quotes = false;

        while let Some(c) = self.chars.next() {
            if in_quotes {
                if c == '"' {
                    if self.chars.peek() == Some(&'"') {
                        self.chars.next();
                        self.field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    self.field.push(c);
                }
                continue;
            }

            match c {
                '"' => in_quotes = true,
                ',' => self.end_field(),
                '\r' | '\n' => {
                    if c == '\r' && self.chars.peek() == Some(&'\n') {
                        self.chars.next();
                    }
                    self.end_record();
                }
                _ => self.field.push(c),
            }
        }

        // Trailing record without a terminator (or an unclosed quote).
        self.end_record();
        self.rows
    }

    fn end_field(&mut self) {
        self.row.push(std::mem::take(&mut self.field));
    }

    /// A record ends only on accumulated field text or a started row.
    fn has_pending(&self) -> bool {
        !self.field.is_empty() || !self.row.is_empty()
    }

    fn end_record(&mut self) {
        if !self.has_pending() {
            return;
        }
        self.end_field();
        self.rows.push(std::mem::take(&mut self.row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simple_csv() {
        let rows = parse_csv_text("a,b,c\n1,2,3");
        assert_eq!(rows, vec![row(&["a", "b", "c"]), row(&["1", "2", "3"])]);
    }

    #[test]
    fn test_all_record_terminators() {
        let rows = parse_csv_text("a\r\nb\rc\nd");
        assert_eq!(rows, vec![row(&["a"]), row(&["b"]), row(&["c"]), row(&["d"])]);
    }

    #[test]
    fn test_trailing_newline_adds_no_row() {
        assert_eq!(parse_csv_text("a,b\n1,2\n").len(), 2);
        assert_eq!(parse_csv_text("a,b\r\n1,2\r\n").len(), 2);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows = parse_csv_text("a,b\n\n\r\n1,2\n\n");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["1", "2"])]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_csv_text("").is_empty());
        assert!(parse_csv_text("\n\r\n").is_empty());
    }

    #[test]
    fn test_quoted_separators() {
        let rows = parse_csv_text("name,desc\nx,\"a,b\nc\r\nd\"\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], row(&["x", "a,b\nc\r\nd"]));
    }

    #[test]
    fn test_escaped_quotes() {
        let rows = parse_csv_text("\"say \"\"hi\"\"\",\"\"\"\"");
        assert_eq!(rows, vec![row(&["say \"hi\"", "\""])]);
    }

    #[test]
    fn test_empty_fields_kept() {
        let rows = parse_csv_text("a,,c\n,,\n");
        assert_eq!(rows, vec![row(&["a", "", "c"]), row(&["", "", ""])]);
    }

    #[test]
    fn test_lone_quoted_empty_field_adds_no_row() {
        let rows = parse_csv_text("h\n\"\"\n");
        assert_eq!(rows, vec![row(&["h"])]);

        // Still a field once the row has started
        let rows = parse_csv_text("\"\",\"\"\n");
        assert_eq!(rows, vec![row(&["", ""])]);
    }

    #[test]
    fn test_ragged_rows() {
        let rows = parse_csv_text("a,b,c\n1\n1,2,3,4");
        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn test_unterminated_quote_keeps_content() {
        let rows = parse_csv_text("a,\"open\nstill open");
        assert_eq!(rows, vec![row(&["a", "open\nstill open"])]);
    }

    #[test]
    fn test_non_ascii() {
        let rows = parse_csv_text("Titre,Prix\nCafé crème,3€");
        assert_eq!(rows[1], row(&["Café crème", "3€"]));
    }
}
