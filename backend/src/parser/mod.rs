//! Input decoding and table parsing.
//!
//! - [`csv`] - Hand-rolled CSV reader
//! - [`xlsx`] - First-sheet XLSX reader
//!
//! [`parse_table`] dispatches on the [`FileFormat`] detected from the filename.

pub mod csv;
pub mod xlsx;

pub use self::csv::parse_csv_text;
pub use self::xlsx::parse_xlsx_bytes;

use encoding_rs::Encoding;

use crate::error::ParseResult;
use crate::models::{FileFormat, Table};

/// Parse raw bytes in the given format into a table.
pub fn parse_table(bytes: &[u8], format: FileFormat) -> ParseResult<Table> {
    match format {
        FileFormat::Csv => Ok(parse_csv_text(&decode_text(bytes))),
        FileFormat::Xlsx => parse_xlsx_bytes(bytes),
    }
}

/// Decode CSV bytes to text.
///
/// Valid UTF-8 is used as-is, minus a leading byte order mark. Anything else
/// is decoded with the charset chardet guesses, since spreadsheet tools still
/// export Latin-1 / Windows-1252.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => decode_as(bytes, sniff_encoding(bytes)),
    }
}

/// Guess the encoding of non-UTF-8 bytes.
///
/// ISO-8859-1 labels resolve to windows-1252 (WHATWG), which is what those
/// exports really contain. Unknown labels fall back to UTF-8.
pub fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    let (charset, _confidence, _language) = chardet::detect(bytes);
    Encoding::for_label(chardet::charset2encoding(&charset).as_bytes())
        .or_else(|| Encoding::for_label(charset.as_bytes()))
        .unwrap_or(encoding_rs::UTF_8)
}

/// Decode with `encoding`; UTF-8 is decoded lossily.
pub fn decode_as(bytes: &[u8], encoding: &'static Encoding) -> String {
    if encoding == encoding_rs::UTF_8 {
        String::from_utf8_lossy(bytes).into_owned()
    } else {
        encoding.decode_without_bom_handling(bytes).0.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_csv() {
        let table = parse_table(b"Handle,Variant SKU\nh1,S1\n", FileFormat::Csv).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0], vec!["Handle", "Variant SKU"]);
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let text = decode_text(b"\xEF\xBB\xBFHandle,Title");
        assert_eq!(text, "Handle,Title");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        assert_eq!(decode_as(bytes, encoding_rs::WINDOWS_1252), "Société");
    }

    #[test]
    fn test_invalid_utf8_never_fails() {
        let text = decode_text(&[b'a', b',', 0xFF, 0xFE, b'\n']);
        assert!(text.starts_with("a,"));
    }

    #[test]
    fn test_utf8_decoding_is_lossy() {
        assert_eq!(decode_as(b"ok\xFF", encoding_rs::UTF_8), "ok\u{FFFD}");
    }

    #[test]
    fn test_latin1_label_resolves_to_windows_1252() {
        assert_eq!(Encoding::for_label(b"iso-8859-1"), Some(encoding_rs::WINDOWS_1252));
    }
}
