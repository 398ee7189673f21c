//! CSV serialization.


/// Whether a field has to be wrapped in quotes.
fn needs_quotes(field: &str) -> bool {
    field.contains([',', '"', '\n', '\r'])
}

/// Quote a field if it contains a comma, quote or line break.
pub fn escape_field(field: &str) -> String {
    if needs_quotes(field) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serialize a table to CSV text: `,` between fields, `\n` between rows,
/// no trailing newline.
pub fn to_csv_string(table: &[Vec<String>]) -> String {
    table
        .iter()
        .map(|row| {
            row.iter()
                .map(|field| escape_field(field))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize a table to UTF-8 encoded CSV bytes.
pub fn write_csv(table: &[Vec<String>]) -> Vec<u8> {
    to_csv_string(table).into_bytes()
}
