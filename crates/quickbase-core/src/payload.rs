//! Tabular payload encoding for the bulk import path.
//!
//! The bulk write call carries one CSV row per record, fields ordered per the
//! column projection, rows joined with a fixed CRLF separator.

/// Row separator in the bulk upload block.
pub const ROW_SEPARATOR: &str = "\r\n";

/// Quotes a single field for inclusion in a CSV row. A field is quoted only
/// when it contains a delimiter, quote, or line break; embedded quotes are
/// doubled.
pub fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') || raw.contains('\r') {
        let mut quoted = String::with_capacity(raw.len() + 2);
        quoted.push('"');
        for ch in raw.chars() {
            if ch == '"' {
                quoted.push('"');
            }
            quoted.push(ch);
        }
        quoted.push('"');
        quoted
    } else {
        raw.to_string()
    }
}

/// Assembles one CSV row from already-encoded wire values.
pub fn csv_row<I>(fields: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut row = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            row.push(',');
        }
        row.push_str(&csv_field(field.as_ref()));
    }
    row
}

/// Joins rows into the final upload block.
pub fn csv_block(rows: &[String]) -> String {
    rows.join(ROW_SEPARATOR)
}
