//! Comma-separated row output for comparison tables

use std::io::Write;

/// Write `#header` on one line and the comma-joined `values` on the next
///
/// # Errors
///
/// Returns an error if writing to `writer` fails
pub fn write_columns<W: Write>(writer: &mut W, header: &str, values: &[f64]) -> std::io::Result<()> {
    writeln!(writer, "#{header}")?;

    let mut values = values.iter();
    if let Some(first) = values.next() {
        write!(writer, "{first}")?;
    }
    for value in values {
        write!(writer, ",{value}")?;
    }

    writeln!(writer)
}
