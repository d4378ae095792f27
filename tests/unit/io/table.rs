//! Tests for comma-separated row output

#[cfg(test)]
mod tests {
    use tension_spline::io::table::write_columns;

    // Tests header and values land on separate lines without trailing separators
    // Verified by writing a comma before the first value
    #[test]
    fn test_write_columns() {
        let mut buffer = Vec::new();
        write_columns(&mut buffer, "xvals", &[0.5, -1.0, 2.25]).expect("write to Vec");

        let text = String::from_utf8(buffer).expect("output is UTF-8");
        assert_eq!(text, "#xvals\n0.5,-1,2.25\n");
    }

    // Tests an empty row still produces both lines
    // Verified by returning early on empty input
    #[test]
    fn test_write_empty_columns() {
        let mut buffer = Vec::new();
        write_columns(&mut buffer, "empty", &[]).expect("write to Vec");
        assert_eq!(buffer, b"#empty\n\n");
    }

    // Tests consecutive rows append to the same writer
    // Verified by truncating the writer between rows
    #[test]
    fn test_rows_append() {
        let mut buffer = Vec::new();
        write_columns(&mut buffer, "a", &[1.0]).expect("write to Vec");
        write_columns(&mut buffer, "b", &[2.0, 3.0]).expect("write to Vec");
        assert_eq!(buffer, b"#a\n1\n#b\n2,3\n");
    }
}
