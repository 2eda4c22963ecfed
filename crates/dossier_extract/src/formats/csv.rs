use std::path::Path;

use crate::error::Result;

// Rows are flushed into the rendering in fixed-size batches so a large file
// is never buffered twice.
const ROWS_PER_CHUNK: usize = 10_000;

/// Render a CSV file as text, one tab-joined record per line. The reader is
/// incremental; memory stays bounded by the chunk size regardless of file
/// size.
pub(crate) fn extract(path: &Path) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rendered = String::new();
    let mut chunk = String::new();
    let mut rows = 0usize;

    for record in reader.records() {
        let record = record?;
        chunk.push_str(&record.iter().collect::<Vec<_>>().join("\t"));
        chunk.push('\n');
        rows += 1;
        if rows % ROWS_PER_CHUNK == 0 {
            rendered.push_str(&chunk);
            chunk.clear();
        }
    }
    rendered.push_str(&chunk);

    tracing::debug!(rows, bytes = rendered.len(), "csv rendered");
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_records_render_one_per_line() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "name,age").unwrap();
        writeln!(file, "alice,30").unwrap();
        writeln!(file, "bob,25").unwrap();

        let text = extract(file.path()).unwrap();
        assert_eq!(text, "name\tage\nalice\t30\nbob\t25\n");
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "a,b,c").unwrap();
        writeln!(file, "1").unwrap();

        let text = extract(file.path()).unwrap();
        assert_eq!(text, "a\tb\tc\n1\n");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(extract(Path::new("/nonexistent/input.csv")).is_err());
    }
}
