use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use polars::prelude::*;

/// Rows shown to the operator before the split starts.
pub const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Line count
// ---------------------------------------------------------------------------

/// Count the physical lines of `path`, header included when there is one.
///
/// Streams the file through a reusable buffer, so sources far larger than
/// memory are fine. A trailing newline does not add a phantom line.
pub fn count_lines(path: &Path) -> io::Result<usize> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    let mut count = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(count);
        }
        count += 1;
    }
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// Read the first [`PREVIEW_ROWS`] rows of the source so the operator can
/// eyeball the shape of the data before chunks are produced.
pub fn preview(path: &Path, has_header: bool) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(has_header)
        .with_n_rows(Some(PREVIEW_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn counts_lines_with_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "a\nb\nc\n").unwrap();
        assert_eq!(count_lines(&path).unwrap(), 3);
    }

    #[test]
    fn counts_lines_without_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "a\nb\nc").unwrap();
        assert_eq!(count_lines(&path).unwrap(), 3);
    }

    #[test]
    fn empty_file_counts_zero_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "").unwrap();
        assert_eq!(count_lines(&path).unwrap(), 0);
    }

    #[test]
    fn preview_caps_at_five_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.csv");
        let mut content = String::from("Fecha,valor\n");
        for i in 0..8 {
            content.push_str(&format!("2018-05-01 00:0{i}:00,{i}\n"));
        }
        fs::write(&path, content).unwrap();

        let frame = preview(&path, true).unwrap();
        assert_eq!(frame.height(), PREVIEW_ROWS);
        let names: Vec<String> = frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["Fecha", "valor"]);
    }

    #[test]
    fn preview_of_headerless_source_uses_positional_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "2018-05-01 00:00:00,1\n2018-05-01 00:00:30,2\n").unwrap();

        let frame = preview(&path, false).unwrap();
        assert_eq!(frame.height(), 2);
        let names: Vec<String> = frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["column_1", "column_2"]);
    }
}
