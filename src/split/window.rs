use std::path::Path;

use polars::prelude::*;

// ---------------------------------------------------------------------------
// Header resolution
// ---------------------------------------------------------------------------

/// Read the column names from the header row of `path`.
///
/// Done once per run. Windowed reads skip past the header and re-attach
/// these names, so every chunk sees the same schema as the first.
pub fn resolve_columns(path: &Path) -> PolarsResult<Vec<String>> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_n_rows(Some(1))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(frame
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect())
}

// ---------------------------------------------------------------------------
// Windowed read
// ---------------------------------------------------------------------------

/// Read one window of up to `rows` data rows starting at data-row `offset`.
///
/// Windows are exact and non-overlapping: `offset` counts data rows only,
/// never the header line. With `columns` set the header line is skipped on
/// every read and the resolved names are re-attached; with `columns` absent
/// the engine's positional names (`column_1`, ...) are kept. A window that
/// runs past the end of the file simply comes back short.
pub fn read_window(
    path: &Path,
    offset: usize,
    rows: usize,
    columns: Option<&[String]>,
) -> PolarsResult<DataFrame> {
    let skip = offset + usize::from(columns.is_some());
    let mut frame = CsvReadOptions::default()
        .with_has_header(false)
        .with_skip_rows(skip)
        .with_n_rows(Some(rows))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    if let Some(names) = columns {
        frame.set_column_names(names.iter().map(String::as_str))?;
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use polars::df;
    use tempfile::TempDir;

    use super::*;

    fn fixture(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            "Fecha,valor\n\
             2018-05-01 00:00:00,1\n\
             2018-05-01 00:00:15,2\n\
             2018-05-01 00:00:30,3\n\
             2018-05-01 00:01:00,4\n\
             2018-05-01 00:01:30,5\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn resolves_header_names() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir);
        assert_eq!(
            resolve_columns(&path).unwrap(),
            vec!["Fecha".to_string(), "valor".to_string()]
        );
    }

    #[test]
    fn first_window_starts_after_the_header() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir);
        let columns = resolve_columns(&path).unwrap();

        let frame = read_window(&path, 0, 2, Some(&columns)).unwrap();
        let expected = df!(
            "Fecha" => &["2018-05-01 00:00:00", "2018-05-01 00:00:15"],
            "valor" => &[1i64, 2],
        )
        .unwrap();
        assert!(frame.equals(&expected));
    }

    #[test]
    fn windows_are_exact_and_non_overlapping() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir);
        let columns = resolve_columns(&path).unwrap();

        let frame = read_window(&path, 2, 2, Some(&columns)).unwrap();
        let expected = df!(
            "Fecha" => &["2018-05-01 00:00:30", "2018-05-01 00:01:00"],
            "valor" => &[3i64, 4],
        )
        .unwrap();
        assert!(frame.equals(&expected));
    }

    #[test]
    fn window_past_the_end_comes_back_short() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir);
        let columns = resolve_columns(&path).unwrap();

        let frame = read_window(&path, 4, 10, Some(&columns)).unwrap();
        let expected = df!(
            "Fecha" => &["2018-05-01 00:01:30"],
            "valor" => &[5i64],
        )
        .unwrap();
        assert!(frame.equals(&expected));
    }

    #[test]
    fn headerless_window_keeps_positional_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            "2018-05-01 00:00:00,1\n2018-05-01 00:00:30,2\n2018-05-01 00:01:00,3\n",
        )
        .unwrap();

        let frame = read_window(&path, 1, 2, None).unwrap();
        let expected = df!(
            "column_1" => &["2018-05-01 00:00:30", "2018-05-01 00:01:00"],
            "column_2" => &[2i64, 3],
        )
        .unwrap();
        assert!(frame.equals(&expected));
    }
}
