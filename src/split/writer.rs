use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::*;

use crate::config::TIMESTAMP_LAYOUT;
use crate::error::SplitError;

/// Chunk file path for a zero-based chunk index: `input0.csv`, `input1.csv`, ...
pub fn chunk_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!("input{index}.csv"))
}

/// Write one chunk into `output_dir`, overwriting any previous file of the
/// same name. Timestamps are rendered back in [`TIMESTAMP_LAYOUT`], and the
/// header line mirrors whether the source had one. Empty chunks still
/// produce a file so the sequence of names stays gapless.
pub fn write_chunk(
    frame: &mut DataFrame,
    output_dir: &Path,
    index: usize,
    include_header: bool,
) -> Result<PathBuf, SplitError> {
    let path = chunk_path(output_dir, index);
    let mut file = File::create(&path)?;
    CsvWriter::new(&mut file)
        .include_header(include_header)
        .with_datetime_format(Some(TIMESTAMP_LAYOUT.to_string()))
        .finish(frame)?;
    Ok(path)
}
