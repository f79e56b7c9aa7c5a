use std::path::PathBuf;

use crate::error::SplitError;

/// Column holding the measurement timestamp in every supported export.
pub const TIMESTAMP_COLUMN: &str = "Fecha";

/// Layout the exports write timestamps in. Values that do not match are
/// treated as unparseable, and chunk files render timestamps back in the
/// same layout.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Settings for one split run, fully resolved before any file is touched.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Source CSV to split.
    pub datafile: PathBuf,
    /// Whether the source starts with a header row.
    pub has_header: bool,
    /// Data rows consumed per output chunk.
    pub rows_per_chunk: usize,
    /// Hard cap on the number of chunk files written.
    pub max_files: usize,
    /// Directory the chunk files go into.
    pub output_dir: PathBuf,
    /// Nominal measurements per minute in the source. Recorded for operators;
    /// the alignment filter keys on the half-minute grid regardless.
    pub meas_per_minute: u32,
    /// Name of the timestamp column, [`TIMESTAMP_COLUMN`] in practice.
    pub timestamp_column: String,
}

impl RunConfig {
    /// Pre-flight checks, run before any data is read.
    ///
    /// The datafile is checked first so a bad source path is reported even
    /// when the output directory is also wrong. The default output directory
    /// `"."` is exempt from the existence check; any other directory must
    /// already exist, this tool never creates one.
    pub fn validate(&self) -> Result<(), SplitError> {
        if !self.datafile.is_file() {
            return Err(SplitError::DatafileNotFound(self.datafile.clone()));
        }
        if self.output_dir.as_os_str() != "." && !self.output_dir.is_dir() {
            return Err(SplitError::OutputDirMissing(self.output_dir.clone()));
        }
        Ok(())
    }
}
