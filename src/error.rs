use std::io;
use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Everything that can stop a split run.
///
/// Pre-flight problems get their own variants so callers can tell a bad
/// configuration apart from a failure halfway through the source file.
/// Engine and I/O failures are passed through unchanged.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The configured source file does not exist (or is not a regular file).
    #[error("datafile not found: {}", .0.display())]
    DatafileNotFound(PathBuf),

    /// A non-default output directory was given but does not exist.
    /// The splitter never creates directories on its own.
    #[error("output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    /// Failure inside the tabular engine: CSV parse/write problems,
    /// missing columns, schema trouble.
    #[error(transparent)]
    Engine(#[from] PolarsError),

    /// Raw I/O failure outside the engine (line scan, chunk file creation).
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_variants_render_the_offending_path() {
        let err = SplitError::DatafileNotFound(PathBuf::from("missing.csv"));
        assert!(err.to_string().contains("missing.csv"));

        let err = SplitError::OutputDirMissing(PathBuf::from("/no/such/dir"));
        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn io_errors_convert_transparently() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "locked");
        let err = SplitError::from(io_err);
        assert!(matches!(err, SplitError::Io(_)));
        assert!(err.to_string().contains("locked"));
    }
}
