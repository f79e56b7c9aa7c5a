//! Split pipeline: one pass over the source, one chunk at a time.
//!
//! ```text
//!  source.csv
//!      │
//!      ▼
//!  ┌────────┐
//!  │  scan  │  line count, operator preview
//!  └────────┘
//!      │
//!      ▼
//!  ┌────────┐
//!  │ window │  skip/take one chunk of data rows
//!  └────────┘
//!      │
//!      ▼
//!  ┌────────┐
//!  │ filter │  the timestamp stages
//!  └────────┘
//!      │
//!      ▼
//!  ┌────────┐
//!  │ writer │  input{k}.csv
//!  └────────┘
//! ```

pub mod scan;
pub mod window;
pub mod filter;
pub mod writer;

use std::time::{Duration, Instant};

use crate::config::RunConfig;
use crate::error::SplitError;

/// What a finished run produced.
#[derive(Debug)]
pub struct SplitSummary {
    /// Chunk files written, cap included.
    pub files_created: usize,
    /// Data rows surviving the filters across all chunks.
    pub rows_written: usize,
    /// Wall time from the first read to the last write.
    pub elapsed: Duration,
}

/// Execute one split run end to end.
///
/// Validates the configuration, reports the source size and a preview, then
/// walks the source one window at a time:
/// * each window runs through the timestamp stages independently
/// * every window produces a chunk file, even when nothing survives
/// * the file cap is checked before a window is read, so rows past the cap
///   are never touched
///
/// Operator-facing progress goes to stdout; diagnostics go through `log`.
pub fn run(config: &RunConfig) -> Result<SplitSummary, SplitError> {
    config.validate()?;
    log::debug!(
        "chunks of {} rows, cap {}, sampling declared at {}/min",
        config.rows_per_chunk,
        config.max_files,
        config.meas_per_minute
    );

    let started = Instant::now();
    println!("Reading {}", config.datafile.display());

    let total_lines = scan::count_lines(&config.datafile)?;
    println!("Total lines: {total_lines}");
    println!("{}", scan::preview(&config.datafile, config.has_header)?);

    // Windows count data rows only; the header line is not data.
    let columns = if config.has_header {
        Some(window::resolve_columns(&config.datafile)?)
    } else {
        None
    };
    let data_rows = total_lines.saturating_sub(usize::from(config.has_header));

    let mut files_created = 0usize;
    let mut rows_written = 0usize;
    let mut offset = 0usize;
    while offset < data_rows {
        if files_created == config.max_files {
            log::debug!(
                "file cap of {} reached, {} data rows left unread",
                config.max_files,
                data_rows - offset
            );
            break;
        }

        let chunk_started = Instant::now();
        let frame = window::read_window(
            &config.datafile,
            offset,
            config.rows_per_chunk,
            columns.as_deref(),
        )?;
        let parsed = filter::parse_timestamps(frame, &config.timestamp_column)?;
        let aligned = filter::keep_aligned(parsed, &config.timestamp_column)?;
        let mut chunk = filter::dedupe_timestamps(aligned, &config.timestamp_column)?;

        let rows = chunk.height();
        let path = writer::write_chunk(
            &mut chunk,
            &config.output_dir,
            files_created,
            config.has_header,
        )?;
        log::debug!("wrote {}", path.display());

        rows_written += rows;
        files_created += 1;
        let secs = chunk_started.elapsed().as_secs_f64();
        println!(" --> File {files_created} written: {rows} rows in {secs:.3}s");

        offset += config.rows_per_chunk;
    }

    Ok(SplitSummary {
        files_created,
        rows_written,
        elapsed: started.elapsed(),
    })
}
