use std::path::PathBuf;

use clap::Parser;

use crate::config::{RunConfig, TIMESTAMP_COLUMN};

/// Command line for the splitter.
///
/// Flag spellings (including the camelCase ones) are kept stable so existing
/// operator scripts keep working.
#[derive(Debug, Parser)]
#[command(
    name = "csv-split",
    version,
    about = "Split an oversized measurement CSV into capped, half-minute-aligned chunks"
)]
pub struct Cli {
    /// Source CSV file to split.
    #[arg(long, value_name = "FILE")]
    pub datafile: PathBuf,

    /// Whether the source starts with a header row ("true"/"false",
    /// case-insensitive; anything else counts as false).
    #[arg(long, value_name = "BOOL", default_value = "true")]
    pub header: String,

    /// Data rows consumed per output chunk.
    #[arg(long, value_name = "N", default_value_t = 1_000_000,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub nlines: usize,

    /// Maximum number of chunk files to write.
    #[arg(long, value_name = "N", default_value_t = 30)]
    pub nfiles: usize,

    /// Directory for the chunk files. Must already exist unless left at the
    /// default; the splitter never creates directories.
    #[arg(long = "outputPath", value_name = "DIR", default_value = ".")]
    pub output_path: PathBuf,

    /// Nominal measurements per minute in the source data.
    #[arg(long = "measPerMinute", value_name = "N", default_value_t = 2)]
    pub meas_per_minute: u32,
}

impl Cli {
    /// Resolve the raw flags into a validated-shape [`RunConfig`].
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            datafile: self.datafile,
            has_header: self.header.eq_ignore_ascii_case("true"),
            rows_per_chunk: self.nlines,
            max_files: self.nfiles,
            output_dir: self.output_path,
            meas_per_minute: self.meas_per_minute,
            timestamp_column: TIMESTAMP_COLUMN.to_string(),
        }
    }
}
