use polars::prelude::*;

use crate::config::TIMESTAMP_LAYOUT;

/// Seconds-of-minute values the half-minute grid keeps.
const GRID_SECONDS: [u32; 2] = [0, 30];

// ---------------------------------------------------------------------------
// Stage 1: timestamp coercion
// ---------------------------------------------------------------------------

/// Parse the timestamp column against [`TIMESTAMP_LAYOUT`].
///
/// Values that do not match the layout become null instead of failing the
/// run; later stages drop those rows. The column is cast to string first so
/// windows whose timestamps were inferred as something else still coerce
/// cleanly. A missing column is a hard error.
pub fn parse_timestamps(frame: DataFrame, column: &str) -> PolarsResult<DataFrame> {
    frame
        .lazy()
        .with_column(
            col(column)
                .cast(DataType::String)
                .str()
                .to_datetime(
                    Some(TimeUnit::Microseconds),
                    None,
                    StrptimeOptions {
                        format: Some(TIMESTAMP_LAYOUT.into()),
                        strict: false,
                        ..Default::default()
                    },
                    lit("raise"),
                ),
        )
        .collect()
}

// ---------------------------------------------------------------------------
// Stage 2: grid alignment
// ---------------------------------------------------------------------------

/// Keep only rows whose timestamp lands on the half-minute grid.
///
/// Null timestamps (unparseable values) never equal a grid second, so they
/// fall out here as well.
pub fn keep_aligned(frame: DataFrame, column: &str) -> PolarsResult<DataFrame> {
    let second = col(column).dt().second();
    frame
        .lazy()
        .filter(
            second
                .clone()
                .eq(lit(GRID_SECONDS[0]))
                .or(second.eq(lit(GRID_SECONDS[1]))),
        )
        .collect()
}

// ---------------------------------------------------------------------------
// Stage 3: dedup
// ---------------------------------------------------------------------------

/// Drop rows repeating an already-seen timestamp, keeping the first
/// occurrence and the row order of the window.
pub fn dedupe_timestamps(frame: DataFrame, column: &str) -> PolarsResult<DataFrame> {
    frame
        .lazy()
        .filter(col(column).is_first_distinct())
        .collect()
}
