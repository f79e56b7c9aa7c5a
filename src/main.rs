mod cli;
mod config;
mod error;
mod split;

use anyhow::Context;
use clap::Parser;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Cli::parse().into_config();
    let summary = split::run(&config)
        .with_context(|| format!("splitting {}", config.datafile.display()))?;

    println!(
        "Done. {} files created, {} rows kept",
        summary.files_created, summary.rows_written
    );
    println!("Duration: {:.3} seconds", summary.elapsed.as_secs_f64());
    Ok(())
}
