//! Track Deviation - command line front end
//!
//! Loads a planned line and a recorded mission from GPX files, analyzes them and prints the
//! resulting statistics. Logs go to stderr and are controlled with `RUST_LOG`.

mod report;
mod settings;

use clap::Parser;
use report::Report;
use settings::Settings;
use std::process::ExitCode;
use track_deviation_lib::{Analyzer, DeviationError, load_track_pair};
use tracing_subscriber::EnvFilter;

/// Error types for the command line application
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Analysis(#[from] DeviationError),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load, analyze and print
fn run(settings: &Settings) -> Result<(), AppError> {
    profiling::scope!("run");

    let (line, mission) = load_track_pair(&settings.line_file, &settings.mission_file)?;

    let analyzer = Analyzer::new(settings.analysis_config());
    let analysis = analyzer.analyze(line.points(), mission.points())?;

    println!("{}", Report::new(analysis).render(settings.format)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::parse();
    tracing::info!(
        "{} {} (earth radius {} m)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        settings.earth_radius
    );

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
