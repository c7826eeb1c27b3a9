use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use track_deviation_lib::{AnalysisConfig, EARTH_RADIUS_M};

/// How the statistics are written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable sentences (km, km², m)
    #[default]
    Text,
    /// JSON object with values in meters and square meters
    Json,
}

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Track Deviation - Measure how closely a recorded GPX route followed a planned straight line
pub struct Settings {
    /// GPX file with the planned straight line
    #[clap(value_name = "LINE_GPX")]
    pub line_file: PathBuf,

    /// GPX file with the route actually taken
    #[clap(value_name = "MISSION_GPX")]
    pub mission_file: PathBuf,

    /// Radius of the spherical earth model in meters
    #[clap(long, env = "TRACK_DEVIATION_EARTH_RADIUS", default_value_t = EARTH_RADIUS_M)]
    pub earth_radius: f64,

    /// Output format
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Settings {
    /// Analysis configuration derived from the command line
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            earth_radius_m: self.earth_radius,
            ..AnalysisConfig::default()
        }
    }
}
