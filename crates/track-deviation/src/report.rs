//! Presentation of analysis results

use crate::settings::OutputFormat;
use serde::Serialize;
use std::fmt;
use track_deviation_lib::Analysis;

/// Printable summary of one analysis run
#[derive(Debug, Clone, Copy)]
pub struct Report {
    analysis: Analysis,
}

/// Machine readable form, in SI units
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    analysis: &'a Analysis,
    distance_km: f64,
    area_square_km: f64,
}

impl Report {
    pub fn new(analysis: Analysis) -> Self {
        Self { analysis }
    }

    /// Render the report in the requested format
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(&JsonReport {
                analysis: &self.analysis,
                distance_km: self.analysis.distance_km(),
                area_square_km: self.analysis.area_square_km(),
            }),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The total length of the line was {:.2} km.",
            self.analysis.distance_km()
        )?;
        writeln!(
            f,
            "The total area between the line and the route taken was {:.2} square km.",
            self.analysis.area_square_km()
        )?;
        write!(
            f,
            "The average deviation from the line was {:.1} metres.",
            self.analysis.average_deviation_meters
        )
    }
}
