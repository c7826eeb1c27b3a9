//! Analysis pipeline - from a planned line and a travelled route to deviation statistics
//!
//! The pipeline is a pure function of its inputs: validate both tracks, measure the line,
//! measure the area between the tracks, then divide. Nothing is cached between calls.

use crate::spherical::{self, EARTH_RADIUS_M};
use crate::{DeviationError, GeoPoint, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum number of points in each input track
pub const MIN_TRACK_POINTS: usize = 2;

/// Configuration for an [`Analyzer`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisConfig {
    /// Radius of the spherical earth model in meters.
    /// Default: 6,378,137 m (WGS-84 equatorial radius)
    pub earth_radius_m: f64,
    /// Enclosed areas below this many square meters are logged as negligible.
    /// They are still reported as computed; a route that retraces the line is valid input.
    /// Default: 1 m²
    pub negligible_area_m2: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: EARTH_RADIUS_M,
            negligible_area_m2: 1.0,
        }
    }
}

/// Statistics comparing a planned line with the route actually taken
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Analysis {
    /// Great-circle distance between the first and last point of the line, in meters
    pub distance_meters: f64,
    /// Area enclosed between the line and the route, in square meters
    pub area_square_meters: f64,
    /// `area_square_meters / distance_meters`, in meters
    pub average_deviation_meters: f64,
}

impl Analysis {
    /// Line length in kilometers
    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1_000.0
    }

    /// Enclosed area in square kilometers
    #[inline]
    pub fn area_square_km(&self) -> f64 {
        self.area_square_meters / 1_000_000.0
    }
}

/// Average lateral deviation: enclosed area spread over the length of the line
///
/// # Errors
/// `DegenerateGeometry` when `distance` is zero, negative or not finite. The division is never
/// allowed to produce an infinity or NaN.
pub fn average_deviation(area: f64, distance: f64) -> Result<f64> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(DeviationError::DegenerateGeometry(format!(
            "cannot average an area of {area} m² over a line of length {distance} m"
        )));
    }
    Ok(area / distance)
}

/// Check a track before any computation happens
fn validate_track(name: &str, points: &[GeoPoint]) -> Result<()> {
    if points.len() < MIN_TRACK_POINTS {
        return Err(DeviationError::InsufficientPoints {
            track: name.to_string(),
            count: points.len(),
            minimum: MIN_TRACK_POINTS,
        });
    }
    points
        .iter()
        .try_for_each(|point| point.validated().map(|_| ()))
}

/// Computes deviation statistics with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Analyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    #[inline]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Compare a planned line with the route actually taken
    ///
    /// The line length is the great-circle distance between the line's first and last point
    /// only. Intermediate line points do not change the length, although they do shape the
    /// boundary of the enclosed area. This matches a planned line that is straight; for a
    /// bent plan the length is an endpoint-to-endpoint approximation.
    ///
    /// The enclosed area is subject to the complement ambiguity documented on
    /// [`spherical_polygon_area`](crate::spherical_polygon_area).
    ///
    /// # Errors
    /// - `InvalidRadius` if the configured radius is not finite and positive
    /// - `InsufficientPoints` if either track has fewer than two points
    /// - `InvalidCoordinate` if any point is outside the valid degree ranges
    /// - `DegenerateGeometry` if the line starts and ends at the same point
    pub fn analyze(&self, line: &[GeoPoint], mission: &[GeoPoint]) -> Result<Analysis> {
        let radius = spherical::validate_radius(self.config.earth_radius_m)?;
        validate_track("line track", line)?;
        validate_track("mission track", mission)?;

        let &[first, .., last] = line else {
            return Err(DeviationError::InsufficientPoints {
                track: "line track".to_string(),
                count: line.len(),
                minimum: MIN_TRACK_POINTS,
            });
        };
        let distance_meters = spherical::haversine_distance(first, last, radius);

        let ring = spherical::boundary_ring(line, mission);
        let area_square_meters = spherical::spherical_polygon_area(&ring, radius)?;
        if area_square_meters < self.config.negligible_area_m2 {
            tracing::debug!(
                "Enclosed area of {area_square_meters} m² is negligible, route follows the line"
            );
        }

        let average_deviation_meters = average_deviation(area_square_meters, distance_meters)?;

        tracing::debug!(
            line_points = line.len(),
            mission_points = mission.len(),
            distance_meters,
            area_square_meters,
            average_deviation_meters,
            "Analyzed tracks"
        );

        Ok(Analysis {
            distance_meters,
            area_square_meters,
            average_deviation_meters,
        })
    }
}

/// Compare a planned line with the route actually taken on a sphere of the given radius
///
/// Shorthand for [`Analyzer::analyze`] with a default configuration and a custom radius.
pub fn analyze(line: &[GeoPoint], mission: &[GeoPoint], earth_radius_m: f64) -> Result<Analysis> {
    Analyzer::new(AnalysisConfig {
        earth_radius_m,
        ..AnalysisConfig::default()
    })
    .analyze(line, mission)
}
