//! Track Deviation Library - Line-Following Accuracy on a Spherical Earth
//!
//! This library compares a planned straight-line route with the route that was actually
//! travelled. Both are ordered sequences of (longitude, latitude) points in degrees. From them it
//! derives three statistics:
//!
//! - the great-circle length of the planned line (haversine, endpoint to endpoint),
//! - the surface area enclosed between the two routes (line integral on the sphere),
//! - the average lateral deviation, which is the area divided by the length.
//!
//! # Architecture
//!
//! - **[`GeoPoint`]**: Validated (longitude, latitude) pair
//! - **[`spherical`]**: Haversine distance, boundary ring construction and spherical polygon area
//! - **[`Analyzer`]** / **[`analyze`]**: Pure pipeline from two tracks to an [`Analysis`]
//! - **[`Track`]**: Loading of the first track segment of a GPX file
//!
//! # Usage Example
//!
//! ```rust
//! use track_deviation_lib::{GeoPoint, analyze, EARTH_RADIUS_M};
//!
//! let line = [GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)];
//! let mission = [
//!     GeoPoint::new(0.0, 0.0),
//!     GeoPoint::new(1.0, 1.0),
//!     GeoPoint::new(0.0, 1.0),
//! ];
//!
//! let analysis = analyze(&line, &mission, EARTH_RADIUS_M)?;
//! assert!((analysis.distance_meters - 111_319.49).abs() < 0.01);
//! assert!(analysis.area_square_meters > 0.0);
//! # Ok::<(), track_deviation_lib::DeviationError>(())
//! ```

mod analysis;
mod point;
pub mod spherical;
mod track;

// Public API exports
pub use analysis::{Analysis, AnalysisConfig, Analyzer, analyze, average_deviation};
pub use point::GeoPoint;
pub use spherical::{EARTH_RADIUS_M, boundary_ring, haversine_distance, spherical_polygon_area};
pub use track::{Track, load_track_pair};

/// Error types for track analysis and loading
#[derive(Debug, thiserror::Error)]
pub enum DeviationError {
    #[error("{track} has {count} points, at least {minimum} are required")]
    InsufficientPoints {
        track: String,
        count: usize,
        minimum: usize,
    },

    #[error("Coordinate out of range: longitude {longitude}, latitude {latitude}")]
    InvalidCoordinate { longitude: f64, latitude: f64 },

    #[error("Invalid earth radius: {0} (must be finite and positive)")]
    InvalidRadius(f64),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    #[error("No track segment found in {source_name}")]
    MissingSegment { source_name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeviationError {
    /// Whether the error was caused by the caller's input rather than by I/O or parsing
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DeviationError::InsufficientPoints { .. }
                | DeviationError::InvalidCoordinate { .. }
                | DeviationError::InvalidRadius(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DeviationError>;
