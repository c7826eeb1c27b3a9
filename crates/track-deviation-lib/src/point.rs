//! Geographic point type shared by the whole library

use crate::{DeviationError, Result};
use geo::Point;

/// A (longitude, latitude) pair in decimal degrees
///
/// The field order follows the x/y convention used by `geo` and GPX: longitude first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    /// Create a new point from longitude and latitude in degrees
    #[inline]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Check that both coordinates are finite and inside their degree ranges
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Return the point unchanged if valid, otherwise an `InvalidCoordinate` error
    pub fn validated(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(DeviationError::InvalidCoordinate {
                longitude: self.longitude,
                latitude: self.latitude,
            })
        }
    }

    /// (longitude, latitude) in radians
    #[inline(always)]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.longitude.to_radians(), self.latitude.to_radians())
    }
}

impl From<Point<f64>> for GeoPoint {
    #[inline]
    fn from(point: Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<GeoPoint> for Point<f64> {
    #[inline]
    fn from(point: GeoPoint) -> Self {
        Point::new(point.longitude, point.latitude)
    }
}

impl From<&gpx::Waypoint> for GeoPoint {
    #[inline]
    fn from(waypoint: &gpx::Waypoint) -> Self {
        waypoint.point().into()
    }
}
