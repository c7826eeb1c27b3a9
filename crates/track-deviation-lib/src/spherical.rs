//! Spherical-earth geometry: haversine distance and enclosed area
//!
//! Everything here works directly in longitude/latitude space on a perfect sphere of
//! configurable radius. No planar projection is involved, so results stay meaningful for
//! routes spanning large latitude/longitude extents and across the antimeridian.

use crate::{DeviationError, GeoPoint, Result};
use std::f64::consts::{PI, TAU};

/// WGS-84 equatorial radius in meters, used as the radius of the spherical earth model
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Minimum number of points for a ring to enclose anything
pub const MIN_RING_POINTS: usize = 3;

/// Check that a sphere radius is usable for distance and area computations
pub(crate) fn validate_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(DeviationError::InvalidRadius(radius))
    }
}

/// Central angle `2·atan2(√a, √(1−a))` for a haversine term `a`
#[inline(always)]
fn central_angle(a: f64) -> f64 {
    // Rounding can push `a` a hair above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two points using the haversine formula
///
/// # Arguments
/// * `p1`, `p2` - Points in degrees
/// * `radius` - Sphere radius in meters (must be positive)
///
/// # Returns
/// The shortest distance along the sphere's surface in meters. The result is symmetric in
/// its arguments and zero when the points coincide.
#[inline]
pub fn haversine_distance(p1: GeoPoint, p2: GeoPoint, radius: f64) -> f64 {
    let (lon1, lat1) = p1.to_radians();
    let (lon2, lat2) = p2.to_radians();

    let delta_lat = lat2 - lat1;
    let delta_lon = lon2 - lon1;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    radius * central_angle(a)
}

/// Build the closed ring enclosing the region between a planned line and the travelled route
///
/// The ring walks the line forward, comes back along the route in reverse, and repeats the
/// line's first point to close itself.
pub fn boundary_ring(line: &[GeoPoint], mission: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut ring = Vec::with_capacity(line.len() + mission.len() + 1);
    ring.extend_from_slice(line);
    ring.extend(mission.iter().rev().copied());
    if let Some(&first) = line.first() {
        ring.push(first);
    }
    ring
}

/// Colatitude and azimuth of a point as seen from the origin (0° lon, 0° lat)
///
/// The azimuth is wrapped into [0, 2π).
#[inline(always)]
fn colatitude_azimuth(point: GeoPoint) -> (f64, f64) {
    let (lon, lat) = point.to_radians();

    let a = (lat / 2.0).sin().powi(2) + lat.cos() * (lon / 2.0).sin().powi(2);
    let colatitude = central_angle(a);
    let azimuth = (lat.cos() * lon.sin()).atan2(lat.sin()).rem_euclid(TAU);

    (colatitude, azimuth)
}

/// Surface area enclosed by a ring of points on a sphere
///
/// Evaluates the line integral form of Green's theorem on the sphere, using colatitude and
/// azimuth relative to the coordinate origin. Azimuth steps are wrapped into [−π, π) so the
/// 0/2π seam and the antimeridian do not produce spurious jumps. Each edge contributes
/// `(1 − cos(colat_mid))·Δaz`, where `colat_mid` is the colatitude halfway along the edge.
///
/// The ring does not need to be closed; if the first and last points differ the first point
/// is appended. Orientation does not matter.
///
/// # Ambiguity
/// A closed curve splits the sphere into two regions and the integral cannot tell which one is
/// meant. The smaller of the two is always reported, so the result lies in `[0, 2π·radius²]`.
/// Rings that really enclose more than half of the sphere are reported as their complement.
///
/// # Errors
/// `InsufficientPoints` if the ring has fewer than three points, `InvalidRadius` if the radius
/// is not finite and positive.
pub fn spherical_polygon_area(ring: &[GeoPoint], radius: f64) -> Result<f64> {
    #[cfg(feature = "profiling")]
    profiling::scope!("spherical::polygon_area");

    let radius = validate_radius(radius)?;
    if ring.len() < MIN_RING_POINTS {
        return Err(DeviationError::InsufficientPoints {
            track: "boundary ring".to_string(),
            count: ring.len(),
            minimum: MIN_RING_POINTS,
        });
    }

    let closing_point = (ring.first() != ring.last()).then(|| ring[0]);
    let polar: Vec<(f64, f64)> = ring
        .iter()
        .copied()
        .chain(closing_point)
        .map(colatitude_azimuth)
        .collect();

    let integral: f64 = polar
        .windows(2)
        .map(|edge| {
            let (colat_start, az_start) = edge[0];
            let (colat_end, az_end) = edge[1];

            let delta_az = (az_end - az_start + PI).rem_euclid(TAU) - PI;
            let colat_mid = colat_start + (colat_end - colat_start) / 2.0;

            (1.0 - colat_mid.cos()) * delta_az
        })
        .sum();

    // Fraction of the whole sphere, folded onto the smaller region
    let fraction = integral.abs() / (4.0 * PI);
    let fraction = fraction.min(1.0 - fraction).max(0.0);

    Ok(fraction * 4.0 * PI * radius * radius)
}
