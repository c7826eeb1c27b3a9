//! Track loading from GPX files
//!
//! A recorded track file may hold several tracks with several segments each. Only the first
//! segment of the first track is used, which is what a single recorded line or mission
//! produces.

use crate::{DeviationError, GeoPoint, Result};
use std::io::Read;
use std::path::Path;

/// An ordered sequence of points read from one track segment
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    /// Track name from the GPX metadata, if any
    name: Option<String>,
    /// Points in recording order
    points: Vec<GeoPoint>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Track {
    /// Create a track from points, rejecting any coordinate outside the valid ranges
    pub fn new(name: Option<String>, points: Vec<GeoPoint>) -> Result<Self> {
        for point in &points {
            point.validated()?;
        }
        Ok(Self { name, points })
    }

    /// Take the first segment of the first track of parsed GPX data
    ///
    /// # Arguments
    /// * `gpx_data` - Parsed GPX data
    /// * `source_name` - Human readable origin of the data, used in error messages
    pub fn from_gpx(gpx_data: &gpx::Gpx, source_name: &str) -> Result<Self> {
        let track = gpx_data
            .tracks
            .first()
            .ok_or_else(|| DeviationError::MissingSegment {
                source_name: source_name.to_string(),
            })?;
        let segment = track
            .segments
            .first()
            .ok_or_else(|| DeviationError::MissingSegment {
                source_name: source_name.to_string(),
            })?;

        let ignored_segments = gpx_data
            .tracks
            .iter()
            .map(|track| track.segments.len())
            .sum::<usize>()
            - 1;
        if ignored_segments > 0 {
            tracing::warn!(
                "{source_name}: using the first track segment, ignoring {ignored_segments} more"
            );
        }

        let points = segment.points.iter().map(GeoPoint::from).collect();
        Self::new(track.name.clone(), points)
    }

    /// Parse GPX data from a reader
    pub fn read<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let gpx_data = gpx::read(reader)?;
        Self::from_gpx(&gpx_data, source_name)
    }

    /// Load a GPX file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let track = Self::read(reader, &path.display().to_string())?;

        tracing::info!(
            "Loaded {} points from {}{}",
            track.len(),
            path.display(),
            track
                .name()
                .map(|name| format!(" ({name})"))
                .unwrap_or_default()
        );
        Ok(track)
    }

    /// Track name, if the file had one
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Points in recording order
    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the track has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Load the planned line and the recorded mission in parallel
///
/// Returns `(line, mission)`. The first error wins if both files fail.
pub fn load_track_pair<P, Q>(line_path: P, mission_path: Q) -> Result<(Track, Track)>
where
    P: AsRef<Path> + Send,
    Q: AsRef<Path> + Send,
{
    #[cfg(feature = "profiling")]
    profiling::scope!("track::load_track_pair");

    let (line, mission) = rayon::join(|| Track::load(line_path), || Track::load(mission_path));
    Ok((line?, mission?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpx::{Gpx, TrackSegment, Waypoint};

    const LINE_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="track-deviation tests" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <name>Straight line</name>
    <trkseg>
      <trkpt lat="0.0" lon="0.0"></trkpt>
      <trkpt lat="1.0" lon="0.0"></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

    const MISSION_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="track-deviation tests" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <trkseg>
      <trkpt lat="0.0" lon="0.0"></trkpt>
      <trkpt lat="1.0" lon="1.0"></trkpt>
      <trkpt lat="1.0" lon="0.0"></trkpt>
    </trkseg>
    <trkseg>
      <trkpt lat="5.0" lon="5.0"></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

    fn create_test_waypoint(lat: f64, lon: f64) -> Waypoint {
        Waypoint::new(geo::Point::new(lon, lat))
    }

    fn write_temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "track-deviation-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_line_track() {
        let track = Track::read(LINE_GPX.as_bytes(), "line.gpx").unwrap();
        assert_eq!(track.name(), Some("Straight line"));
        assert_eq!(
            track.points(),
            &[GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)]
        );
    }

    #[test]
    fn test_only_first_segment_is_used() {
        let track = Track::read(MISSION_GPX.as_bytes(), "mission.gpx").unwrap();
        assert_eq!(track.len(), 3);
        assert_eq!(track.name(), None);
        assert_eq!(track.points()[1], GeoPoint::new(1.0, 1.0));
    }

    #[test]
    fn test_missing_track_fails() {
        let result = Track::from_gpx(&Gpx::default(), "empty.gpx");
        match result {
            Err(DeviationError::MissingSegment { source_name }) => {
                assert_eq!(source_name, "empty.gpx")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_segment_fails() {
        let mut gpx = Gpx::default();
        gpx.tracks.push(gpx::Track::default());
        assert!(matches!(
            Track::from_gpx(&gpx, "no-segments.gpx"),
            Err(DeviationError::MissingSegment { .. })
        ));
    }

    #[test]
    fn test_out_of_range_waypoint_is_rejected() {
        let mut gpx = Gpx::default();
        let mut track = gpx::Track::default();
        let mut segment = TrackSegment::default();
        segment.points.push(create_test_waypoint(10.0, 10.0));
        segment.points.push(create_test_waypoint(10.0, 190.0));
        track.segments.push(segment);
        gpx.tracks.push(track);

        assert!(matches!(
            Track::from_gpx(&gpx, "bad.gpx"),
            Err(DeviationError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_malformed_gpx_fails() {
        let result = Track::read("<gpx>".as_bytes(), "broken.gpx");
        assert!(matches!(result, Err(DeviationError::GpxParse(_))));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Track::load("/nonexistent/track-deviation/line.gpx");
        assert!(matches!(result, Err(DeviationError::Io(_))));
    }

    #[test]
    fn test_load_track_pair_keeps_order() {
        let line_path = write_temp_file("pair-line.gpx", LINE_GPX);
        let mission_path = write_temp_file("pair-mission.gpx", MISSION_GPX);

        let (line, mission) = load_track_pair(&line_path, &mission_path).unwrap();
        assert_eq!(line.len(), 2);
        assert_eq!(line.name(), Some("Straight line"));
        assert_eq!(mission.len(), 3);

        let missing = load_track_pair(&line_path, "/nonexistent/track-deviation/mission.gpx");
        assert!(matches!(missing, Err(DeviationError::Io(_))));

        std::fs::remove_file(line_path).unwrap();
        std::fs::remove_file(mission_path).unwrap();
    }

    #[test]
    fn test_loaded_tracks_analyze() {
        let line = Track::read(LINE_GPX.as_bytes(), "line.gpx").unwrap();
        let mission = Track::read(MISSION_GPX.as_bytes(), "mission.gpx").unwrap();

        let analysis =
            crate::analyze(line.points(), mission.points(), crate::EARTH_RADIUS_M).unwrap();
        assert!((analysis.distance_meters - 111_319.49).abs() < 0.01);
        assert!(analysis.area_square_meters > 0.0);
    }
}
