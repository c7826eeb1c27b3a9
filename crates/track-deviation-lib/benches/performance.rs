//! Performance benchmarks for track-deviation-lib
//!
//! Run with: cargo bench --package track-deviation-lib

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geo::Point;
use gpx::{Gpx, Track as GpxTrack, TrackSegment, Waypoint};
use track_deviation_lib::{EARTH_RADIUS_M, GeoPoint, Track, analyze, spherical_polygon_area};

/// Straight planned line from (base_lon, base_lat) heading north-east
fn generate_line(num_points: usize, base_lat: f64, base_lon: f64) -> Vec<GeoPoint> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / (num_points - 1) as f64;
            GeoPoint::new(base_lon + t * 0.1, base_lat + t * 0.1)
        })
        .collect()
}

/// Realistic recorded route wobbling around the planned line
fn generate_mission(num_points: usize, base_lat: f64, base_lon: f64) -> Vec<GeoPoint> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / (num_points - 1) as f64;
            let lat = base_lat + t * 0.1 + (t * 50.0).sin() * 0.001;
            let lon = base_lon + t * 0.1 + (t * 30.0).cos() * 0.001;
            GeoPoint::new(lon, lat)
        })
        .collect()
}

fn to_gpx(points: &[GeoPoint]) -> Gpx {
    let mut gpx = Gpx::default();
    let mut track = GpxTrack::default();
    let mut segment = TrackSegment::default();
    segment.points.extend(
        points
            .iter()
            .map(|p| Waypoint::new(Point::new(p.longitude, p.latitude))),
    );
    track.segments.push(segment);
    gpx.tracks.push(track);
    gpx
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let line = generate_line(2, 51.5, -0.1);

    for num_points in [1_000, 10_000, 100_000] {
        let mission = generate_mission(num_points, 51.5, -0.1);
        group.throughput(Throughput::Elements(num_points as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_points),
            &mission,
            |b, mission| b.iter(|| analyze(&line, mission, EARTH_RADIUS_M).unwrap()),
        );
    }

    group.finish();
}

fn bench_polygon_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_area");

    for num_points in [1_000, 100_000] {
        let ring = generate_mission(num_points, 10.0, 20.0);
        group.throughput(Throughput::Elements(num_points as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_points),
            &ring,
            |b, ring| b.iter(|| spherical_polygon_area(ring, EARTH_RADIUS_M).unwrap()),
        );
    }

    group.finish();
}

fn bench_from_gpx(c: &mut Criterion) {
    let gpx = to_gpx(&generate_mission(50_000, 51.5, -0.1));

    c.bench_function("track_from_gpx_50k", |b| {
        b.iter(|| Track::from_gpx(&gpx, "bench").unwrap())
    });
}

criterion_group!(benches, bench_analyze, bench_polygon_area, bench_from_gpx);
criterion_main!(benches);
