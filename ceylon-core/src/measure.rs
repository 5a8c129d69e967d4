//! Great-circle measurements between WGS84 coordinates.
//!
//! Coordinates follow the `geo` convention used across the workspace:
//! `x = longitude`, `y = latitude`, both in decimal degrees. Every function is
//! pure, so callers may share inputs across threads freely.
//!
//! Latitude and longitude ranges are not validated here; use
//! [`is_valid_coordinate`] at the boundary where coordinates enter the system.

#![expect(
    clippy::float_arithmetic,
    reason = "spherical trigonometry is inherently floating point"
)]

use geo::Coord;

use crate::{PointOfInterest, ProximityResult};

/// Mean Earth radius in metres used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Build a coordinate from latitude and longitude in decimal degrees.
///
/// # Examples
/// ```
/// use ceylon_core::lat_lon;
///
/// let kandy = lat_lon(7.2936, 80.6413);
/// assert_eq!(kandy.x, 80.6413);
/// assert_eq!(kandy.y, 7.2936);
/// ```
#[must_use]
pub const fn lat_lon(latitude: f64, longitude: f64) -> Coord<f64> {
    Coord {
        x: longitude,
        y: latitude,
    }
}

/// Return `true` when `coord` lies within `|lat| <= 90` and `|lon| <= 180`.
///
/// Non-finite components are rejected.
#[must_use]
pub fn is_valid_coordinate(coord: Coord<f64>) -> bool {
    (-90.0..=90.0).contains(&coord.y) && (-180.0..=180.0).contains(&coord.x)
}

/// Great-circle distance in metres between `a` and `b`.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_M`]. The
/// result is symmetric and zero for identical coordinates.
///
/// # Examples
/// ```
/// use ceylon_core::{distance, lat_lon};
///
/// let sigiriya = lat_lon(7.9570, 80.7603);
/// let temple_of_the_tooth = lat_lon(7.2936, 80.6413);
/// let metres = distance(sigiriya, temple_of_the_tooth);
///
/// assert!((74_448.0..=75_952.0).contains(&metres));
/// ```
#[must_use]
pub fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let half_dlat = (b.y - a.y).to_radians() / 2.0;
    let half_dlon = (b.x - a.x).to_radians() / 2.0;

    let chord = half_dlat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_dlon.sin().powi(2);
    // Rounding can push near-antipodal chords fractionally above one.
    let bounded = chord.clamp(0.0, 1.0);
    let angle = 2.0 * bounded.sqrt().atan2((1.0 - bounded).sqrt());
    EARTH_RADIUS_M * angle
}

/// Initial compass bearing in degrees from `from` towards `to`.
///
/// The result is normalised to `[0, 360)` with `0` pointing north. When both
/// coordinates coincide the direction is undefined and `0` is returned.
///
/// # Examples
/// ```
/// use ceylon_core::{bearing, lat_lon};
///
/// let east = bearing(lat_lon(0.0, 0.0), lat_lon(0.0, 90.0));
/// assert!((east - 90.0).abs() < 1e-9);
/// assert_eq!(bearing(lat_lon(1.0, 1.0), lat_lon(1.0, 1.0)), 0.0);
/// ```
#[must_use]
pub fn bearing(from: Coord<f64>, to: Coord<f64>) -> f64 {
    if from == to {
        return 0.0;
    }
    let lat_from = from.y.to_radians();
    let lat_to = to.y.to_radians();
    let dlon = (to.x - from.x).to_radians();

    let y = dlon.sin() * lat_to.cos();
    let x = lat_from.cos() * lat_to.sin() - lat_from.sin() * lat_to.cos() * dlon.cos();
    // `atan2` yields (-180, 180]; shifting first keeps the remainder in [0, 360).
    let normalised = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    if normalised.is_finite() {
        normalised
    } else {
        0.0
    }
}

/// Return every point within `radius_m` metres of `user`.
///
/// The comparison is inclusive. Negative or NaN radii yield no points and an
/// infinite radius yields all of them. Points keep their input order, though
/// callers should not rely on any particular order.
///
/// # Examples
/// ```
/// use ceylon_core::{Category, PointOfInterest, find_within_radius, lat_lon};
///
/// let pois = vec![
///     PointOfInterest::new("near", "Near", lat_lon(0.0, 0.001), Category::HeritageSite),
///     PointOfInterest::new("far", "Far", lat_lon(0.0, 1.0), Category::HeritageSite),
/// ];
/// let found = find_within_radius(lat_lon(0.0, 0.0), &pois, 1_000.0);
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id, "near");
/// ```
#[must_use]
pub fn find_within_radius(
    user: Coord<f64>,
    points: &[PointOfInterest],
    radius_m: f64,
) -> Vec<&PointOfInterest> {
    if radius_m.is_nan() || radius_m < 0.0 {
        return Vec::new();
    }
    points
        .iter()
        .filter(|poi| distance(user, poi.location) <= radius_m)
        .collect()
}

/// Return the point closest to `user` together with its distance in metres.
///
/// Ties resolve to the point that appears first in `points`. Returns `None`
/// when `points` is empty.
///
/// # Examples
/// ```
/// use ceylon_core::{Category, PointOfInterest, lat_lon, nearest};
///
/// let pois = vec![
///     PointOfInterest::new("yala", "Yala", lat_lon(6.3728, 81.5016), Category::WildlifeSpot),
///     PointOfInterest::new("minneriya", "Minneriya", lat_lon(8.0367, 80.8956), Category::WildlifeSpot),
/// ];
/// let (poi, _metres) = nearest(lat_lon(7.9570, 80.7603), &pois).expect("non-empty input");
///
/// assert_eq!(poi.id, "minneriya");
/// assert!(nearest(lat_lon(0.0, 0.0), &[]).is_none());
/// ```
#[must_use]
pub fn nearest(user: Coord<f64>, points: &[PointOfInterest]) -> Option<(&PointOfInterest, f64)> {
    points
        .iter()
        .map(|poi| (poi, distance(user, poi.location)))
        .fold(None, |best, (poi, metres)| match best {
            Some((_, best_metres)) if best_metres <= metres => best,
            _ => Some((poi, metres)),
        })
}

/// Measure every point from `user`, ordered by ascending distance.
///
/// The sort is stable, so equidistant points keep their input order.
#[must_use]
pub fn rank_by_distance(user: Coord<f64>, points: &[PointOfInterest]) -> Vec<ProximityResult<'_>> {
    let mut ranked: Vec<_> = points
        .iter()
        .map(|poi| ProximityResult::measure(user, poi))
        .collect();
    ranked.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    ranked
}
