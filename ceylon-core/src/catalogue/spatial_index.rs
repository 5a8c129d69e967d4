//! R\*-tree prefilter for radius queries.
//!
//! Points are indexed in lon/lat space. A radius query is first narrowed to
//! the bounding box of the spherical cap around the user and then confirmed
//! with the exact haversine distance by the caller.

#![expect(
    clippy::float_arithmetic,
    reason = "bounding box of a spherical cap requires floating point maths"
)]

use geo::Coord;
use rstar::{AABB, RTree, RTreeObject};

use crate::{EARTH_RADIUS_M, PointOfInterest, is_valid_coordinate};

/// Degrees added to every side of a search box so that points lying exactly
/// on the query radius survive rounding in the envelope maths.
const ENVELOPE_PADDING_DEG: f64 = 1e-6;

/// Entry stored inside the R\*-tree: a position and the catalogue slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IndexedPoi {
    pub(crate) slot: usize,
    location: [f64; 2],
}

impl RTreeObject for IndexedPoi {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.location)
    }
}

/// Build an R\*-tree over `pois`, remembering each entry's position in the
/// slice.
pub(crate) fn build_index(pois: &[PointOfInterest]) -> RTree<IndexedPoi> {
    let entries = pois
        .iter()
        .enumerate()
        .map(|(slot, poi)| IndexedPoi {
            slot,
            location: [poi.location.x, poi.location.y],
        })
        .collect();
    RTree::bulk_load(entries)
}

/// Candidate region for a radius query.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchWindow {
    /// The cap touches a pole, wraps the globe, or the input is unusable for
    /// envelope maths; every point must be checked.
    Everything,
    /// One box, or two when the cap straddles the antimeridian.
    Boxes(Vec<AABB<[f64; 2]>>),
}

/// Compute the lon/lat boxes that contain every point within `radius_m`
/// metres of `centre`.
///
/// Uses the exact longitude half-width of a spherical cap,
/// `asin(sin(δ) / cos(φ))`, where `δ` is the angular radius and `φ` the centre
/// latitude.
pub(crate) fn search_window(centre: Coord<f64>, radius_m: f64) -> SearchWindow {
    if !is_valid_coordinate(centre) || !radius_m.is_finite() || radius_m < 0.0 {
        return SearchWindow::Everything;
    }
    let angular = radius_m / EARTH_RADIUS_M;
    if angular >= std::f64::consts::FRAC_PI_2 {
        return SearchWindow::Everything;
    }

    let dlat = angular.to_degrees() + ENVELOPE_PADDING_DEG;
    let min_lat = centre.y - dlat;
    let max_lat = centre.y + dlat;
    if min_lat <= -90.0 || max_lat >= 90.0 {
        return SearchWindow::Everything;
    }

    let ratio = angular.sin() / centre.y.to_radians().cos();
    if !(0.0..1.0).contains(&ratio) {
        return SearchWindow::Everything;
    }
    let dlon = ratio.asin().to_degrees() + ENVELOPE_PADDING_DEG;
    if dlon >= 180.0 {
        return SearchWindow::Everything;
    }
    let min_lon = centre.x - dlon;
    let max_lon = centre.x + dlon;

    let span = |west: f64, east: f64| AABB::from_corners([west, min_lat], [east, max_lat]);
    let boxes = if min_lon < -180.0 {
        vec![span(-180.0, max_lon), span(min_lon + 360.0, 180.0)]
    } else if max_lon > 180.0 {
        vec![span(min_lon, 180.0), span(-180.0, max_lon - 360.0)]
    } else {
        vec![span(min_lon, max_lon)]
    };
    SearchWindow::Boxes(boxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, distance, lat_lon};
    use rstar::Envelope;
    use rstest::rstest;

    fn poi(id: &str, lat: f64, lon: f64) -> PointOfInterest {
        PointOfInterest::new(id, id, lat_lon(lat, lon), Category::WildlifeSpot)
    }

    fn boxes(window: SearchWindow) -> Vec<AABB<[f64; 2]>> {
        match window {
            SearchWindow::Boxes(boxes) => boxes,
            SearchWindow::Everything => panic!("expected bounded window"),
        }
    }

    #[rstest]
    fn index_len_matches_input() {
        let pois = vec![poi("a", 0.0, 0.0), poi("b", 1.0, 1.0)];
        let index = build_index(&pois);
        assert_eq!(index.size(), pois.len());
        let mut slots: Vec<_> = index.iter().map(|entry| entry.slot).collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 1]);
    }

    #[rstest]
    fn small_radius_produces_single_box_around_centre() {
        let found = boxes(search_window(lat_lon(7.0, 80.0), 10_000.0));
        assert_eq!(found.len(), 1);
        let window = found.first().expect("one box");
        assert!(window.contains_point(&[80.0, 7.0]));
        assert!(!window.contains_point(&[80.2, 7.0]));
    }

    #[rstest]
    #[case(lat_lon(7.0, 80.0))]
    #[case(lat_lon(60.0, 10.0))]
    #[case(lat_lon(-45.0, -120.0))]
    fn window_contains_points_on_the_radius(#[case] centre: Coord<f64>) {
        let radius = 25_000.0;
        let window = boxes(search_window(centre, radius));
        // Walk the circle and confirm every boundary sample is inside a box.
        for step in 0..36_u32 {
            let heading = f64::from(step * 10).to_radians();
            let angular = radius / EARTH_RADIUS_M;
            let lat1 = centre.y.to_radians();
            let lon1 = centre.x.to_radians();
            let lat2 =
                (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * heading.cos()).asin();
            let lon2 = lon1
                + (heading.sin() * angular.sin() * lat1.cos())
                    .atan2(angular.cos() - lat1.sin() * lat2.sin());
            let sample = lat_lon(lat2.to_degrees(), lon2.to_degrees());
            assert!((distance(centre, sample) - radius).abs() < 1e-3);
            assert!(
                window
                    .iter()
                    .any(|b| b.contains_point(&[sample.x, sample.y])),
                "sample {sample:?} escaped the window"
            );
        }
    }

    #[rstest]
    fn antimeridian_caps_split_into_two_boxes() {
        let found = boxes(search_window(lat_lon(0.0, 179.9), 50_000.0));
        assert_eq!(found.len(), 2);
        assert!(found.iter().any(|b| b.contains_point(&[-179.9, 0.0])));
        assert!(found.iter().any(|b| b.contains_point(&[179.95, 0.0])));
    }

    #[rstest]
    #[case(lat_lon(89.9, 0.0), 50_000.0)]
    #[case(lat_lon(0.0, 0.0), f64::INFINITY)]
    #[case(lat_lon(0.0, 0.0), 12_000_000.0)]
    #[case(lat_lon(f64::NAN, 0.0), 10.0)]
    fn degenerate_caps_scan_everything(#[case] centre: Coord<f64>, #[case] radius: f64) {
        assert_eq!(search_window(centre, radius), SearchWindow::Everything);
    }
}
