//! Immutable catalogue of points of interest.
//!
//! A [`PoiCatalogue`] is built once when the app loads its content and is
//! never mutated afterwards; replacing the content means building a new
//! catalogue. Construction validates identifiers and coordinates so that the
//! measurement functions only ever see well-formed input.

use std::collections::HashSet;

use geo::Coord;
use log::{debug, warn};
use rstar::RTree;
use thiserror::Error;

use crate::{
    Category, PointOfInterest, distance, find_within_radius, is_valid_coordinate, nearest,
};

#[cfg(feature = "serde")]
mod record;
mod spatial_index;

use spatial_index::{IndexedPoi, SearchWindow, build_index, search_window};

/// Errors raised while building a [`PoiCatalogue`].
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// An entry had a blank identifier.
    #[error("entry {position} has an empty identifier")]
    EmptyId {
        /// Zero-based position of the entry in the input.
        position: usize,
    },
    /// Two entries shared an identifier.
    #[error("duplicate point of interest identifier '{id}'")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// An entry's coordinate was outside the WGS84 range or not finite.
    #[error("point of interest '{id}' has invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Identifier of the offending entry.
        id: String,
        /// Latitude as supplied.
        latitude: f64,
        /// Longitude as supplied.
        longitude: f64,
    },
    /// The catalogue document could not be decoded.
    #[cfg(feature = "serde")]
    #[error("failed to decode catalogue: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Validated, immutable collection of points of interest.
///
/// Entries keep the order in which they were supplied. Radius queries use an
/// R\*-tree to discard distant entries before measuring great-circle
/// distances.
///
/// # Examples
///
/// ```
/// use ceylon_core::{Category, PoiCatalogue, PointOfInterest, lat_lon};
///
/// # fn main() -> Result<(), ceylon_core::CatalogueError> {
/// let catalogue = PoiCatalogue::new(vec![
///     PointOfInterest::new("sigiriya", "Sigiriya", lat_lon(7.9570, 80.7603), Category::HeritageSite),
///     PointOfInterest::new("yala", "Yala", lat_lon(6.3728, 81.5016), Category::WildlifeSpot),
/// ])?;
///
/// let nearby = catalogue.within_radius(lat_lon(7.95, 80.75), 5_000.0);
/// assert_eq!(nearby.len(), 1);
/// assert_eq!(nearby[0].id, "sigiriya");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PoiCatalogue {
    pois: Vec<PointOfInterest>,
    index: RTree<IndexedPoi>,
}

impl PoiCatalogue {
    /// Validate `pois` and build the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] when an identifier is blank or repeated, or
    /// when a coordinate lies outside `|lat| <= 90`, `|lon| <= 180`.
    pub fn new(pois: Vec<PointOfInterest>) -> Result<Self, CatalogueError> {
        validate(&pois)?;
        if pois.is_empty() {
            warn!("Point of interest catalogue is empty; proximity queries will return nothing");
        }
        debug!("Indexed {} points of interest", pois.len());
        let index = build_index(&pois);
        Ok(Self { pois, index })
    }

    /// Decode a JSON array of `{id, name, category, latitude, longitude}`
    /// records and build the catalogue.
    ///
    /// Categories use the kebab-case labels `heritage-site` and
    /// `wildlife-spot`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Decode`] for malformed JSON and the
    /// validation errors of [`PoiCatalogue::new`] otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use ceylon_core::PoiCatalogue;
    ///
    /// # fn main() -> Result<(), ceylon_core::CatalogueError> {
    /// let json = r#"[
    ///   {"id": "galle-fort", "name": "Galle Fort", "category": "heritage-site",
    ///    "latitude": 6.0260, "longitude": 80.2170}
    /// ]"#;
    /// let catalogue = PoiCatalogue::from_json_reader(json.as_bytes())?;
    /// assert!(catalogue.get("galle-fort").is_some());
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogueError> {
        let records: Vec<record::PoiRecord> = serde_json::from_reader(reader)?;
        Self::new(records.into_iter().map(PointOfInterest::from).collect())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Whether the catalogue has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    /// All entries in their original order.
    #[must_use]
    pub fn as_slice(&self) -> &[PointOfInterest] {
        &self.pois
    }

    /// Iterate over all entries in their original order.
    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> + '_ {
        self.pois.iter()
    }

    /// Look up an entry by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PointOfInterest> {
        self.pois.iter().find(|poi| poi.id == id)
    }

    /// Entries belonging to `category`, in original order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &PointOfInterest> + '_ {
        self.pois.iter().filter(move |poi| poi.category == category)
    }

    /// Return every entry within `radius_m` metres of `user`.
    ///
    /// Semantics match [`crate::find_within_radius`]: the bound is inclusive,
    /// negative or NaN radii return nothing, and an infinite radius returns
    /// everything. Results keep catalogue order.
    #[must_use]
    pub fn within_radius(&self, user: Coord<f64>, radius_m: f64) -> Vec<&PointOfInterest> {
        if radius_m.is_nan() || radius_m < 0.0 {
            return Vec::new();
        }
        let candidates = match search_window(user, radius_m) {
            SearchWindow::Everything => return find_within_radius(user, &self.pois, radius_m),
            SearchWindow::Boxes(boxes) => boxes,
        };
        let mut slots: Vec<usize> = candidates
            .iter()
            .flat_map(|envelope| self.index.locate_in_envelope(envelope))
            .map(|entry| entry.slot)
            .collect();
        slots.sort_unstable();
        slots.dedup();
        slots
            .into_iter()
            .filter_map(|slot| self.pois.get(slot))
            .filter(|poi| distance(user, poi.location) <= radius_m)
            .collect()
    }

    /// Return the entry closest to `user` and its distance in metres.
    ///
    /// Ties resolve to the entry listed first; `None` for an empty catalogue.
    #[must_use]
    pub fn nearest(&self, user: Coord<f64>) -> Option<(&PointOfInterest, f64)> {
        nearest(user, &self.pois)
    }
}

fn validate(pois: &[PointOfInterest]) -> Result<(), CatalogueError> {
    let mut seen = HashSet::with_capacity(pois.len());
    for (position, poi) in pois.iter().enumerate() {
        if poi.id.trim().is_empty() {
            return Err(CatalogueError::EmptyId { position });
        }
        if !seen.insert(poi.id.as_str()) {
            return Err(CatalogueError::DuplicateId { id: poi.id.clone() });
        }
        if !is_valid_coordinate(poi.location) {
            return Err(CatalogueError::InvalidCoordinate {
                id: poi.id.clone(),
                latitude: poi.latitude(),
                longitude: poi.longitude(),
            });
        }
    }
    Ok(())
}

impl<'a> IntoIterator for &'a PoiCatalogue {
    type Item = &'a PointOfInterest;
    type IntoIter = std::slice::Iter<'a, PointOfInterest>;

    fn into_iter(self) -> Self::IntoIter {
        self.pois.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lat_lon, test_support::sample_catalogue};
    use rstest::{fixture, rstest};

    fn poi(id: &str, lat: f64, lon: f64) -> PointOfInterest {
        PointOfInterest::new(id, id, lat_lon(lat, lon), Category::HeritageSite)
    }

    #[fixture]
    fn catalogue() -> PoiCatalogue {
        sample_catalogue()
    }

    #[rstest]
    fn rejects_duplicate_identifiers() {
        let err = PoiCatalogue::new(vec![poi("a", 0.0, 0.0), poi("a", 1.0, 1.0)])
            .expect_err("duplicate should fail");
        assert!(matches!(err, CatalogueError::DuplicateId { id } if id == "a"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_identifiers(#[case] id: &str) {
        let err = PoiCatalogue::new(vec![poi("ok", 0.0, 0.0), poi(id, 1.0, 1.0)])
            .expect_err("blank id should fail");
        assert!(matches!(err, CatalogueError::EmptyId { position: 1 }));
    }

    #[rstest]
    #[case(91.0, 0.0)]
    #[case(0.0, -180.5)]
    #[case(f64::NAN, 0.0)]
    fn rejects_out_of_range_coordinates(#[case] lat: f64, #[case] lon: f64) {
        let err = PoiCatalogue::new(vec![poi("bad", lat, lon)]).expect_err("should fail");
        assert!(matches!(err, CatalogueError::InvalidCoordinate { .. }));
    }

    #[rstest]
    fn empty_catalogue_is_allowed() {
        let catalogue = PoiCatalogue::new(Vec::new()).expect("empty is valid");
        assert!(catalogue.is_empty());
        assert!(catalogue.nearest(lat_lon(0.0, 0.0)).is_none());
        assert!(catalogue.within_radius(lat_lon(0.0, 0.0), 1e9).is_empty());
    }

    #[rstest]
    fn lookups_by_id_and_category(catalogue: PoiCatalogue) {
        assert_eq!(
            catalogue.get("yala").map(|poi| poi.category),
            Some(Category::WildlifeSpot)
        );
        assert!(catalogue.get("missing").is_none());
        let wildlife: Vec<_> = catalogue
            .by_category(Category::WildlifeSpot)
            .map(|poi| poi.id.as_str())
            .collect();
        assert_eq!(wildlife, vec!["yala", "minneriya"]);
        assert_eq!((&catalogue).into_iter().count(), catalogue.len());
    }

    #[rstest]
    #[case(lat_lon(7.9570, 80.7603), 0.0)]
    #[case(lat_lon(7.9570, 80.7603), 20_000.0)]
    #[case(lat_lon(7.9570, 80.7603), 80_000.0)]
    #[case(lat_lon(7.0, 80.5), 150_000.0)]
    #[case(lat_lon(6.0, 81.0), 5_000_000.0)]
    #[case(lat_lon(6.0, 81.0), f64::INFINITY)]
    fn indexed_queries_match_linear_scan(
        catalogue: PoiCatalogue,
        #[case] user: Coord<f64>,
        #[case] radius: f64,
    ) {
        let indexed = catalogue.within_radius(user, radius);
        let scanned = find_within_radius(user, catalogue.as_slice(), radius);
        assert_eq!(indexed, scanned);
    }

    #[rstest]
    fn finds_points_across_the_antimeridian() {
        let catalogue = PoiCatalogue::new(vec![
            poi("fiji-east", -17.0, 179.99),
            poi("fiji-west", -17.0, -179.99),
            poi("far", -17.0, 170.0),
        ])
        .expect("valid catalogue");
        let found: Vec<_> = catalogue
            .within_radius(lat_lon(-17.0, 180.0), 5_000.0)
            .into_iter()
            .map(|poi| poi.id.as_str())
            .collect();
        assert_eq!(found, vec!["fiji-east", "fiji-west"]);
    }

    #[rstest]
    fn includes_points_exactly_on_the_radius() {
        let catalogue =
            PoiCatalogue::new(vec![poi("edge", 0.0, 1.0)]).expect("valid catalogue");
        let user = lat_lon(0.0, 0.0);
        let radius = distance(user, lat_lon(0.0, 1.0));
        assert_eq!(catalogue.within_radius(user, radius).len(), 1);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_json_catalogue() {
        let json = r#"[
            {"id": "a", "name": "A", "category": "heritage-site", "latitude": 1.0, "longitude": 2.0},
            {"id": "b", "name": "B", "category": "wildlife-spot", "latitude": 3.0, "longitude": 4.0}
        ]"#;
        let catalogue = PoiCatalogue::from_json_reader(json.as_bytes()).expect("valid json");
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.get("b").map(PointOfInterest::latitude), Some(3.0));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#"{"id": "a"}"#)]
    #[case(r#"[{"id": "a", "name": "A", "category": "beach", "latitude": 1.0, "longitude": 2.0}]"#)]
    fn malformed_json_is_a_decode_error(#[case] json: &str) {
        let err = PoiCatalogue::from_json_reader(json.as_bytes()).expect_err("should fail");
        assert!(matches!(err, CatalogueError::Decode(_)));
    }
}
