//! Location-aware queries over a catalogue.
//!
//! [`Proximity`] couples an immutable [`PoiCatalogue`] with a
//! [`LocationSource`]. Every query reads the source exactly once, so all
//! distances and bearings in one answer share a single user coordinate. With
//! no fix available, list queries are empty and scalar queries are `None`.

use geo::Coord;
use log::debug;

use crate::{LocationSource, PoiCatalogue, ProximityResult, bearing};

/// Answers "what is near me?" for the latest user position.
///
/// # Examples
///
/// ```
/// use ceylon_core::{
///     Category, FixedLocation, PoiCatalogue, PointOfInterest, Proximity, lat_lon,
/// };
///
/// # fn main() -> Result<(), ceylon_core::CatalogueError> {
/// let catalogue = PoiCatalogue::new(vec![PointOfInterest::new(
///     "dambulla",
///     "Dambulla Cave Temple",
///     lat_lon(7.8567, 80.6492),
///     Category::HeritageSite,
/// )])?;
///
/// let here = Proximity::new(&catalogue, FixedLocation::at(lat_lon(7.8570, 80.6492)));
/// assert_eq!(here.nearby(1_000.0).len(), 1);
///
/// let lost = Proximity::new(&catalogue, FixedLocation::unknown());
/// assert!(lost.nearby(1_000.0).is_empty());
/// assert!(lost.bearing_to("dambulla").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Proximity<'a, S> {
    catalogue: &'a PoiCatalogue,
    source: S,
}

impl<'a, S: LocationSource> Proximity<'a, S> {
    /// Bind `catalogue` to a location `source`.
    pub const fn new(catalogue: &'a PoiCatalogue, source: S) -> Self {
        Self { catalogue, source }
    }

    /// The catalogue being queried.
    #[must_use]
    pub const fn catalogue(&self) -> &'a PoiCatalogue {
        self.catalogue
    }

    /// Entries within `radius_m` metres, nearest first.
    ///
    /// Equidistant entries keep catalogue order. Empty when the location is
    /// unknown or the radius is negative.
    #[must_use]
    pub fn nearby(&self, radius_m: f64) -> Vec<ProximityResult<'a>> {
        let Some(user) = self.fix() else {
            return Vec::new();
        };
        let mut results: Vec<_> = self
            .catalogue
            .within_radius(user, radius_m)
            .into_iter()
            .map(|poi| ProximityResult::measure(user, poi))
            .collect();
        results.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
        results
    }

    /// The closest entry, or `None` when the location is unknown or the
    /// catalogue is empty.
    #[must_use]
    pub fn nearest(&self) -> Option<ProximityResult<'a>> {
        let user = self.fix()?;
        let (poi, distance_m) = self.catalogue.nearest(user)?;
        Some(ProximityResult {
            poi,
            distance_m,
            bearing_deg: bearing(user, poi.location),
        })
    }

    /// Bearing in degrees from the user to the entry `id`.
    ///
    /// `None` means "unknown": either no fix is available or `id` is not in
    /// the catalogue.
    #[must_use]
    pub fn bearing_to(&self, id: &str) -> Option<f64> {
        let target = self.catalogue.get(id)?;
        let user = self.fix()?;
        Some(bearing(user, target.location))
    }

    /// Full measurement of the entry `id`, if both it and a fix exist.
    #[must_use]
    pub fn measure(&self, id: &str) -> Option<ProximityResult<'a>> {
        let target = self.catalogue.get(id)?;
        let user = self.fix()?;
        Some(ProximityResult::measure(user, target))
    }

    fn fix(&self) -> Option<Coord<f64>> {
        let fix = self.source.current();
        if fix.is_none() {
            debug!("No user location available; returning empty proximity result");
        }
        fix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedLocation, SharedLocation, lat_lon, test_support::sample_catalogue};
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalogue() -> PoiCatalogue {
        sample_catalogue()
    }

    #[rstest]
    fn nearby_is_sorted_by_distance(catalogue: PoiCatalogue) {
        let proximity = Proximity::new(&catalogue, FixedLocation::at(lat_lon(7.9572, 80.7603)));
        let ids: Vec<_> = proximity
            .nearby(40_000.0)
            .iter()
            .map(|result| result.poi.id.as_str())
            .collect();
        assert_eq!(ids, vec!["sigiriya", "dambulla", "minneriya", "polonnaruwa"]);
    }

    #[rstest]
    fn nearest_reports_distance_and_bearing(catalogue: PoiCatalogue) {
        let proximity = Proximity::new(&catalogue, FixedLocation::at(lat_lon(7.9572, 80.7603)));
        let result = proximity.nearest().expect("location and entries present");
        assert_eq!(result.poi.id, "sigiriya");
        assert!(result.distance_m <= 50.0);
        // The summit reading sits just north of the recorded position.
        assert!((result.bearing_deg - 180.0).abs() < 1e-6);
    }

    #[rstest]
    fn unknown_location_yields_empty_answers(catalogue: PoiCatalogue) {
        let proximity = Proximity::new(&catalogue, FixedLocation::unknown());
        assert!(proximity.nearby(f64::INFINITY).is_empty());
        assert!(proximity.nearest().is_none());
        assert!(proximity.bearing_to("sigiriya").is_none());
        assert!(proximity.measure("sigiriya").is_none());
    }

    #[rstest]
    fn unknown_identifier_has_no_bearing(catalogue: PoiCatalogue) {
        let proximity = Proximity::new(&catalogue, FixedLocation::at(lat_lon(7.0, 80.0)));
        assert!(proximity.bearing_to("atlantis").is_none());
    }

    #[rstest]
    fn queries_follow_the_latest_fix(catalogue: PoiCatalogue) {
        let location = SharedLocation::default();
        let proximity = Proximity::new(&catalogue, location.clone());
        assert!(proximity.nearest().is_none());

        assert!(location.update(lat_lon(6.0300, 80.2170)));
        let first = proximity.nearest().map(|result| result.poi.id.clone());
        assert_eq!(first.as_deref(), Some("galle-fort"));

        assert!(location.update(lat_lon(6.3700, 81.5000)));
        let second = proximity.nearest().map(|result| result.poi.id.clone());
        assert_eq!(second.as_deref(), Some("yala"));

        let degrees = proximity.bearing_to("sigiriya").expect("known target");
        assert!((0.0..360.0).contains(&degrees));
        assert_eq!(
            proximity.measure("sigiriya").map(|r| r.bearing_deg),
            Some(degrees)
        );
    }
}
