//! Test-only fixtures: a small catalogue of well-known Sri Lankan sites.
//!
//! Coordinates are rounded to four decimal places, enough to resolve each
//! site to within roughly ten metres.

use crate::{Category, PoiCatalogue, PointOfInterest, lat_lon};

/// The five heritage sites used throughout the tests, in a fixed order.
#[must_use]
pub fn sample_heritage_sites() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new(
            "sigiriya",
            "Sigiriya Rock Fortress",
            lat_lon(7.9570, 80.7603),
            Category::HeritageSite,
        ),
        PointOfInterest::new(
            "temple-of-the-tooth",
            "Temple of the Sacred Tooth Relic",
            lat_lon(7.2936, 80.6413),
            Category::HeritageSite,
        ),
        PointOfInterest::new(
            "galle-fort",
            "Galle Fort",
            lat_lon(6.0260, 80.2170),
            Category::HeritageSite,
        ),
        PointOfInterest::new(
            "polonnaruwa",
            "Ancient City of Polonnaruwa",
            lat_lon(7.9403, 81.0188),
            Category::HeritageSite,
        ),
        PointOfInterest::new(
            "dambulla",
            "Dambulla Cave Temple",
            lat_lon(7.8567, 80.6492),
            Category::HeritageSite,
        ),
    ]
}

/// Two wildlife spots complementing [`sample_heritage_sites`].
#[must_use]
pub fn sample_wildlife_spots() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new(
            "yala",
            "Yala National Park",
            lat_lon(6.3728, 81.5016),
            Category::WildlifeSpot,
        ),
        PointOfInterest::new(
            "minneriya",
            "Minneriya National Park",
            lat_lon(8.0367, 80.8956),
            Category::WildlifeSpot,
        ),
    ]
}

/// Catalogue holding the heritage sites followed by the wildlife spots.
///
/// # Panics
///
/// Panics if the fixture data fails validation, which would be a bug in the
/// fixture itself.
#[must_use]
#[expect(clippy::expect_used, reason = "fixture data is static and known valid")]
pub fn sample_catalogue() -> PoiCatalogue {
    let mut pois = sample_heritage_sites();
    pois.extend(sample_wildlife_spots());
    PoiCatalogue::new(pois).expect("sample catalogue is valid")
}
