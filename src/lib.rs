//! Facade crate for the Ceylon Explorer proximity engine.
//!
//! This crate re-exports the core domain types and measurements so that app
//! shells depend on a single crate.

#![forbid(unsafe_code)]

pub use ceylon_core::{
    CatalogueError, Category, CompassPoint, EARTH_RADIUS_M, FixedLocation, LocationSource,
    ParseCategoryError, PoiCatalogue, PointOfInterest, Proximity, ProximityResult,
    SharedLocation, bearing, distance, find_within_radius, format_distance, is_valid_coordinate,
    lat_lon, nearest, rank_by_distance,
};

#[cfg(feature = "test-support")]
pub use ceylon_core::test_support;
