//! Core domain types and measurements for the Ceylon Explorer engine.
//!
//! Points of interest are heritage sites and wildlife spots positioned on the
//! WGS84 ellipsoid. The crate offers pure great-circle measurements over
//! slices of points, an immutable [`PoiCatalogue`] loaded once at start-up, and
//! a [`Proximity`] service that answers queries relative to the latest user
//! position reported by a [`LocationSource`].
//!
//! Distances are always metres; convert only for display with
//! [`format_distance`].

#![forbid(unsafe_code)]

pub mod catalogue;
mod category;
mod display;
pub mod location;
mod measure;
mod poi;
mod proximity;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalogue::{CatalogueError, PoiCatalogue};
pub use category::{Category, ParseCategoryError};
pub use display::{CompassPoint, format_distance};
pub use location::{FixedLocation, LocationSource, SharedLocation};
pub use measure::{
    EARTH_RADIUS_M, bearing, distance, find_within_radius, is_valid_coordinate, lat_lon, nearest,
    rank_by_distance,
};
pub use poi::{PointOfInterest, ProximityResult};
pub use proximity::Proximity;
