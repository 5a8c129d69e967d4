//! Sources of the user's current position.
//!
//! Platform location services deliver fixes asynchronously through their own
//! callbacks. The engine does not subscribe to them; instead a
//! [`LocationSource`] is polled whenever a query runs, and the platform glue
//! pushes fixes into a [`SharedLocation`].

use std::sync::{Arc, PoisonError, RwLock};

use geo::Coord;
use log::debug;

use crate::is_valid_coordinate;

/// Provide the most recently known user coordinate, if any.
///
/// # Examples
///
/// ```
/// use ceylon_core::{LocationSource, lat_lon};
/// use geo::Coord;
///
/// struct Kandy;
///
/// impl LocationSource for Kandy {
///     fn current(&self) -> Option<Coord<f64>> {
///         Some(lat_lon(7.2936, 80.6413))
///     }
/// }
///
/// assert_eq!(Kandy.current().map(|c| c.y), Some(7.2936));
/// ```
pub trait LocationSource {
    /// Return the latest coordinate, or `None` when no fix is available.
    fn current(&self) -> Option<Coord<f64>>;
}

impl<S: LocationSource + ?Sized> LocationSource for &S {
    fn current(&self) -> Option<Coord<f64>> {
        (**self).current()
    }
}

impl<S: LocationSource + ?Sized> LocationSource for Arc<S> {
    fn current(&self) -> Option<Coord<f64>> {
        (**self).current()
    }
}

/// A location that never changes, or is permanently unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedLocation(Option<Coord<f64>>);

impl FixedLocation {
    /// A source that always reports `coord`.
    #[must_use]
    pub const fn at(coord: Coord<f64>) -> Self {
        Self(Some(coord))
    }

    /// A source that never has a fix.
    #[must_use]
    pub const fn unknown() -> Self {
        Self(None)
    }
}

impl LocationSource for FixedLocation {
    fn current(&self) -> Option<Coord<f64>> {
        self.0
    }
}

/// Latest-value cell shared between a location callback and query callers.
///
/// Clones share the same cell. Readers never block writers for longer than a
/// copy of one coordinate, and a poisoned lock is recovered rather than
/// propagated because the guarded value is always a complete `Option`.
///
/// # Examples
///
/// ```
/// use ceylon_core::{LocationSource, SharedLocation, lat_lon};
///
/// let location = SharedLocation::default();
/// let updater = location.clone();
/// assert!(location.current().is_none());
///
/// updater.update(lat_lon(6.0260, 80.2170));
/// assert_eq!(location.current(), Some(lat_lon(6.0260, 80.2170)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedLocation {
    latest: Arc<RwLock<Option<Coord<f64>>>>,
}

impl SharedLocation {
    /// Record a new fix.
    ///
    /// Coordinates outside the WGS84 range are ignored and the previous fix
    /// is kept. Returns whether the fix was accepted.
    pub fn update(&self, coord: Coord<f64>) -> bool {
        if !is_valid_coordinate(coord) {
            debug!("Ignoring out-of-range location fix ({}, {})", coord.y, coord.x);
            return false;
        }
        *self.latest.write().unwrap_or_else(PoisonError::into_inner) = Some(coord);
        true
    }

    /// Forget the current fix, e.g. when location permission is revoked.
    pub fn clear(&self) {
        *self.latest.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl LocationSource for SharedLocation {
    fn current(&self) -> Option<Coord<f64>> {
        *self.latest.read().unwrap_or_else(PoisonError::into_inner)
    }
}
