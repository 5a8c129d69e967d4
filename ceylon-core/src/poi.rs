use geo::Coord;

use crate::{Category, CompassPoint, bearing, distance};

/// A heritage site or wildlife spot worth visiting.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use ceylon_core::{Category, PointOfInterest, lat_lon};
///
/// let poi = PointOfInterest::new(
///     "sigiriya",
///     "Sigiriya Rock Fortress",
///     lat_lon(7.9570, 80.7603),
///     Category::HeritageSite,
/// );
///
/// assert_eq!(poi.id, "sigiriya");
/// assert_eq!(poi.latitude(), 7.9570);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    /// Stable identifier, unique within a catalogue.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Kind of attraction.
    pub category: Category,
}

impl PointOfInterest {
    /// Construct a `PointOfInterest`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coord<f64>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            category,
        }
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}

/// A point of interest measured from a user position.
///
/// Results are ephemeral: they are recomputed for every query and reflect a
/// single user coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityResult<'a> {
    /// The measured point.
    pub poi: &'a PointOfInterest,
    /// Great-circle distance from the user in metres.
    pub distance_m: f64,
    /// Initial bearing from the user in degrees, within `[0, 360)`.
    pub bearing_deg: f64,
}

impl<'a> ProximityResult<'a> {
    /// Measure `poi` relative to `user`.
    ///
    /// # Examples
    /// ```
    /// use ceylon_core::{Category, PointOfInterest, ProximityResult, lat_lon};
    ///
    /// let poi = PointOfInterest::new("east", "East", lat_lon(0.0, 1.0), Category::WildlifeSpot);
    /// let result = ProximityResult::measure(lat_lon(0.0, 0.0), &poi);
    ///
    /// assert!((result.bearing_deg - 90.0).abs() < 1e-9);
    /// assert!(result.distance_m > 111_000.0);
    /// ```
    #[must_use]
    pub fn measure(user: Coord<f64>, poi: &'a PointOfInterest) -> Self {
        Self {
            poi,
            distance_m: distance(user, poi.location),
            bearing_deg: bearing(user, poi.location),
        }
    }

    /// Eight-wind compass label for [`Self::bearing_deg`].
    #[must_use]
    pub fn compass(&self) -> CompassPoint {
        CompassPoint::from_bearing(self.bearing_deg)
    }
}
