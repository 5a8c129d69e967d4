//! Conversions used only at the display boundary.
//!
//! The engine measures everything in metres and degrees; these helpers turn
//! those values into the short labels shown next to map pins and list rows.

/// One of the eight principal compass winds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    /// 337.5° to 22.5°.
    North,
    /// 22.5° to 67.5°.
    NorthEast,
    /// 67.5° to 112.5°.
    East,
    /// 112.5° to 157.5°.
    SouthEast,
    /// 157.5° to 202.5°.
    South,
    /// 202.5° to 247.5°.
    SouthWest,
    /// 247.5° to 292.5°.
    West,
    /// 292.5° to 337.5°.
    NorthWest,
}

impl CompassPoint {
    /// Classify a bearing in degrees. Values outside `[0, 360)` wrap around;
    /// NaN maps to [`CompassPoint::North`].
    ///
    /// # Examples
    /// ```
    /// use ceylon_core::CompassPoint;
    ///
    /// assert_eq!(CompassPoint::from_bearing(42.0), CompassPoint::NorthEast);
    /// assert_eq!(CompassPoint::from_bearing(350.0), CompassPoint::North);
    /// assert_eq!(CompassPoint::from_bearing(-90.0), CompassPoint::West);
    /// ```
    #[must_use]
    pub fn from_bearing(bearing_deg: f64) -> Self {
        match bearing_deg.rem_euclid(360.0) {
            d if d < 22.5 => Self::North,
            d if d < 67.5 => Self::NorthEast,
            d if d < 112.5 => Self::East,
            d if d < 157.5 => Self::SouthEast,
            d if d < 202.5 => Self::South,
            d if d < 247.5 => Self::SouthWest,
            d if d < 292.5 => Self::West,
            d if d < 337.5 => Self::NorthWest,
            _ => Self::North,
        }
    }

    /// Abbreviated label such as `"NE"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const UNKNOWN_DISTANCE: &str = "unknown";

/// Render a distance in metres as a short human-readable label.
///
/// Whole metres below one kilometre, one decimal place below one hundred
/// kilometres, and whole kilometres beyond that. NaN and infinite inputs
/// render as `"unknown"` rather than a numeric label.
///
/// # Examples
/// ```
/// use ceylon_core::format_distance;
///
/// assert_eq!(format_distance(850.4), "850 m");
/// assert_eq!(format_distance(75_212.0), "75.2 km");
/// assert_eq!(format_distance(120_300.0), "120 km");
/// assert_eq!(format_distance(f64::NAN), "unknown");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "unit conversion from metres to kilometres"
)]
pub fn format_distance(metres: f64) -> String {
    if !metres.is_finite() {
        return UNKNOWN_DISTANCE.to_owned();
    }
    if metres.round() < 1_000.0 {
        return format!("{metres:.0} m");
    }
    let kilometres = metres / 1_000.0;
    if kilometres < 99.95 {
        format!("{kilometres:.1} km")
    } else {
        format!("{kilometres:.0} km")
    }
}
