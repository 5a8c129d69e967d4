//! Categories grouping points of interest on the map and in lists.
//!
//! The enum offers compile-time safety for category filters.
//!
//! # Examples
//! ```
//! use ceylon_core::Category;
//!
//! assert_eq!(Category::HeritageSite.as_str(), "heritage-site");
//! assert_eq!(Category::WildlifeSpot.to_string(), "wildlife-spot");
//! ```

use thiserror::Error;

/// Broad kind of a point of interest.
///
/// Deserialization accepts the same labels as [`str::parse`], so
/// configuration files and environment variables agree with the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case", try_from = "String")
)]
pub enum Category {
    /// Temples, forts, ancient cities and other cultural landmarks.
    HeritageSite,
    /// National parks and viewing spots for wildlife.
    WildlifeSpot,
}

/// Error returned when parsing an unknown category label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 2] = [Self::HeritageSite, Self::WildlifeSpot];

    /// Return the category as a lowercase, hyphenated `&str`.
    ///
    /// # Examples
    /// ```
    /// use ceylon_core::Category;
    ///
    /// assert_eq!(Category::WildlifeSpot.as_str(), "wildlife-spot");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HeritageSite => "heritage-site",
            Self::WildlifeSpot => "wildlife-spot",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "heritage-site" | "heritage" => Ok(Self::HeritageSite),
            "wildlife-spot" | "wildlife" => Ok(Self::WildlifeSpot),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
