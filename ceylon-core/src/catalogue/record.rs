//! JSON representation of catalogue entries.

use serde::Deserialize;

use crate::{Category, PointOfInterest, lat_lon};

/// One catalogue entry as stored on disk.
///
/// Coordinates are spelled out as `latitude`/`longitude` rather than `geo`'s
/// `x`/`y` so that content editors cannot swap the axes by accident.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PoiRecord {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) category: Category,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

impl From<PoiRecord> for PointOfInterest {
    fn from(record: PoiRecord) -> Self {
        Self::new(
            record.id,
            record.name,
            lat_lon(record.latitude, record.longitude),
            record.category,
        )
    }
}
