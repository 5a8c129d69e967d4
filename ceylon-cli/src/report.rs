//! JSON reports printed by the query commands.

use ceylon_core::{Category, ProximityResult, format_distance};
use serde::Serialize;
use std::io::Write;

use crate::CliError;

/// One point of interest as seen from the user's position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PoiReport {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) category: Category,
    pub(crate) distance_m: f64,
    /// Human-readable distance, e.g. `"1.2 km"`.
    pub(crate) distance: String,
    pub(crate) bearing_deg: f64,
    /// Eight-wind compass abbreviation, e.g. `"NE"`.
    pub(crate) compass: &'static str,
}

impl From<&ProximityResult<'_>> for PoiReport {
    fn from(result: &ProximityResult<'_>) -> Self {
        Self {
            id: result.poi.id.clone(),
            name: result.poi.name.clone(),
            category: result.poi.category,
            distance_m: result.distance_m,
            distance: format_distance(result.distance_m),
            bearing_deg: result.bearing_deg,
            compass: result.compass().as_str(),
        }
    }
}

/// Write `report` to `writer` as pretty JSON followed by a newline.
pub(crate) fn write_report<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    report: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
