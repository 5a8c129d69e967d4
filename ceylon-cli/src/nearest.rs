//! `nearest` command: the single closest point of interest.

use camino::Utf8PathBuf;
use ceylon_core::{FixedLocation, PoiCatalogue, Proximity};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::origin::QueryOrigin;
use crate::report::{PoiReport, write_report};
use crate::{ARG_CATALOGUE, ARG_LAT, ARG_LON, CMD_NEAREST, CliError};

/// CLI arguments for the `nearest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = CMD_NEAREST,
    long_about = "Report the point of interest closest to the given position. \
                 Prints null when the catalogue is empty.",
    about = "Report the closest point of interest"
)]
#[ortho_config(prefix = "CEYLON")]
pub(crate) struct NearestArgs {
    /// Path to the JSON catalogue of points of interest.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Latitude of the user in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the user in decimal degrees.
    #[arg(long = ARG_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
}

impl NearestArgs {
    pub(crate) fn into_config(self) -> Result<QueryOrigin, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryOrigin::try_from(merged)
    }
}

impl TryFrom<NearestArgs> for QueryOrigin {
    type Error = CliError;

    fn try_from(args: NearestArgs) -> Result<Self, Self::Error> {
        Self::resolve(CMD_NEAREST, args.catalogue, args.lat, args.lon)
    }
}

pub(crate) fn run_nearest(args: NearestArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let origin = args.into_config()?;
    origin.validate_sources()?;
    let catalogue = origin.load_catalogue()?;
    write_report(writer, &nearest_report(&catalogue, &origin))
}

pub(crate) fn nearest_report(catalogue: &PoiCatalogue, origin: &QueryOrigin) -> Option<PoiReport> {
    Proximity::new(catalogue, FixedLocation::at(origin.user))
        .nearest()
        .as_ref()
        .map(PoiReport::from)
}
