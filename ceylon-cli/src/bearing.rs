//! `bearing` command: distance and compass direction to one entry.

use camino::Utf8PathBuf;
use ceylon_core::{FixedLocation, PoiCatalogue, Proximity};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::origin::QueryOrigin;
use crate::report::{PoiReport, write_report};
use crate::{ARG_CATALOGUE, ARG_LAT, ARG_LON, ARG_TO, CMD_BEARING, CliError, env_var};

/// CLI arguments for the `bearing` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = CMD_BEARING,
    long_about = "Report the distance and initial compass bearing from the \
                 given position to a catalogue entry identified by its id.",
    about = "Point the way to one point of interest"
)]
#[ortho_config(prefix = "CEYLON")]
pub(crate) struct BearingArgs {
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
    /// Identifier of the target point of interest.
    #[arg(long = ARG_TO, value_name = "id")]
    #[serde(default)]
    pub(crate) to: Option<String>,
}

impl BearingArgs {
    pub(crate) fn into_config(self) -> Result<BearingConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        BearingConfig::try_from(merged)
    }
}

/// Resolved `bearing` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BearingConfig {
    pub(crate) origin: QueryOrigin,
    /// Identifier of the target entry.
    pub(crate) target: String,
}

impl TryFrom<BearingArgs> for BearingConfig {
    type Error = CliError;

    fn try_from(args: BearingArgs) -> Result<Self, Self::Error> {
        let origin = QueryOrigin::resolve(CMD_BEARING, args.catalogue, args.lat, args.lon)?;
        let target = args.to.ok_or_else(|| CliError::MissingArgument {
            field: ARG_TO,
            env: env_var(CMD_BEARING, ARG_TO),
        })?;
        Ok(Self { origin, target })
    }
}

pub(crate) fn run_bearing(args: BearingArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.origin.validate_sources()?;
    let catalogue = config.origin.load_catalogue()?;
    let report = bearing_report(&catalogue, &config)?;
    write_report(writer, &report)
}

pub(crate) fn bearing_report(
    catalogue: &PoiCatalogue,
    config: &BearingConfig,
) -> Result<PoiReport, CliError> {
    Proximity::new(catalogue, FixedLocation::at(config.origin.user))
        .measure(&config.target)
        .as_ref()
        .map(PoiReport::from)
        .ok_or_else(|| CliError::UnknownPoi {
            id: config.target.clone(),
        })
}
