//! `nearby` command: points of interest within a radius of the user.

use camino::Utf8PathBuf;
use ceylon_core::{Category, FixedLocation, PoiCatalogue, Proximity};
use clap::Parser;
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::origin::QueryOrigin;
use crate::report::{PoiReport, write_report};
use crate::{
    ARG_CATALOGUE, ARG_CATEGORY, ARG_LAT, ARG_LON, ARG_RADIUS, CMD_NEARBY, CliError,
    DEFAULT_RADIUS_M,
};

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = CMD_NEARBY,
    long_about = "List every point of interest within a great-circle radius of \
                 the given position, nearest first. Options can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "List points of interest within a radius"
)]
#[ortho_config(prefix = "CEYLON")]
pub(crate) struct NearbyArgs {
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
    /// Search radius in metres (default 10000).
    #[arg(long = ARG_RADIUS, value_name = "metres", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) radius: Option<f64>,
    /// Only report entries of this category (`heritage-site` or `wildlife-spot`).
    #[arg(long = ARG_CATEGORY, value_name = "category")]
    #[serde(default)]
    pub(crate) category: Option<Category>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    pub(crate) origin: QueryOrigin,
    /// Search radius in metres.
    pub(crate) radius_m: f64,
    pub(crate) category: Option<Category>,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let origin = QueryOrigin::resolve(CMD_NEARBY, args.catalogue, args.lat, args.lon)?;
        let radius_m = args.radius.unwrap_or(DEFAULT_RADIUS_M);
        if radius_m < 0.0 {
            warn!("Negative radius {radius_m} m matches no points of interest");
        }
        Ok(Self {
            origin,
            radius_m,
            category: args.category,
        })
    }
}

pub(crate) fn run_nearby(args: NearbyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.origin.validate_sources()?;
    let catalogue = config.origin.load_catalogue()?;
    let reports = nearby_reports(&catalogue, &config);
    write_report(writer, &reports)
}

pub(crate) fn nearby_reports(catalogue: &PoiCatalogue, config: &NearbyConfig) -> Vec<PoiReport> {
    let proximity = Proximity::new(catalogue, FixedLocation::at(config.origin.user));
    proximity
        .nearby(config.radius_m)
        .iter()
        .filter(|result| {
            config
                .category
                .is_none_or(|category| result.poi.category == category)
        })
        .map(PoiReport::from)
        .collect()
}
