//! Catalogue path and user position shared by every query command.

use camino::{Utf8Path, Utf8PathBuf};
use ceylon_core::{PoiCatalogue, is_valid_coordinate, lat_lon};
use ceylon_fs::open_utf8_file;
use geo::Coord;
use log::debug;
use std::io::BufReader;

use crate::{ARG_CATALOGUE, ARG_LAT, ARG_LON, CliError, env_var};

/// Where a query starts from: the catalogue to search and the user position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QueryOrigin {
    /// Path to the JSON catalogue.
    pub(crate) catalogue: Utf8PathBuf,
    /// User position, `x` = longitude and `y` = latitude.
    pub(crate) user: Coord<f64>,
}

impl QueryOrigin {
    /// Require the merged catalogue path and coordinate for `command`.
    pub(crate) fn resolve(
        command: &str,
        catalogue: Option<Utf8PathBuf>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Result<Self, CliError> {
        let catalogue = require(catalogue, command, ARG_CATALOGUE)?;
        let latitude = require(lat, command, ARG_LAT)?;
        let longitude = require(lon, command, ARG_LON)?;
        let user = lat_lon(latitude, longitude);
        if !is_valid_coordinate(user) {
            return Err(CliError::InvalidLocation {
                latitude,
                longitude,
            });
        }
        Ok(Self { catalogue, user })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalogue, ARG_CATALOGUE)
    }

    /// Read and validate the catalogue file.
    pub(crate) fn load_catalogue(&self) -> Result<PoiCatalogue, CliError> {
        let path = &self.catalogue;
        let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalogue {
            path: path.clone(),
            source,
        })?;
        let catalogue =
            PoiCatalogue::from_json_reader(BufReader::new(file)).map_err(|source| {
                CliError::LoadCatalogue {
                    path: path.clone(),
                    source,
                }
            })?;
        debug!(
            "Loaded {} points of interest from {path}",
            catalogue.len()
        );
        Ok(catalogue)
    }
}

fn require<T>(value: Option<T>, command: &str, field: &'static str) -> Result<T, CliError> {
    value.ok_or_else(|| CliError::MissingArgument {
        field,
        env: env_var(command, field),
    })
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match ceylon_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
