//! Geosearch command implementation for the food permit CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use foodpermit_data::initialise_engine;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::{require_dataset, resolve_dataset_path, write_json};
use crate::{
    ARG_DATA, ARG_LAT, ARG_LNG, ARG_RADIUS, CliError, ENV_GEOSEARCH_LAT, ENV_GEOSEARCH_LNG,
    ENV_GEOSEARCH_RADIUS,
};

/// CLI arguments for the `geosearch` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List every permit whose recorded location lies strictly \
                 within the given radius of a point. Distances are great-circle \
                 distances in metres. Records without usable coordinates are \
                 never returned.",
    about = "Find permits within a radius of a point"
)]
#[ortho_config(prefix = "FOODPERMIT")]
pub(crate) struct GeosearchArgs {
    /// Path to the permit CSV dataset.
    #[arg(long = ARG_DATA, value_name = "path")]
    #[serde(default)]
    pub(crate) data: Option<Utf8PathBuf>,
    /// Latitude of the search centre, in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the search centre, in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Search radius, in metres.
    #[arg(long = ARG_RADIUS, value_name = "metres", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) radius: Option<f64>,
}

impl GeosearchArgs {
    fn into_config(self) -> Result<GeosearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GeosearchConfig::try_from(merged)
    }
}

/// Resolved and validated `geosearch` configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GeosearchConfig {
    pub(crate) data: Utf8PathBuf,
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    pub(crate) radius: f64,
}

impl GeosearchConfig {
    /// Reject coordinates and radii the engine does not accept.
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CliError::InvalidQuery {
                field: ARG_LAT,
                reason: "latitude must be within -90 and 90",
            });
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(CliError::InvalidQuery {
                field: ARG_LNG,
                reason: "longitude must be within -180 and 180",
            });
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(CliError::InvalidQuery {
                field: ARG_RADIUS,
                reason: "radius must be a finite, non-negative number of metres",
            });
        }
        Ok(())
    }
}

impl TryFrom<GeosearchArgs> for GeosearchConfig {
    type Error = CliError;

    fn try_from(args: GeosearchArgs) -> Result<Self, Self::Error> {
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_GEOSEARCH_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_GEOSEARCH_LNG,
        })?;
        let radius = args.radius.ok_or(CliError::MissingArgument {
            field: ARG_RADIUS,
            env: ENV_GEOSEARCH_RADIUS,
        })?;
        Ok(Self {
            data: resolve_dataset_path(args.data),
            lat,
            lng,
            radius,
        })
    }
}

pub(crate) fn run_geosearch(args: GeosearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_geosearch(&config, writer)
}

/// Validate `config`, load the dataset and write matching records as JSON.
pub(crate) fn execute_geosearch(
    config: &GeosearchConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    config.validate()?;
    require_dataset(&config.data)?;
    // Radius search needs no prefix indexes.
    let engine = initialise_engine(&config.data, &[])?;
    let records = engine.geo_search(config.lat, config.lng, config.radius);
    write_json(writer, &records)
}
