//! Suggest command implementation for the food permit CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use foodpermit_core::{DEFAULT_INDEXED_FIELDS, FieldKey};
use foodpermit_data::initialise_engine;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::{require_dataset, resolve_dataset_path, write_json};
use crate::{ARG_DATA, ARG_FIELD, ARG_KEY, ARG_VALUE, CliError, ENV_SUGGEST_KEY};

/// CLI arguments for the `suggest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Complete a prefix against the distinct values of one \
                 permit field. Matching ignores case and suggestions are \
                 returned lower-cased in lexical order. Only fields named \
                 with --field (applicant, address and locationDescription \
                 by default) are indexed.",
    about = "Suggest field values starting with a prefix"
)]
#[ortho_config(prefix = "FOODPERMIT")]
pub(crate) struct SuggestArgs {
    /// Path to the permit CSV dataset.
    #[arg(long = ARG_DATA, value_name = "path")]
    #[serde(default)]
    pub(crate) data: Option<Utf8PathBuf>,
    /// Field to complete, for example `applicant`.
    #[arg(long = ARG_KEY, value_name = "field")]
    #[serde(default)]
    pub(crate) key: Option<String>,
    /// Prefix to complete. Empty lists every value.
    #[arg(long = ARG_VALUE, value_name = "prefix")]
    #[serde(default)]
    pub(crate) value: Option<String>,
    /// Field to index; repeat to index several.
    #[arg(long = ARG_FIELD, value_name = "field")]
    #[serde(default)]
    pub(crate) field: Option<Vec<String>>,
}

impl SuggestArgs {
    fn into_config(self) -> Result<SuggestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SuggestConfig::try_from(merged)
    }
}

/// Resolved `suggest` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SuggestConfig {
    pub(crate) data: Utf8PathBuf,
    pub(crate) key: FieldKey,
    pub(crate) prefix: String,
    pub(crate) fields: Vec<FieldKey>,
}

impl TryFrom<SuggestArgs> for SuggestConfig {
    type Error = CliError;

    fn try_from(args: SuggestArgs) -> Result<Self, Self::Error> {
        let name = args.key.ok_or(CliError::MissingArgument {
            field: ARG_KEY,
            env: ENV_SUGGEST_KEY,
        })?;
        if name.is_empty() {
            return Err(CliError::InvalidQuery {
                field: ARG_KEY,
                reason: "field key must not be empty",
            });
        }
        let key = name.parse::<FieldKey>()?;
        let fields = match args.field {
            Some(names) if !names.is_empty() => names
                .iter()
                .map(|field| field.parse::<FieldKey>())
                .collect::<Result<Vec<_>, _>>()?,
            _ => DEFAULT_INDEXED_FIELDS.to_vec(),
        };
        Ok(Self {
            data: resolve_dataset_path(args.data),
            key,
            prefix: args.value.unwrap_or_default(),
            fields,
        })
    }
}

pub(crate) fn run_suggest(args: SuggestArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_suggest(&config, writer)
}

/// Load the dataset, index the configured fields and write suggestions as
/// JSON.
pub(crate) fn execute_suggest(
    config: &SuggestConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_dataset(&config.data)?;
    let engine = initialise_engine(&config.data, &config.fields)?;
    let suggestions = engine.suggest_field(config.key, &config.prefix)?;
    write_json(writer, &suggestions)
}

