//! Error types emitted by the food permit CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use foodpermit_core::{SuggestError, UnknownFieldKey};
use foodpermit_data::LoadError;
use thiserror::Error;

/// Errors emitted by the food permit CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A query parameter is outside its accepted range.
    #[error("invalid {field}: {reason}")]
    InvalidQuery {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Accepted range or shape.
        reason: &'static str,
    },
    /// A field key is not recognised.
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldKey),
    /// The dataset path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// The dataset path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// The dataset path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the dataset or building the engine failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The engine rejected the suggestion request.
    #[error(transparent)]
    Suggest(#[from] SuggestError),
    /// Serialising query results failed.
    #[error("failed to serialise results: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing query results failed.
    #[error("failed to write results: {0}")]
    WriteOutput(#[source] std::io::Error),
}
