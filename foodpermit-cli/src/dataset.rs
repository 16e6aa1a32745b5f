//! Dataset path resolution and output helpers shared by every command.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use foodpermit_data::DEFAULT_DATASET_PATH;
use serde::Serialize;

use crate::{ARG_DATA, CliError};

/// Use the configured dataset path or fall back to the default file name.
pub(crate) fn resolve_dataset_path(data: Option<Utf8PathBuf>) -> Utf8PathBuf {
    data.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET_PATH))
}

/// Fail early unless `path` names an existing regular file.
pub(crate) fn require_dataset(path: &Utf8Path) -> Result<(), CliError> {
    match foodpermit_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field: ARG_DATA,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field: ARG_DATA,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field: ARG_DATA,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
