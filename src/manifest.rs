//! Local manifest adapter
//!
//! Reads the published version out of `<directory>/package.json`. The
//! manifest is read-only input; it is never written.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::ManifestError;

/// Name of the manifest file inside the working directory
pub const MANIFEST_FILE: &str = "package.json";

/// Read the `version` field out of the manifest in `directory`.
///
/// Fails with the local MissingVersion error when the field is absent, not
/// a string, or empty.
pub fn read_current_version(directory: &Path) -> Result<String, ManifestError> {
    let path = directory.join(MANIFEST_FILE);

    let content =
        fs::read_to_string(&path).map_err(|source| ManifestError::read_error(&path, source))?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|e| ManifestError::json_parse_error(&path, e.to_string()))?;

    match json.get("version") {
        Some(Value::String(version)) if !version.trim().is_empty() => {
            Ok(version.trim().to_string())
        }
        _ => Err(ManifestError::MissingVersion { path }),
    }
}
