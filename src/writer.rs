use crate::error::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const JSON_FILE: &str = "swagger.json";
pub const SCRIPT_FILE: &str = "spec.js";
pub const SCRIPT_PREFIX: &str = "var spec = ";

/// Writes `swagger.json` and `spec.js` into `dir`, creating it if needed.
/// Both files carry the same compact JSON payload. Returns the written paths.
pub fn write_docs(dir: &Path, document: &Value) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)?;
    let payload = serde_json::to_string(document)?;

    let json_path = dir.join(JSON_FILE);
    log::info!("Generating {}...", JSON_FILE);
    std::fs::write(&json_path, &payload)?;
    log::info!("Written {:?}", json_path);

    let script_path = dir.join(SCRIPT_FILE);
    log::info!("Generating {}...", SCRIPT_FILE);
    std::fs::write(&script_path, format!("{}{}", SCRIPT_PREFIX, payload))?;
    log::info!("Written {:?}", script_path);

    Ok((json_path, script_path))
}
