//! Optional export of the service-account file as inline JSON.

use std::env;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::env_block::GOOGLE_CREDENTIALS;
use crate::{AppError, Result};

/// Copy the credentials file into `GOOGLE_CREDENTIALS`.
///
/// Returns `Ok(false)` without touching the environment when the file does
/// not exist.
///
/// # Errors
///
/// Returns `AppError::Credentials` if the file exists but cannot be read or
/// is not a JSON object.
pub fn export_inline(path: &Path) -> Result<bool> {
    if !path.is_file() {
        warn!(
            path = %path.display(),
            "credentials file missing; {GOOGLE_CREDENTIALS} not exported"
        );
        return Ok(false);
    }

    let raw = fs::read_to_string(path).map_err(|err| {
        AppError::Credentials(format!("failed to read {}: {err}", path.display()))
    })?;
    let parsed: serde_json::Value = serde_json::from_str(&raw).map_err(|err| {
        AppError::Credentials(format!("{} is not valid JSON: {err}", path.display()))
    })?;
    if !parsed.is_object() {
        return Err(AppError::Credentials(format!(
            "{} must contain a JSON object",
            path.display()
        )));
    }

    env::set_var(GOOGLE_CREDENTIALS, raw.trim());
    info!(path = %path.display(), "exported credentials as {GOOGLE_CREDENTIALS}");
    Ok(true)
}
