//! Read-only observations printed before the bot starts.

use std::path::PathBuf;

use crate::env_block::{EnvBlock, DEFAULT_CREDS_FILE, GOOGLE_CREDS_FILE};

/// Diagnostic facts about the prepared environment. None of them gate the
/// launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    /// `TELEGRAM_BOT_TOKEN` holds a non-empty value.
    pub token_set: bool,
    /// Credentials path as configured (relative paths stay relative).
    pub creds_path: PathBuf,
    /// The credentials path exists, resolved against the working directory.
    pub creds_exists: bool,
}

impl Diagnostics {
    /// Observe the token and the credentials file for `block`.
    #[must_use]
    pub fn observe(block: &EnvBlock) -> Self {
        let creds_path =
            PathBuf::from(block.get(GOOGLE_CREDS_FILE).unwrap_or(DEFAULT_CREDS_FILE));
        let creds_exists = creds_path.exists();
        Self {
            token_set: block.token_is_set(),
            creds_path,
            creds_exists,
        }
    }

    /// Console lines, in print order.
    #[must_use]
    pub fn lines(&self) -> [String; 2] {
        [
            format!("TELEGRAM_BOT_TOKEN set: {}", self.token_set),
            format!(
                "Credentials file {} exists: {}",
                self.creds_path.display(),
                self.creds_exists
            ),
        ]
    }
}
