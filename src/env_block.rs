//! The set of environment variables handed to the bot process.
//!
//! The bot reads all of its settings from the environment. [`EnvBlock`]
//! holds them as an ordered list so the launcher can apply them to its own
//! process environment in one step before the child is spawned.

use std::env;

use crate::{AppError, Result};

/// Telegram bot API token.
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
/// Google Sheets spreadsheet identifier.
pub const SPREADSHEET_ID: &str = "SPREADSHEET_ID";
/// Worksheet holding the employee roster.
pub const SHEET_NAME: &str = "SHEET_NAME";
/// Path to the service-account credentials file.
pub const GOOGLE_CREDS_FILE: &str = "GOOGLE_CREDS_FILE";
/// Worksheet holding the drivers.
pub const DRIVERS_SHEET: &str = "DRIVERS_SHEET";
/// Worksheet receiving ride requests.
pub const TARGET_SHEET: &str = "TARGET_SHEET";
/// Inline service-account JSON, read by the bot in preference to the file.
pub const GOOGLE_CREDENTIALS: &str = "GOOGLE_CREDENTIALS";

/// Credentials path used when nothing overrides it.
pub const DEFAULT_CREDS_FILE: &str = "service_account.json";

/// Variables the bot refuses to start without.
pub const REQUIRED_VARS: &[&str] = &[TELEGRAM_BOT_TOKEN, SPREADSHEET_ID];

/// Built-in values, in the order they are applied.
pub const DEFAULT_VARS: &[(&str, &str)] = &[
    (TELEGRAM_BOT_TOKEN, "0000000000:replace-with-bot-token"),
    (SPREADSHEET_ID, "replace-with-spreadsheet-id"),
    (SHEET_NAME, "employees"),
    (GOOGLE_CREDS_FILE, DEFAULT_CREDS_FILE),
    (DRIVERS_SHEET, "drivers"),
    (TARGET_SHEET, "requests"),
];

/// Ordered key/value pairs destined for the bot's environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvBlock {
    vars: Vec<(String, String)>,
}

impl Default for EnvBlock {
    fn default() -> Self {
        Self {
            vars: DEFAULT_VARS
                .iter()
                .map(|&(key, value)| (key.to_owned(), value.to_owned()))
                .collect(),
        }
    }
}

impl EnvBlock {
    /// Empty block with no variables.
    #[must_use]
    pub fn empty() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set `key`, replacing an existing entry in place or appending a new one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.vars.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.vars.push((key, value));
        }
    }

    /// Value held for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the pairs in application order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the block holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Whether the token variable holds a non-empty value.
    #[must_use]
    pub fn token_is_set(&self) -> bool {
        self.get(TELEGRAM_BOT_TOKEN).is_some_and(|v| !v.is_empty())
    }

    /// Reject keys and values the OS environment cannot hold.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in &self.vars {
            if key.is_empty() {
                return Err(AppError::Config(
                    "environment variable name must not be empty".into(),
                ));
            }
            if key.contains('=') || key.contains('\0') {
                return Err(AppError::Config(format!(
                    "environment variable name {key:?} must not contain '=' or NUL"
                )));
            }
            if value.contains('\0') {
                return Err(AppError::Config(format!(
                    "environment variable {key} must not contain NUL"
                )));
            }
        }
        Ok(())
    }

    /// Write every pair into the current process environment, overwriting
    /// existing values. Validation runs first so no pair is applied unless
    /// all of them can be.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any pair fails [`EnvBlock::validate`].
    pub fn apply(&self) -> Result<()> {
        self.validate()?;
        for (key, value) in &self.vars {
            env::set_var(key, value);
        }
        Ok(())
    }
}

/// Names from [`REQUIRED_VARS`] for which `lookup` yields nothing or an
/// empty string.
#[must_use]
pub fn missing_required<F>(lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_VARS
        .iter()
        .copied()
        .filter(|key| !lookup(key).is_some_and(|v| !v.is_empty()))
        .collect()
}
