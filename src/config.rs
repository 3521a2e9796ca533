//! Launcher configuration: built-in defaults, an optional TOML file, and
//! validation.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::env_block::EnvBlock;
use crate::{AppError, Result};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_PATH_ENV: &str = "BOT_LAUNCHER_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "launcher.toml";

/// The bot program and its arguments.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct BotCommand {
    /// Interpreter or executable to start.
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments passed to `program`.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for BotCommand {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

impl BotCommand {
    /// Build a command from a program and argument list as given on the
    /// command line. Returns `None` when `argv` is empty.
    #[must_use]
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Human-readable command line, for logs.
    #[must_use]
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn default_program() -> String {
    "python".into()
}

fn default_args() -> Vec<String> {
    vec!["bot.py".into()]
}

fn default_true() -> bool {
    true
}

/// Launcher configuration parsed from `launcher.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LaunchConfig {
    /// Bot command line.
    #[serde(default)]
    pub bot: BotCommand,
    /// Overrides and additions to the built-in environment variables.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    /// Wait for Enter before exiting.
    #[serde(default = "default_true")]
    pub pause: bool,
    /// Exit with the bot's exit code instead of 0.
    #[serde(default)]
    pub propagate_exit_code: bool,
    /// Export the credentials file contents as `GOOGLE_CREDENTIALS`.
    #[serde(default)]
    pub export_credentials_json: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            bot: BotCommand::default(),
            env: BTreeMap::new(),
            pause: true,
            propagate_exit_code: false,
            export_credentials_json: false,
        }
    }
}

impl LaunchConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            AppError::Config(format!("failed to read config {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Locate and load the configuration.
    ///
    /// An explicit path wins, then [`CONFIG_PATH_ENV`], then
    /// [`DEFAULT_CONFIG_FILE`] in the working directory. The first two must
    /// exist; the last is optional and its absence yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a named file is unreadable or invalid.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config from --config");
            return Self::load_from_path(path);
        }

        if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            let path = PathBuf::from(path);
            debug!(path = %path.display(), env = CONFIG_PATH_ENV, "loading config from environment");
            return Self::load_from_path(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            debug!(path = DEFAULT_CONFIG_FILE, "loading config from working directory");
            return Self::load_from_path(fallback);
        }

        debug!("no config file found; using built-in defaults");
        Ok(Self::default())
    }

    /// Built-in variables with the `[env]` table layered on top.
    ///
    /// Overridden keys keep their default position; new keys follow in
    /// name order.
    #[must_use]
    pub fn env_block(&self) -> EnvBlock {
        let mut block = EnvBlock::default();
        for (key, value) in &self.env {
            block.set(key.as_str(), value.as_str());
        }
        block
    }

    fn validate(&self) -> Result<()> {
        if self.bot.program.trim().is_empty() {
            return Err(AppError::Config("bot.program must not be empty".into()));
        }

        self.env_block().validate()
    }
}
