//! Command-line surface.
//!
//! Flags override the matching config-file settings; a trailing
//! `-- <program> [args...]` replaces the bot command.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{BotCommand, LaunchConfig};
use crate::Result;

/// Log output format.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "sheets-bot-launcher",
    about = "Prepare the bot environment, run the bot, report its exit code",
    version,
    long_about = None
)]
pub struct LaunchArgs {
    /// Path to the TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Exit immediately after the bot instead of waiting for Enter.
    #[arg(long)]
    pub no_pause: bool,

    /// Exit with the bot's exit code instead of 0.
    #[arg(long)]
    pub propagate_exit_code: bool,

    /// Bot program and arguments, replacing the configured command.
    #[arg(last = true)]
    pub command: Vec<String>,
}

impl LaunchArgs {
    /// Resolve the config file and layer these flags over it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the config file is unreadable or invalid.
    pub fn into_config(self) -> Result<LaunchConfig> {
        let base = LaunchConfig::resolve(self.config.as_deref())?;
        Ok(self.apply_to(base))
    }

    /// Layer these flags over `config`.
    #[must_use]
    pub fn apply_to(self, mut config: LaunchConfig) -> LaunchConfig {
        if self.no_pause {
            config.pause = false;
        }
        if self.propagate_exit_code {
            config.propagate_exit_code = true;
        }
        if let Some(bot) = BotCommand::from_argv(&self.command) {
            config.bot = bot;
        }
        config
    }
}
