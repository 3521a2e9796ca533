#![forbid(unsafe_code)]

//! Launcher for the rides Telegram bot.
//!
//! Populates the environment the bot reads its settings from, prints a few
//! diagnostic lines, runs the bot to completion and reports its exit code.

pub mod cli;
pub mod config;
pub mod env_block;
pub mod errors;
pub mod launcher;

pub use config::LaunchConfig;
pub use errors::{AppError, Result};
pub use launcher::Launcher;
