//! Error types shared across the launcher.

use std::fmt::{Display, Formatter};

/// Shared launcher result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Launcher error enumeration covering every fatal condition.
///
/// A missing credentials file and a non-zero bot exit are not errors; they
/// are reported on the console and execution continues.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// The bot process could not be started or waited on.
    Launch(String),
    /// The credentials file exists but could not be read or parsed.
    Credentials(String),
    /// Console or file-system I/O failure.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Launch(msg) => write!(f, "launch: {msg}"),
            Self::Credentials(msg) => write!(f, "credentials: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
