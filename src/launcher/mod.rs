//! The launch sequence.
//!
//! [`Launcher::run`] performs, in order: startup banner, environment
//! population, diagnostics, bot execution, exit report, and the final
//! "press Enter" pause. Nothing runs concurrently; the only blocking points
//! are the wait on the bot and the pause.

pub mod credentials;
pub mod diagnostics;
pub mod exit_report;
pub mod spawner;

use std::env;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::config::LaunchConfig;
use crate::env_block::missing_required;
use crate::Result;

pub use diagnostics::Diagnostics;
pub use exit_report::BotExit;

/// First console line.
pub const STARTUP_MARKER: &str = "=== Bot launcher starting ===";
/// Final prompt, printed without a trailing newline.
pub const PAUSE_PROMPT: &str = "Press Enter to exit...";

/// Runs the bot once with a prepared environment.
#[derive(Debug, Clone)]
pub struct Launcher {
    config: LaunchConfig,
}

impl Launcher {
    /// Create a launcher for `config`.
    #[must_use]
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    /// Run the full launch sequence.
    ///
    /// Console lines go to `console`; the pause reads one line from `input`.
    /// The console is flushed before the bot starts so its output follows
    /// the diagnostics.
    ///
    /// # Errors
    ///
    /// - `AppError::Config` if the environment block is invalid.
    /// - `AppError::Credentials` if credential export is enabled and the
    ///   file is unreadable or malformed.
    /// - `AppError::Launch` if the bot cannot be started. Nothing further is
    ///   printed in that case.
    /// - `AppError::Io` if the console cannot be written.
    pub async fn run<W, R>(&self, console: &mut W, input: R) -> Result<BotExit>
    where
        W: Write,
        R: AsyncBufRead + Unpin,
    {
        writeln!(console, "{STARTUP_MARKER}")?;
        let cwd = env::current_dir()?;
        writeln!(console, "Working directory: {}", cwd.display())?;

        let block = self.config.env_block();
        block.apply()?;
        info!(count = block.len(), "environment populated");
        for key in missing_required(|key| env::var(key).ok()) {
            warn!(key, "required variable is empty; the bot will refuse to start");
        }

        let diagnostics = Diagnostics::observe(&block);
        for line in diagnostics.lines() {
            writeln!(console, "{line}")?;
        }

        if self.config.export_credentials_json {
            credentials::export_inline(&diagnostics.creds_path)?;
        }

        console.flush()?;
        let exit = spawner::run_to_completion(&self.config.bot).await?;
        writeln!(console, "{}", exit.report_line())?;

        if self.config.pause {
            wait_for_enter(console, input).await?;
        }

        Ok(exit)
    }
}

/// Print the prompt and wait for one line (or EOF, or Ctrl-C).
async fn wait_for_enter<W, R>(console: &mut W, mut input: R) -> Result<()>
where
    W: Write,
    R: AsyncBufRead + Unpin,
{
    write!(console, "{PAUSE_PROMPT}")?;
    console.flush()?;

    let mut line = String::new();
    tokio::select! {
        read = input.read_line(&mut line) => {
            read?;
        }
        _ = tokio::signal::ctrl_c() => {}
    }
    Ok(())
}
