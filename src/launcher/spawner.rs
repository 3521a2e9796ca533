//! Bot process spawner.
//!
//! Starts the bot with the launcher's environment and standard streams and
//! waits for it to exit. Ctrl-C reaches the bot directly through the shared
//! terminal, so the launcher absorbs it and keeps waiting.

use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};
use tracing::{info, warn};

use super::exit_report::BotExit;
use crate::config::BotCommand;
use crate::{AppError, Result};

/// Start the bot and block until it terminates.
///
/// The child inherits the current process environment, so the caller must
/// apply its variables before calling this.
///
/// # Errors
///
/// Returns `AppError::Launch` if the program cannot be started or its
/// status cannot be collected.
pub async fn run_to_completion(command: &BotCommand) -> Result<BotExit> {
    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|err| {
        AppError::Launch(format!("failed to start {}: {err}", command.program))
    })?;

    info!(
        pid = child.id().unwrap_or(0),
        command = %command.display(),
        "bot process started"
    );

    let status = wait_absorbing_interrupts(&mut child).await?;
    let exit = BotExit::from_status(status);
    info!(status = %exit.report_line(), "bot process exited");
    Ok(exit)
}

async fn wait_absorbing_interrupts(child: &mut Child) -> Result<ExitStatus> {
    loop {
        tokio::select! {
            status = child.wait() => {
                return status
                    .map_err(|err| AppError::Launch(format!("failed to wait for bot: {err}")));
            }
            signal = tokio::signal::ctrl_c() => {
                if let Err(err) = signal {
                    warn!(%err, "ctrl-c handler unavailable; waiting for bot without it");
                    return child
                        .wait()
                        .await
                        .map_err(|err| AppError::Launch(format!("failed to wait for bot: {err}")));
                }
                info!("interrupt received; waiting for bot to exit");
            }
        }
    }
}
