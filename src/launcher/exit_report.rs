//! How the bot process ended, and how that is reported.

use std::process::ExitStatus;

/// Termination status of the bot process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotExit {
    /// The process exited with this code.
    Code(i32),
    /// The process was terminated without an exit code (a signal on Unix).
    Signal,
}

impl BotExit {
    /// Classify an OS exit status.
    #[must_use]
    pub fn from_status(status: ExitStatus) -> Self {
        status.code().map_or(Self::Signal, Self::Code)
    }

    /// Exit code, if the process produced one.
    #[must_use]
    pub fn code(self) -> Option<i32> {
        match self {
            Self::Code(code) => Some(code),
            Self::Signal => None,
        }
    }

    /// Code the launcher exits with when propagation is enabled.
    #[must_use]
    pub fn launcher_exit_code(self) -> i32 {
        self.code().unwrap_or(1)
    }

    /// Console line announcing the result.
    #[must_use]
    pub fn report_line(self) -> String {
        match self {
            Self::Code(code) => format!("Bot exited with code {code}"),
            Self::Signal => "Bot terminated by signal".to_owned(),
        }
    }
}
