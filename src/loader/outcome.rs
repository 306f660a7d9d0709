//! How a load command ended.

use serde::Serialize;
use std::fmt;
use std::io;
use std::process::ExitStatus;

/// Result of one launch of the load command.
///
/// The [`Display`](fmt::Display) form is the line reported on stderr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The child ran to completion and returned `code`.
    Exited { code: i32 },
    /// The child was killed by `signal`.
    Signaled { signal: i32 },
    /// The child could not be started.
    LaunchFailed { message: String },
}

impl RunOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Signaled { signal };
            }
        }

        match status.code() {
            Some(code) => Self::Exited { code },
            None => Self::Signaled { signal: 0 },
        }
    }

    pub fn launch_failed(error: &io::Error) -> Self {
        Self::LaunchFailed {
            message: error.to_string(),
        }
    }

    /// True only for a normal exit with code 0.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Exited { code: 0 })
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited { code } => write!(f, "Child returned {}", code),
            Self::Signaled { signal } => write!(f, "Child was terminated by signal {}", signal),
            Self::LaunchFailed { message } => write!(f, "Execution failed: {}", message),
        }
    }
}
