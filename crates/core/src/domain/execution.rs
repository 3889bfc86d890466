// Execution Result - normalized outcome of one child process

use std::time::Duration;

/// How a child process ended (or failed to start)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// Exited with status zero
    Success,
    /// Terminated by a signal (raw signal number)
    KilledBySignal(i32),
    /// Exited voluntarily with a non-zero code
    NonZeroExit(i32),
    /// Wall-clock timeout elapsed; the child was killed
    TimedOut,
    /// Executable could not be located
    NotFound,
    /// Any other launch or wait failure, description preserved
    OtherError(String),
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionStatus::Success)
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionStatus::Success => write!(f, "SUCCESS"),
            ExecutionStatus::KilledBySignal(sig) => write!(f, "KILLED_BY_SIGNAL({})", sig),
            ExecutionStatus::NonZeroExit(code) => write!(f, "NON_ZERO_EXIT({})", code),
            ExecutionStatus::TimedOut => write!(f, "TIMED_OUT"),
            ExecutionStatus::NotFound => write!(f, "NOT_FOUND"),
            ExecutionStatus::OtherError(msg) => write!(f, "OTHER_ERROR({})", msg),
        }
    }
}

/// Result of one process invocation
///
/// `output` holds stdout only when it is usable data:
/// - `Success`: always present, even if empty
/// - `KilledBySignal` / `NonZeroExit`: present iff stdout is not blank
/// - `TimedOut` / `NotFound` / `OtherError`: never present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub output: Option<String>,
    pub stderr: String,
    pub duration: Duration,
}

impl ExecutionResult {
    /// Build a result for a process that actually ran to an exit
    pub fn completed(
        status: ExecutionStatus,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        let output = match status {
            ExecutionStatus::Success => Some(stdout),
            ExecutionStatus::KilledBySignal(_) | ExecutionStatus::NonZeroExit(_)
                if !stdout.trim().is_empty() =>
            {
                Some(stdout)
            }
            _ => None,
        };

        Self {
            status,
            output,
            stderr,
            duration,
        }
    }

    /// Build a result carrying no output (timeout, launch failure)
    pub fn without_output(status: ExecutionStatus, duration: Duration) -> Self {
        Self {
            status,
            output: None,
            stderr: String::new(),
            duration,
        }
    }

    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }
}
