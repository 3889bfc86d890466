// Scan Verdict & Report - what the CLI turns into status lines and exit codes

use std::path::PathBuf;

use crate::application::constants::{EXIT_FAILURE, EXIT_SUCCESS, SIGKILL};
use crate::domain::{ExecutionResult, ExecutionStatus};

/// Final classification of a scan run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanVerdict {
    Success,
    DependencyMissing,
    LaunchNotFound,
    LaunchOtherError(String),
    Timeout,
    SignalKilled(i32),
    NonZeroExit(i32),
}

impl ScanVerdict {
    /// Degraded verdicts may still carry usable partial output
    pub fn is_degraded(&self) -> bool {
        matches!(self, ScanVerdict::SignalKilled(_) | ScanVerdict::NonZeroExit(_))
    }

    /// Plain-language description for the status line
    pub fn describe(&self, tool: &str) -> String {
        match self {
            ScanVerdict::Success => format!("{} scan completed successfully", tool),
            ScanVerdict::DependencyMissing => {
                format!("{} is not installed or not in PATH", tool)
            }
            ScanVerdict::LaunchNotFound => format!(
                "{} command not found. Please ensure {} is installed and in PATH",
                tool, tool
            ),
            ScanVerdict::LaunchOtherError(msg) => {
                format!("Unexpected error running {}: {}", tool, msg)
            }
            ScanVerdict::Timeout => format!("{} scan timed out", tool),
            ScanVerdict::SignalKilled(SIGKILL) => format!(
                "{} process was killed by SIGKILL (likely due to memory/resource limits)",
                tool
            ),
            ScanVerdict::SignalKilled(sig) => {
                format!("{} process was killed by signal {}", tool, sig)
            }
            ScanVerdict::NonZeroExit(code) => format!("{} exited with code {}", tool, code),
        }
    }
}

impl From<&ExecutionStatus> for ScanVerdict {
    fn from(status: &ExecutionStatus) -> Self {
        match status {
            ExecutionStatus::Success => ScanVerdict::Success,
            ExecutionStatus::KilledBySignal(sig) => ScanVerdict::SignalKilled(*sig),
            ExecutionStatus::NonZeroExit(code) => ScanVerdict::NonZeroExit(*code),
            ExecutionStatus::TimedOut => ScanVerdict::Timeout,
            ExecutionStatus::NotFound => ScanVerdict::LaunchNotFound,
            ExecutionStatus::OtherError(msg) => ScanVerdict::LaunchOtherError(msg.clone()),
        }
    }
}

/// Everything the caller needs after a scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub verdict: ScanVerdict,
    /// None when the scanner never ran (dependency missing)
    pub execution: Option<ExecutionResult>,
    /// Where usable output was persisted, if any
    pub saved_to: Option<PathBuf>,
}

impl ScanReport {
    pub fn dependency_missing() -> Self {
        Self {
            verdict: ScanVerdict::DependencyMissing,
            execution: None,
            saved_to: None,
        }
    }

    /// 0 only for a clean run whose output was saved, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        match (&self.verdict, &self.saved_to) {
            (ScanVerdict::Success, Some(_)) => EXIT_SUCCESS,
            _ => EXIT_FAILURE,
        }
    }
}
