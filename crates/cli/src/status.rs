//! Status lines printed to the user (`[*]` progress, `[+]` success, `[!]` problems)

use colored::Colorize;
use scanwrap_core::application::{ScanReport, ScanVerdict};
use scanwrap_infra_system::VirtualEnvStatus;

pub fn progress(msg: impl AsRef<str>) {
    println!("{} {}", "[*]".cyan().bold(), msg.as_ref());
}

pub fn success(msg: impl AsRef<str>) {
    println!("{} {}", "[+]".green().bold(), msg.as_ref());
}

pub fn problem(msg: impl AsRef<str>) {
    println!("{} {}", "[!]".red().bold(), msg.as_ref());
}

pub fn virtualenv(status: VirtualEnvStatus) {
    match status {
        VirtualEnvStatus::Absent => {}
        VirtualEnvStatus::Present { python: true } => {
            progress("Virtual environment found");
            progress("Using virtual environment Python");
        }
        VirtualEnvStatus::Present { python: false } => {
            progress("Virtual environment found");
            progress("Virtual environment found but Python not detected");
        }
    }
}

/// One line per classification, then the saved path (or its absence)
pub fn report(report: &ScanReport, tool: &str) {
    match &report.verdict {
        ScanVerdict::Success => {}
        ScanVerdict::SignalKilled(_) => {
            problem(format!("Warning: {}", report.verdict.describe(tool)))
        }
        verdict => problem(verdict.describe(tool)),
    }

    if let (ScanVerdict::NonZeroExit(_), Some(execution)) = (&report.verdict, &report.execution) {
        if !execution.stderr.trim().is_empty() {
            println!("{} error output:", tool);
            println!("{}", execution.stderr.trim_end());
        }
    }

    match &report.saved_to {
        Some(path) => {
            progress(format!("{} results saved as {}", tool, path.display()));
            if report.verdict.is_degraded() {
                problem("Saved results may be incomplete");
            }
        }
        None => problem(format!("{} failed or returned no output", tool)),
    }
}
