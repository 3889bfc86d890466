// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Execution failures of the scanner are NOT errors: they are encoded in
/// `ExecutionStatus` / `ScanVerdict`. Only wiring and persistence problems
/// end up here.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
