// Domain Layer - Pure values flowing through a scan

pub mod error;
pub mod execution;
pub mod invocation;
pub mod target;

// Re-exports
pub use error::DomainError;
pub use execution::{ExecutionResult, ExecutionStatus};
pub use invocation::Invocation;
pub use target::Target;
