// Port Layer - Interfaces for external dependencies

pub mod dependency_probe;
pub mod process_runner;
pub mod result_store;
pub mod time_provider; // For deterministic file names

// Re-exports
pub use dependency_probe::DependencyProbe;
pub use process_runner::ProcessRunner;
pub use result_store::ResultStore;
pub use time_provider::TimeProvider;
