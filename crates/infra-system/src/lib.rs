// Scanwrap Infrastructure - System Adapters
// Implements: ProcessRunner, DependencyProbe, ResultStore

pub mod file_store;
pub mod subprocess_runner;
pub mod venv_probe;
pub mod version_probe;

pub use file_store::FileResultStore;
pub use subprocess_runner::SubprocessRunner;
pub use venv_probe::{detect_virtualenv, VirtualEnvStatus};
pub use version_probe::VersionProbe;
