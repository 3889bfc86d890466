// Virtual environment pre-flight probe
// Informational only: never changes how the scanner is run
use std::path::Path;
use tracing::debug;

/// Directory name looked up relative to the working directory
pub const VENV_DIR: &str = "venv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualEnvStatus {
    Absent,
    /// `python` is true when `venv/bin/python3` exists
    Present { python: bool },
}

/// Detect a `venv/` directory under `root`
pub fn detect_virtualenv(root: &Path) -> VirtualEnvStatus {
    let venv = root.join(VENV_DIR);
    if !venv.is_dir() {
        return VirtualEnvStatus::Absent;
    }

    let python = venv.join("bin").join("python3").exists();
    debug!(path = %venv.display(), python, "Virtual environment found");

    VirtualEnvStatus::Present { python }
}
