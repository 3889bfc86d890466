// Invocation - program + argument list for one child process

use std::path::{Path, PathBuf};

use super::target::Target;

/// A fully built command line, ready to hand to a `ProcessRunner`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Scan template: `<binary> -host <target> -silent`
    pub fn scan(binary: &Path, target: &Target) -> Self {
        Self::new(
            binary,
            vec![
                "-host".to_string(),
                target.as_str().to_string(),
                "-silent".to_string(),
            ],
        )
    }

    /// Dependency check template: `<binary> -version`
    pub fn version(binary: &Path) -> Self {
        Self::new(binary, vec!["-version".to_string()])
    }

    /// Space-joined command line for status output
    pub fn display(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
