// Dependency probe implementation
// Runs `<binary> -version` through the same ProcessRunner as the scan
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use scanwrap_core::domain::Invocation;
use scanwrap_core::port::{DependencyProbe, ProcessRunner};

/// Version-query probe
///
/// The binary counts as available only if the version query exits 0 within
/// the timeout. Non-zero exit, signal, timeout or missing file: unavailable.
pub struct VersionProbe {
    runner: Arc<dyn ProcessRunner>,
    binary: PathBuf,
    timeout: Duration,
}

impl VersionProbe {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        binary: impl Into<PathBuf>,
        timeout: Duration,
    ) -> Self {
        Self {
            runner,
            binary: binary.into(),
            timeout,
        }
    }
}

#[async_trait]
impl DependencyProbe for VersionProbe {
    async fn is_available(&self) -> bool {
        let result = self.runner.run(&Invocation::version(&self.binary), self.timeout).await;

        debug!(
            binary = %self.binary.display(),
            status = %result.status,
            "Version probe finished"
        );

        result.status.is_success()
    }
}
