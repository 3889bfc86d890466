// Scan Service - dependency gate, one scanner run, persistence of usable output

pub mod config;
pub mod verdict;

#[cfg(test)]
mod scan_test;

pub use config::ScanConfig;
pub use verdict::{ScanReport, ScanVerdict};

use crate::domain::{ExecutionResult, ExecutionStatus, Invocation, Target};
use crate::error::Result;
use crate::port::{DependencyProbe, ProcessRunner, ResultStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Scan Service
pub struct ScanService {
    config: ScanConfig,
    runner: Arc<dyn ProcessRunner>,
    probe: Arc<dyn DependencyProbe>,
    store: Arc<dyn ResultStore>,
}

impl ScanService {
    pub fn new(
        config: ScanConfig,
        runner: Arc<dyn ProcessRunner>,
        probe: Arc<dyn DependencyProbe>,
        store: Arc<dyn ResultStore>,
    ) -> Self {
        Self {
            config,
            runner,
            probe,
            store,
        }
    }

    /// Command line the scan will execute for `target`
    pub fn invocation(&self, target: &Target) -> Invocation {
        Invocation::scan(&self.config.binary, target)
    }

    /// Check the scanner binary before anything else runs
    pub async fn check_dependency(&self) -> bool {
        let available = self.probe.is_available().await;
        debug!(
            binary = %self.config.binary.display(),
            available,
            "Dependency check finished"
        );
        available
    }

    /// Full use case: validate target, dependency check, `before_scan`, scan
    ///
    /// A missing dependency short-circuits: neither `before_scan` nor the
    /// scanner runs. An error from `before_scan` aborts before spawning.
    ///
    /// # Errors
    /// - AppError::Domain if `raw_target` is not a valid target
    /// - AppError::Io from `before_scan` or from persisting output
    pub async fn run<F>(&self, raw_target: &str, before_scan: F) -> Result<ScanReport>
    where
        F: FnOnce(&Target, &Invocation) -> Result<()>,
    {
        let target = Target::parse(raw_target)?;

        if !self.check_dependency().await {
            return Ok(ScanReport::dependency_missing());
        }

        before_scan(&target, &self.invocation(&target))?;

        self.scan(&target).await
    }

    /// Run the scanner once and persist any usable output
    ///
    /// # Errors
    /// - AppError::Io if usable output exists but cannot be written
    pub async fn scan(&self, target: &Target) -> Result<ScanReport> {
        let invocation = self.invocation(target);

        info!(
            target = %target,
            command = %invocation.display(),
            timeout_secs = self.config.scan_timeout.as_secs(),
            "Starting scan"
        );

        let execution = self.runner.run(&invocation, self.config.scan_timeout).await;
        let verdict = ScanVerdict::from(&execution.status);

        self.log_execution(&execution);

        let saved_to = match &execution.output {
            Some(output) => Some(self.store.persist(output).await?),
            None => None,
        };

        info!(
            target = %target,
            verdict = ?verdict,
            saved_to = ?saved_to,
            "Scan finished"
        );

        Ok(ScanReport {
            verdict,
            execution: Some(execution),
            saved_to,
        })
    }

    fn log_execution(&self, execution: &ExecutionResult) {
        let tool = &self.config.tool_name;
        match &execution.status {
            ExecutionStatus::Success => {}
            ExecutionStatus::NonZeroExit(code) => warn!(
                tool = %tool,
                exit_code = code,
                stderr = %execution.stderr.trim_end(),
                "Scanner exited with non-zero status"
            ),
            ExecutionStatus::KilledBySignal(sig) => warn!(
                tool = %tool,
                signal = sig,
                partial_output = execution.has_output(),
                "Scanner terminated by signal"
            ),
            ExecutionStatus::TimedOut => warn!(
                tool = %tool,
                duration_ms = execution.duration.as_millis() as u64,
                "Scanner timed out"
            ),
            ExecutionStatus::NotFound | ExecutionStatus::OtherError(_) => warn!(
                tool = %tool,
                status = %execution.status,
                "Scanner could not be launched"
            ),
        }
    }
}
