// Process Runner Port
// Abstraction for running one external program with a bounded wait

use crate::domain::{ExecutionResult, Invocation};
use async_trait::async_trait;
use std::time::Duration;

/// Process Runner trait
///
/// Implementations:
/// - SubprocessRunner: spawns a real child process (infra-system)
/// - MockProcessRunner: canned results for tests
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the invocation and classify how it ended
    ///
    /// Never fails: timeouts, missing executables and launch errors are all
    /// encoded in `ExecutionResult::status`.
    ///
    /// # Arguments
    /// * `invocation` - Program and arguments
    /// * `timeout` - Wall-clock limit; the child is killed once it elapses
    async fn run(&self, invocation: &Invocation, timeout: Duration) -> ExecutionResult;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::ExecutionStatus;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Mock Process Runner for testing
    ///
    /// Replays queued results in order; once the queue is drained every call
    /// yields `OtherError`.
    pub struct MockProcessRunner {
        results: Arc<Mutex<VecDeque<ExecutionResult>>>,
        calls: Arc<Mutex<Vec<(Invocation, Duration)>>>,
    }
    impl MockProcessRunner {
        pub fn new(results: Vec<ExecutionResult>) -> Self {
            Self {
                results: Arc::new(Mutex::new(results.into())),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
        pub fn new_success(stdout: impl Into<String>) -> Self {
            Self::new(vec![ExecutionResult::completed(
                ExecutionStatus::Success,
                stdout.into(),
                String::new(),
                Duration::from_millis(10),
            )])
        }
        pub fn calls(&self) -> Vec<(Invocation, Duration)> {
            self.calls.lock().unwrap().clone()
        }
        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }
    #[async_trait]
    impl ProcessRunner for MockProcessRunner {
        async fn run(&self, invocation: &Invocation, timeout: Duration) -> ExecutionResult {
            self.calls
                .lock()
                .unwrap()
                .push((invocation.clone(), timeout));

            self.results.lock().unwrap().pop_front().unwrap_or_else(|| {
                ExecutionResult::without_output(
                    ExecutionStatus::OtherError("no canned result".to_string()),
                    Duration::ZERO,
                )
            })
        }
    }
}
