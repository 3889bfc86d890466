// Result Store Port
// Persists captured scanner output

use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Result store trait
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persist the output verbatim and return where it landed
    ///
    /// # Errors
    /// - AppError::Io if the destination cannot be created or written
    async fn persist(&self, output: &str) -> Result<PathBuf>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::{Arc, Mutex};

    /// In-memory ResultStore for testing
    pub struct MockResultStore {
        saved: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }
    impl MockResultStore {
        pub fn new() -> Self {
            Self {
                saved: Arc::new(Mutex::new(Vec::new())),
                fail: false,
            }
        }
        /// Store whose every write fails with an IO error
        pub fn new_failing() -> Self {
            Self {
                saved: Arc::new(Mutex::new(Vec::new())),
                fail: true,
            }
        }
        pub fn saved(&self) -> Vec<String> {
            self.saved.lock().unwrap().clone()
        }
    }
    impl Default for MockResultStore {
        fn default() -> Self {
            Self::new()
        }
    }
    #[async_trait]
    impl ResultStore for MockResultStore {
        async fn persist(&self, output: &str) -> Result<PathBuf> {
            if self.fail {
                return Err(AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "mock store is read-only",
                )));
            }
            let mut saved = self.saved.lock().unwrap();
            saved.push(output.to_string());
            Ok(PathBuf::from(format!("mock/{}.txt", saved.len())))
        }
    }
}
