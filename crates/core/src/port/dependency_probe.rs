// Dependency Probe Port
// Gates the scan on the scanner binary actually being usable

use async_trait::async_trait;

/// Dependency probe trait
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// true if the external binary answered its availability check
    async fn is_available(&self) -> bool;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock DependencyProbe for testing
    pub struct MockDependencyProbe {
        available: bool,
        call_count: AtomicUsize,
    }
    impl MockDependencyProbe {
        pub fn new(available: bool) -> Self {
            Self {
                available,
                call_count: AtomicUsize::new(0),
            }
        }
        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }
    #[async_trait]
    impl DependencyProbe for MockDependencyProbe {
        async fn is_available(&self) -> bool {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.available
        }
    }
}
