// Application Layer - Use Cases

pub mod constants;
pub mod scan;

// Re-exports
pub use scan::{ScanConfig, ScanReport, ScanService, ScanVerdict};
