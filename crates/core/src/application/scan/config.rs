// Scan configuration (resolved by the CLI from flags and environment)

use std::path::PathBuf;
use std::time::Duration;

use crate::application::constants::{
    DEFAULT_BINARY, DEFAULT_OUTPUT_DIR, DEFAULT_TOOL_NAME, SCAN_TIMEOUT, VERSION_CHECK_TIMEOUT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Scanner executable
    pub binary: PathBuf,
    /// Name used in result file names and messages
    pub tool_name: String,
    /// Directory receiving `<timestamp>-<tool>.txt` files
    pub output_dir: PathBuf,
    pub scan_timeout: Duration,
    pub version_timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            scan_timeout: SCAN_TIMEOUT,
            version_timeout: VERSION_CHECK_TIMEOUT,
        }
    }
}
