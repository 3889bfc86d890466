// Scan constants (no magic values)
use std::time::Duration;

/// Default scanner binary location
pub const DEFAULT_BINARY: &str = "/go/bin/naabu";

/// Default tool name, used in file names and status lines
pub const DEFAULT_TOOL_NAME: &str = "naabu";

/// Default directory receiving result files
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Wall-clock limit for the scan itself (5 minutes)
pub const SCAN_TIMEOUT: Duration = Duration::from_secs(300);

/// Wall-clock limit for the `-version` dependency check (5 seconds)
pub const VERSION_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Signal number of SIGKILL, reported when the scanner is likely OOM-killed
pub const SIGKILL: i32 = 9;

/// Exit code for a fully successful scan
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for every other outcome
pub const EXIT_FAILURE: u8 = 1;
