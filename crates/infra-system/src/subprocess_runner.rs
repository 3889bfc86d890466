// Subprocess runner implementation
// reason: tokio for async process management with a wall-clock timeout
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use scanwrap_core::domain::{ExecutionResult, ExecutionStatus, Invocation};
use scanwrap_core::port::ProcessRunner;

/// Subprocess runner
/// Spawns one child per call, captures stdout/stderr, kills it on timeout
#[derive(Debug, Default, Clone)]
pub struct SubprocessRunner;

impl SubprocessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Spawn the child with piped output and no stdin
    fn spawn(invocation: &Invocation) -> std::io::Result<Child> {
        Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
    }

    /// Map a launch failure to NotFound / OtherError
    fn launch_failure(invocation: &Invocation, err: std::io::Error) -> ExecutionStatus {
        match err.kind() {
            ErrorKind::NotFound => {
                warn!(program = %invocation.program.display(), "Executable not found");
                ExecutionStatus::NotFound
            }
            _ => {
                warn!(
                    program = %invocation.program.display(),
                    error = %err,
                    "Failed to launch executable"
                );
                ExecutionStatus::OtherError(err.to_string())
            }
        }
    }

    /// Kill a timed-out child and reap it
    async fn kill_child(child: &mut Child) {
        let pid = child.id();
        match child.kill().await {
            Ok(()) => info!(pid = ?pid, "Timed-out process killed"),
            // Already exited between the timeout and the kill
            Err(e) => debug!(pid = ?pid, error = %e, "Kill after timeout failed"),
        }
    }

    /// Wait for exit while draining both pipes, bounded by `limit`
    ///
    /// Returns None when the limit elapsed (child is killed before returning).
    /// The limit covers reading both pipes to EOF, so a child that exits
    /// cleanly but leaves a background process holding stdout/stderr open is
    /// reported as timed out and its output is discarded.
    async fn wait_bounded(
        child: &mut Child,
        limit: Duration,
    ) -> Option<(Vec<u8>, Vec<u8>, std::io::Result<ExitStatus>)> {
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let waited = timeout(limit, async {
            tokio::join!(read_pipe(stdout), read_pipe(stderr), child.wait())
        })
        .await;

        match waited {
            Ok(collected) => Some(collected),
            Err(_) => {
                Self::kill_child(child).await;
                None
            }
        }
    }
}

/// Read a pipe to EOF; read errors yield whatever arrived so far
async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        if let Err(e) = pipe.read_to_end(&mut buf).await {
            debug!(error = %e, read_bytes = buf.len(), "Pipe read interrupted");
        }
    }
    buf
}

/// Classify an exit status (signal termination checked on unix only)
fn classify(status: ExitStatus) -> ExecutionStatus {
    match status.code() {
        Some(0) => ExecutionStatus::Success,
        Some(code) => ExecutionStatus::NonZeroExit(code),
        None => {
            #[cfg(unix)]
            {
                use std::os::unix::process::ExitStatusExt;
                if let Some(sig) = status.signal() {
                    return ExecutionStatus::KilledBySignal(sig);
                }
            }
            ExecutionStatus::OtherError(format!("process ended without exit code: {}", status))
        }
    }
}

/// Human-readable signal name for logs
#[cfg(unix)]
fn signal_name(sig: i32) -> String {
    nix::sys::signal::Signal::try_from(sig)
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|_| format!("signal {}", sig))
}

#[cfg(not(unix))]
fn signal_name(sig: i32) -> String {
    format!("signal {}", sig)
}

#[async_trait]
impl ProcessRunner for SubprocessRunner {
    async fn run(&self, invocation: &Invocation, limit: Duration) -> ExecutionResult {
        let start = Instant::now();

        info!(
            command = %invocation.display(),
            timeout_ms = limit.as_millis() as u64,
            "Starting subprocess"
        );

        let mut child = match Self::spawn(invocation) {
            Ok(child) => child,
            Err(e) => {
                let status = Self::launch_failure(invocation, e);
                return ExecutionResult::without_output(status, start.elapsed());
            }
        };

        let Some((stdout, stderr, exit)) = Self::wait_bounded(&mut child, limit).await else {
            warn!(
                command = %invocation.display(),
                timeout_ms = limit.as_millis() as u64,
                "Subprocess timed out"
            );
            return ExecutionResult::without_output(ExecutionStatus::TimedOut, start.elapsed());
        };

        let duration = start.elapsed();
        let status = match exit {
            Ok(exit) => classify(exit),
            Err(e) => {
                warn!(error = %e, "Waiting for subprocess failed");
                return ExecutionResult::without_output(
                    ExecutionStatus::OtherError(e.to_string()),
                    duration,
                );
            }
        };

        if let ExecutionStatus::KilledBySignal(sig) = status {
            debug!(
                command = %invocation.display(),
                signal = %signal_name(sig),
                "Subprocess terminated by signal"
            );
        }

        let result = ExecutionResult::completed(
            status,
            String::from_utf8_lossy(&stdout).into_owned(),
            String::from_utf8_lossy(&stderr).into_owned(),
            duration,
        );

        info!(
            command = %invocation.display(),
            duration_ms = duration.as_millis() as u64,
            status = %result.status,
            stdout_bytes = stdout.len(),
            "Subprocess completed"
        );

        result
    }
}
