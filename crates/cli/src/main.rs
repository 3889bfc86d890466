//! Scanwrap CLI - run an external port scanner against one target
//! and save its output to a timestamped file

mod logging;
mod status;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use scanwrap_core::application::constants::{
    DEFAULT_BINARY, DEFAULT_OUTPUT_DIR, DEFAULT_TOOL_NAME, EXIT_FAILURE,
};
use scanwrap_core::application::{ScanConfig, ScanService, ScanVerdict};
use scanwrap_core::port::time_provider::SystemTimeProvider;
use scanwrap_core::AppError;
use scanwrap_infra_system::{detect_virtualenv, FileResultStore, SubprocessRunner, VersionProbe};

const INSTALL_URL: &str = "https://naabu.projectdiscovery.io/naabu/get-started/";

#[derive(Parser, Debug)]
#[command(name = "scanwrap")]
#[command(about = "Run naabu against a target and save its output", long_about = None)]
#[command(version)]
struct Cli {
    /// Host or address to scan (e.g. example.com)
    target: Option<String>,

    /// Scanner executable
    #[arg(long, env = "SCANWRAP_BINARY", default_value = DEFAULT_BINARY)]
    binary: String,

    /// Tool name used in result file names and messages
    #[arg(long, env = "SCANWRAP_TOOL_NAME", default_value = DEFAULT_TOOL_NAME)]
    tool_name: String,

    /// Directory receiving result files
    #[arg(long, env = "SCANWRAP_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: String,

    /// Scan timeout in seconds
    #[arg(long, env = "SCANWRAP_TIMEOUT_SECS", default_value = "300")]
    timeout_secs: u64,

    /// Dependency check timeout in seconds
    #[arg(long, env = "SCANWRAP_VERSION_TIMEOUT_SECS", default_value = "5")]
    version_timeout_secs: u64,

    /// Skip the virtual environment pre-flight check
    #[arg(long)]
    skip_venv_check: bool,

    /// Debug-level logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            binary: PathBuf::from(shellexpand::tilde(&self.binary).into_owned()),
            tool_name: self.tool_name.clone(),
            output_dir: PathBuf::from(shellexpand::tilde(&self.output_dir).into_owned()),
            scan_timeout: Duration::from_secs(self.timeout_secs),
            version_timeout: Duration::from_secs(self.version_timeout_secs),
        }
    }
}

fn build_service(config: ScanConfig) -> ScanService {
    let runner = Arc::new(SubprocessRunner::new());
    let probe = Arc::new(VersionProbe::new(
        runner.clone(),
        config.binary.clone(),
        config.version_timeout,
    ));
    let store = Arc::new(FileResultStore::new(
        config.output_dir.clone(),
        config.tool_name.clone(),
        Arc::new(SystemTimeProvider),
    ));

    ScanService::new(config, runner, probe, store)
}

async fn run(cli: Cli) -> Result<u8> {
    let tool = cli.tool_name.clone();

    let Some(raw_target) = cli.target.as_deref() else {
        status::problem("Error: Please provide a target to scan");
        println!("Usage: scanwrap example.com");
        return Ok(EXIT_FAILURE);
    };

    let service = build_service(cli.scan_config());
    let check_venv = !cli.skip_venv_check;

    let outcome = service
        .run(raw_target, |target, invocation| {
            if check_venv {
                status::virtualenv(detect_virtualenv(&std::env::current_dir()?));
            }
            status::progress(format!("Starting {} scan for: {}", tool, target));
            status::progress(format!("Executing: {}", invocation.display()));
            Ok(())
        })
        .await;

    let report = match outcome {
        Ok(report) => report,
        Err(AppError::Domain(e)) => {
            status::problem(format!("Error: {}", e));
            return Ok(EXIT_FAILURE);
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to run {} scan", tool)),
    };

    if report.verdict == ScanVerdict::DependencyMissing {
        status::problem(format!("Error: {}", report.verdict.describe(&tool)));
        if tool == DEFAULT_TOOL_NAME {
            println!("Please install {} first: {}", tool, INSTALL_URL);
        }
        return Ok(EXIT_FAILURE);
    }

    status::report(&report, &tool);

    let code = report.exit_code();
    if code == 0 {
        status::success(format!("{} scan completed successfully", tool));
    } else {
        status::problem(format!("{} scan completed with errors or warnings", tool));
    }

    Ok(code)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version are not failures
            let _ = e.print();
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::from(EXIT_FAILURE),
            };
        }
    };

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    tracing::debug!(version = scanwrap_core::VERSION, "scanwrap starting");

    let tool = cli.tool_name.clone();
    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            status::problem(format!("Error running {}: {:#}", tool, e));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
