//! Unit tests for the scan use case (mock ports only)

use super::*;
use crate::application::constants::SCAN_TIMEOUT;
use crate::port::dependency_probe::mocks::MockDependencyProbe;
use crate::port::process_runner::mocks::MockProcessRunner;
use crate::port::result_store::mocks::MockResultStore;
use std::time::Duration;

fn service(
    runner: Arc<MockProcessRunner>,
    probe: Arc<MockDependencyProbe>,
    store: Arc<MockResultStore>,
) -> ScanService {
    ScanService::new(ScanConfig::default(), runner, probe, store)
}

fn completed(status: ExecutionStatus, stdout: &str) -> ExecutionResult {
    ExecutionResult::completed(
        status,
        stdout.to_string(),
        "scanner stderr".to_string(),
        Duration::from_millis(20),
    )
}

fn target() -> Target {
    Target::parse("example.com").unwrap()
}

fn no_hook(_: &Target, _: &Invocation) -> Result<()> {
    Ok(())
}

#[tokio::test]
async fn test_success_persists_output() {
    let runner = Arc::new(MockProcessRunner::new_success("example.com:80\n"));
    let probe = Arc::new(MockDependencyProbe::new(true));
    let store = Arc::new(MockResultStore::new());

    let report = service(runner.clone(), probe, store.clone())
        .run("example.com", no_hook)
        .await
        .unwrap();

    assert_eq!(report.verdict, ScanVerdict::Success);
    assert_eq!(report.exit_code(), 0);
    assert!(report.saved_to.is_some());
    assert_eq!(store.saved(), vec!["example.com:80\n".to_string()]);

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0.args, vec!["-host", "example.com", "-silent"]);
    assert_eq!(calls[0].1, SCAN_TIMEOUT);
}

#[tokio::test]
async fn test_dependency_missing_skips_scan() {
    let runner = Arc::new(MockProcessRunner::new_success("unused"));
    let probe = Arc::new(MockDependencyProbe::new(false));
    let store = Arc::new(MockResultStore::new());

    let report = service(runner.clone(), probe.clone(), store.clone())
        .run("example.com", no_hook)
        .await
        .unwrap();

    assert_eq!(report.verdict, ScanVerdict::DependencyMissing);
    assert_eq!(report.exit_code(), 1);
    assert!(report.execution.is_none());
    assert_eq!(probe.call_count(), 1);
    assert_eq!(runner.call_count(), 0);
    assert!(store.saved().is_empty());
}

#[tokio::test]
async fn test_signal_killed_partial_output_is_saved_but_fails() {
    let runner = Arc::new(MockProcessRunner::new(vec![completed(
        ExecutionStatus::KilledBySignal(9),
        "partial",
    )]));
    let probe = Arc::new(MockDependencyProbe::new(true));
    let store = Arc::new(MockResultStore::new());

    let report = service(runner, probe, store.clone())
        .run("example.com", no_hook)
        .await
        .unwrap();

    assert_eq!(report.verdict, ScanVerdict::SignalKilled(9));
    assert!(report.saved_to.is_some());
    assert_eq!(store.saved(), vec!["partial".to_string()]);
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_non_zero_exit_without_output_saves_nothing() {
    let runner = Arc::new(MockProcessRunner::new(vec![completed(
        ExecutionStatus::NonZeroExit(2),
        "",
    )]));
    let probe = Arc::new(MockDependencyProbe::new(true));
    let store = Arc::new(MockResultStore::new());

    let report = service(runner, probe, store.clone())
        .run("example.com", no_hook)
        .await
        .unwrap();

    assert_eq!(report.verdict, ScanVerdict::NonZeroExit(2));
    assert!(report.saved_to.is_none());
    assert!(store.saved().is_empty());
}

#[tokio::test]
async fn test_timeout_saves_nothing() {
    let runner = Arc::new(MockProcessRunner::new(vec![
        ExecutionResult::without_output(ExecutionStatus::TimedOut, SCAN_TIMEOUT),
    ]));
    let probe = Arc::new(MockDependencyProbe::new(true));
    let store = Arc::new(MockResultStore::new());

    let report = service(runner, probe, store.clone())
        .run("example.com", no_hook)
        .await
        .unwrap();

    assert_eq!(report.verdict, ScanVerdict::Timeout);
    assert!(store.saved().is_empty());
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let runner = Arc::new(MockProcessRunner::new_success("data"));
    let probe = Arc::new(MockDependencyProbe::new(true));
    let store = Arc::new(MockResultStore::new_failing());

    let result = service(runner, probe, store).run("example.com", no_hook).await;

    assert!(matches!(result, Err(crate::AppError::Io(_))));
}

#[tokio::test]
async fn test_invocation_uses_configured_binary() {
    let config = ScanConfig {
        binary: "/opt/naabu".into(),
        ..ScanConfig::default()
    };
    let service = ScanService::new(
        config,
        Arc::new(MockProcessRunner::new(vec![])),
        Arc::new(MockDependencyProbe::new(true)),
        Arc::new(MockResultStore::new()),
    );

    assert_eq!(
        service.invocation(&target()).display(),
        "/opt/naabu -host example.com -silent"
    );
}

#[tokio::test]
async fn test_invalid_target_is_domain_error() {
    let runner = Arc::new(MockProcessRunner::new_success("unused"));
    let probe = Arc::new(MockDependencyProbe::new(true));
    let store = Arc::new(MockResultStore::new());

    let result = service(runner.clone(), probe.clone(), store)
        .run("-silent", no_hook)
        .await;

    assert!(matches!(
        result,
        Err(crate::AppError::Domain(crate::domain::DomainError::FlagLikeTarget(_)))
    ));
    assert_eq!(probe.call_count(), 0);
    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn test_before_scan_sees_target_and_invocation() {
    let runner = Arc::new(MockProcessRunner::new_success("data"));
    let probe = Arc::new(MockDependencyProbe::new(true));
    let store = Arc::new(MockResultStore::new());
    let mut seen = None;

    let report = service(runner.clone(), probe, store)
        .run(" example.com ", |target, invocation| {
            seen = Some((target.to_string(), invocation.display()));
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(report.verdict, ScanVerdict::Success);
    assert_eq!(
        seen,
        Some((
            "example.com".to_string(),
            "/go/bin/naabu -host example.com -silent".to_string()
        ))
    );
    assert_eq!(runner.call_count(), 1);
}

#[tokio::test]
async fn test_before_scan_skipped_when_dependency_missing() {
    let runner = Arc::new(MockProcessRunner::new(vec![]));
    let probe = Arc::new(MockDependencyProbe::new(false));
    let store = Arc::new(MockResultStore::new());
    let mut called = false;

    let report = service(runner, probe, store)
        .run("example.com", |_, _| {
            called = true;
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(report.verdict, ScanVerdict::DependencyMissing);
    assert!(!called);
}

#[tokio::test]
async fn test_before_scan_error_aborts_before_spawn() {
    let runner = Arc::new(MockProcessRunner::new_success("unused"));
    let probe = Arc::new(MockDependencyProbe::new(true));
    let store = Arc::new(MockResultStore::new());

    let result = service(runner.clone(), probe, store.clone())
        .run("example.com", |_, _| {
            Err(crate::AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "working directory removed",
            )))
        })
        .await;

    assert!(matches!(result, Err(crate::AppError::Io(_))));
    assert_eq!(runner.call_count(), 0);
    assert!(store.saved().is_empty());
}
