// tests/batch_fake_executor.rs

mod common;
use crate::common::builders::{numbered_templates, numbered_texts, ConfigFileBuilder};
use crate::common::{init_tracing, FakeExecutor};

use std::sync::{Arc, Mutex};

use templerun::batch::{run_batch, InvocationOutcome};
use templerun::errors::TemplerunError;
use templerun::records::pair_records;

#[tokio::test]
async fn batch_runs_every_pair_in_order() {
    init_tracing();

    let cfg = ConfigFileBuilder::new().build();
    let templates = numbered_templates(3);
    let texts = numbered_texts(3);
    let pairs = pair_records(&templates, &texts);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut executor = FakeExecutor::new(executed.clone());

    let report = run_batch(&pairs, &cfg.tool, &mut executor).await.unwrap();

    assert_eq!(report.total, 3);
    assert!(report.all_succeeded());

    let lines = executed.lock().unwrap().clone();
    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        assert!(
            line.contains(&format!("-P \"p{i}\"")),
            "line {i} out of order: {line}"
        );
        assert!(line.contains(&format!("-I \"sample text {i}\"")));
    }
}

#[tokio::test]
async fn mid_batch_failure_does_not_halt_remaining_invocations() {
    init_tracing();

    let cfg = ConfigFileBuilder::new().build();
    let templates = numbered_templates(3);
    let texts = numbered_texts(3);
    let pairs = pair_records(&templates, &texts);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut executor =
        FakeExecutor::new(executed.clone()).with_outcome(1, InvocationOutcome::Failed(2));

    let report = run_batch(&pairs, &cfg.tool, &mut executor).await.unwrap();

    // All three invocations still happened, in order 0, 1, 2.
    let lines = executed.lock().unwrap().clone();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("-P \"p0\""));
    assert!(lines[1].contains("-P \"p1\""));
    assert!(lines[2].contains("-P \"p2\""));

    assert_eq!(report.total, 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(report.failures[0].code, 2);
}

#[tokio::test]
async fn launch_failure_is_just_another_failed_outcome() {
    init_tracing();

    let cfg = ConfigFileBuilder::new().build();
    let templates = numbered_templates(2);
    let texts = numbered_texts(2);
    let pairs = pair_records(&templates, &texts);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut executor =
        FakeExecutor::new(executed.clone()).with_outcome(0, InvocationOutcome::Failed(-1));

    let report = run_batch(&pairs, &cfg.tool, &mut executor).await.unwrap();

    assert_eq!(executed.lock().unwrap().len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].code, -1);
}

#[tokio::test]
async fn empty_pairing_executes_nothing() {
    init_tracing();

    let cfg = ConfigFileBuilder::new().build();
    let templates = numbered_templates(0);
    let texts = numbered_texts(5);
    let pairs = pair_records(&templates, &texts);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut executor = FakeExecutor::new(executed.clone());

    let report = run_batch(&pairs, &cfg.tool, &mut executor).await.unwrap();

    assert_eq!(report.total, 0);
    assert!(report.all_succeeded());
    assert!(executed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn strict_result_reports_failures_after_the_full_batch() {
    init_tracing();

    let cfg = ConfigFileBuilder::new().build();
    let templates = numbered_templates(4);
    let texts = numbered_texts(4);
    let pairs = pair_records(&templates, &texts);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut executor = FakeExecutor::new(executed.clone())
        .with_outcome(0, InvocationOutcome::Failed(1))
        .with_outcome(3, InvocationOutcome::Failed(7));

    let report = run_batch(&pairs, &cfg.tool, &mut executor).await.unwrap();

    // Everything ran despite two failures.
    assert_eq!(executed.lock().unwrap().len(), 4);

    let err = report.strict_result().unwrap_err();
    match err {
        TemplerunError::BatchFailed { failed, total } => {
            assert_eq!(failed, 2);
            assert_eq!(total, 4);
        }
        other => panic!("expected BatchFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn strict_result_is_ok_for_a_clean_batch() {
    init_tracing();

    let cfg = ConfigFileBuilder::new().build();
    let templates = numbered_templates(2);
    let texts = numbered_texts(2);
    let pairs = pair_records(&templates, &texts);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut executor = FakeExecutor::new(executed.clone());

    let report = run_batch(&pairs, &cfg.tool, &mut executor).await.unwrap();
    assert!(report.strict_result().is_ok());
}
