// src/batch/driver.rs

//! The sequential batch loop.
//!
//! For each (text, template) pair, in pairing order:
//! 1. build the invocation,
//! 2. print its rendered line to stdout,
//! 3. execute it via the backend and await completion.
//!
//! A non-zero exit never halts the batch; outcomes are collected into a
//! [`BatchReport`] so the caller can decide what (if anything) to do with
//! the failures after the full batch has run.

use tracing::{debug, info};

use crate::batch::backend::ExecutorBackend;
use crate::batch::invocation::Invocation;
use crate::config::ToolSection;
use crate::errors::Result;
use crate::records::{TemplateRecord, TextRecord};

/// One non-zero outcome within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationFailure {
    /// Zero-based pairing index of the failed invocation.
    pub index: usize,
    /// Exit code reported for it (-1 when the process could not be
    /// launched or produced no code).
    pub code: i32,
}

/// Summary of a completed batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Number of pairs executed.
    pub total: usize,
    /// Failures in execution order; empty when every invocation succeeded.
    pub failures: Vec<InvocationFailure>,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Strict-mode view of the report: an error when anything failed.
    ///
    /// The batch has already run to completion by the time this is called;
    /// strict mode only changes the final exit status.
    pub fn strict_result(&self) -> Result<()> {
        if self.all_succeeded() {
            Ok(())
        } else {
            Err(crate::errors::TemplerunError::BatchFailed {
                failed: self.failures.len(),
                total: self.total,
            })
        }
    }
}

/// Run the whole batch: one invocation per pair, strictly in order, each
/// awaited to completion before the next begins.
///
/// The printed line always precedes its execution, so stdout interleaves as
/// `line 0, tool output 0, line 1, tool output 1, ...`. An empty pairing
/// produces an empty report and prints nothing.
pub async fn run_batch<B: ExecutorBackend>(
    pairs: &[(&TextRecord, &TemplateRecord)],
    tool: &ToolSection,
    backend: &mut B,
) -> Result<BatchReport> {
    info!(pairs = pairs.len(), "starting batch run");

    let mut report = BatchReport {
        total: pairs.len(),
        failures: Vec::new(),
    };

    for (index, (text, template)) in pairs.iter().copied().enumerate() {
        let invocation = Invocation::build(tool, text, template);

        // The printed line is the audit trail; it must appear before any
        // output from the execution itself.
        println!("{}", invocation.render());

        let outcome = backend.run_invocation(&invocation).await?;
        if let crate::batch::InvocationOutcome::Failed(code) = outcome {
            debug!(index, code, "invocation exited non-zero; continuing batch");
            report.failures.push(InvocationFailure { index, code });
        }
    }

    info!(
        total = report.total,
        failed = report.failures.len(),
        "batch run finished"
    );

    Ok(report)
}
