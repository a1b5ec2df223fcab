// src/batch/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The batch driver talks to an `ExecutorBackend` instead of spawning
//! processes directly. This makes it easy to swap in a fake executor in
//! tests while keeping the production process handling here.
//!
//! - `ProcessBackend` is the default implementation used by `templerun`.
//!   It launches the external tool with an explicit argv via
//!   `tokio::process::Command` and awaits its exit.
//! - Tests can provide their own `ExecutorBackend` that, for example,
//!   records which invocations were requested and scripts their outcomes.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::batch::invocation::Invocation;
use crate::batch::InvocationOutcome;
use crate::errors::Result;

/// Trait abstracting how one invocation is executed.
///
/// Production code uses [`ProcessBackend`]; tests can provide their own
/// implementation that doesn't spawn real processes.
///
/// Implementations report launch problems as `InvocationOutcome::Failed`
/// rather than as errors: a pair that cannot run is a per-pair outcome, not
/// a reason to stop the batch.
pub trait ExecutorBackend: Send {
    /// Execute the invocation and resolve once it has finished.
    fn run_invocation(
        &mut self,
        invocation: &Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<InvocationOutcome>> + Send + '_>>;
}

/// Real executor backend used in production.
///
/// Stdout and stderr are inherited, so the tool's own output lands directly
/// after the printed invocation line. The child is awaited to completion;
/// there is no timeout and no parallelism.
pub struct ProcessBackend;

impl ProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutorBackend for ProcessBackend {
    fn run_invocation(
        &mut self,
        invocation: &Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<InvocationOutcome>> + Send + '_>> {
        // Clone what the future needs so it doesn't borrow the invocation.
        let program = invocation.program.clone();
        let args = invocation.args.clone();

        Box::pin(async move {
            let mut cmd = Command::new(&program);
            cmd.args(&args)
                .stdin(Stdio::null())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .kill_on_drop(true);

            let mut child = match cmd.spawn() {
                Ok(child) => child,
                Err(err) => {
                    warn!(program = %program, error = %err, "failed to launch external tool");
                    return Ok(InvocationOutcome::Failed(-1));
                }
            };

            let status = match child.wait().await {
                Ok(status) => status,
                Err(err) => {
                    warn!(program = %program, error = %err, "failed waiting for external tool");
                    return Ok(InvocationOutcome::Failed(-1));
                }
            };

            let code = status.code().unwrap_or(-1);
            let outcome = if status.success() {
                InvocationOutcome::Success
            } else {
                InvocationOutcome::Failed(code)
            };

            if status.success() {
                info!(program = %program, exit_code = code, "external tool exited");
            } else {
                // Kept at debug: per-pair failures surface only through the
                // tool's own output, never as driver-level messages.
                debug!(program = %program, exit_code = code, "external tool exited non-zero");
            }

            Ok(outcome)
        })
    }
}
