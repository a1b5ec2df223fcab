// src/batch/mod.rs

//! Invocation construction and the batch execution driver.
//!
//! This module is responsible for turning (text, template) pairs into
//! command-line invocations of the external tool and running them one at a
//! time, in order.
//!
//! - [`invocation`] builds the explicit argv for one pair and renders the
//!   printed audit line.
//! - [`backend`] provides the `ExecutorBackend` trait and a concrete
//!   `ProcessBackend` used in production, which tests can replace with a
//!   fake implementation.
//! - [`driver`] owns the sequential batch loop.

pub mod backend;
pub mod driver;
pub mod invocation;

pub use backend::{ExecutorBackend, ProcessBackend};
pub use driver::{run_batch, BatchReport, InvocationFailure};
pub use invocation::Invocation;

/// Outcome of one external invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationOutcome {
    Success,
    Failed(i32),
}

impl InvocationOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, InvocationOutcome::Success)
    }
}
