use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use templerun::batch::{ExecutorBackend, Invocation, InvocationOutcome};
use templerun::errors::Result;

/// A fake executor that:
/// - records the rendered line of every invocation it is asked to "run"
/// - reports a scripted outcome per call index (Success by default).
///
/// No process is ever spawned, so tests stay fast and hermetic.
pub struct FakeExecutor {
    executed: Arc<Mutex<Vec<String>>>,
    outcomes: HashMap<usize, InvocationOutcome>,
    calls: usize,
}

impl FakeExecutor {
    pub fn new(executed: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            executed,
            outcomes: HashMap::new(),
            calls: 0,
        }
    }

    /// Script the outcome for the call at `index` (zero-based, in execution
    /// order). Unscripted calls succeed.
    pub fn with_outcome(mut self, index: usize, outcome: InvocationOutcome) -> Self {
        self.outcomes.insert(index, outcome);
        self
    }
}

impl ExecutorBackend for FakeExecutor {
    fn run_invocation(
        &mut self,
        invocation: &Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<InvocationOutcome>> + Send + '_>> {
        let index = self.calls;
        self.calls += 1;

        let outcome = self
            .outcomes
            .get(&index)
            .copied()
            .unwrap_or(InvocationOutcome::Success);

        let executed = Arc::clone(&self.executed);
        let line = invocation.render();

        Box::pin(async move {
            {
                let mut guard = executed.lock().unwrap();
                guard.push(line);
            }
            Ok(outcome)
        })
    }
}
