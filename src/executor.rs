//! Run execution
//!
//! Walks a selection in catalog order and invokes each step inside an
//! isolating boundary: a panic escaping a step body is converted into a
//! failure outcome tagged with the step name, and the walk continues. One
//! broken installer must never prevent unrelated installers from running.
//! An operator interrupt is deliberately not caught here; it aborts the
//! whole run instead of leaving the process in an undefined state.

use crate::registry::Registry;
use crate::select::Selection;
use crate::system::SetupContext;
use crate::types::Outcome;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

/// The accumulated results of one run. Append-only, owned by the executor
/// for the duration of the run, then handed to the reporter and discarded.
#[derive(Debug, Default)]
pub struct RunReport {
    pub successes: Vec<String>,
    pub failures: Vec<String>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success(msg) => self.successes.push(msg),
            Outcome::Failure(msg) => self.failures.push(msg),
        }
    }

    /// Whether every executed step succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Execute the selected steps in order and collect their outcomes.
///
/// No step result influences whether a later step runs; catalog order is
/// the only ordering contract.
pub fn execute(registry: &Registry, selection: &Selection, ctx: &SetupContext) -> RunReport {
    let mut report = RunReport::new();

    for &index in selection.indices() {
        let Some(step) = registry.get(index) else {
            continue;
        };

        info!("running step: {}", step.name);
        println!("\n==> {}", step.name);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (step.run)(ctx)))
            .unwrap_or_else(|payload| {
                error!("step {} crashed", step.name);
                Outcome::failure(format!(
                    "{}: unexpected crash: {}",
                    step.name,
                    panic_message(payload.as_ref())
                ))
            });

        match &outcome {
            Outcome::Success(msg) => println!("✓ {}", msg),
            Outcome::Failure(msg) => println!("✗ {}", msg),
        }
        report.record(outcome);
    }

    report
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
