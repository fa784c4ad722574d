//! Fallback chains for installers with multiple delivery mechanisms
//!
//! Several tools can be delivered more than one way (a Homebrew cask, an
//! official curl installer, a manual PATH entry). A chain runs the
//! alternatives strictly in order and stops at the first success. Failed
//! attempts are not undone; every attempt is expected to check before it
//! writes so a half-applied predecessor cannot break it.

use crate::types::Outcome;
use tracing::{info, warn};

/// One alternative delivery mechanism for a capability.
pub struct Attempt<'a> {
    pub description: &'static str,
    run: Box<dyn FnOnce() -> Outcome + 'a>,
}

impl<'a> Attempt<'a> {
    pub fn new(description: &'static str, run: impl FnOnce() -> Outcome + 'a) -> Self {
        Self {
            description,
            run: Box::new(run),
        }
    }
}

/// Run `attempts` in order, returning the first success.
///
/// When every attempt fails, the final `Failure` carries the *last*
/// failure's reason; earlier failures are logged but kept out of the
/// report so the summary stays readable.
pub fn run_chain(capability: &str, attempts: Vec<Attempt<'_>>) -> Outcome {
    let total = attempts.len();
    let mut last_failure: Option<(&'static str, String)> = None;

    for (n, attempt) in attempts.into_iter().enumerate() {
        info!(
            "{}: attempt {}/{}: {}",
            capability,
            n + 1,
            total,
            attempt.description
        );
        match (attempt.run)() {
            Outcome::Success(msg) => return Outcome::Success(msg),
            Outcome::Failure(reason) => {
                warn!(
                    "{}: {} failed: {}",
                    capability, attempt.description, reason
                );
                last_failure = Some((attempt.description, reason));
            }
        }
    }

    match last_failure {
        Some((description, reason)) => Outcome::failure(format!(
            "{}: all {} install methods failed; last ({}): {}",
            capability, total, description, reason
        )),
        None => Outcome::failure(format!("{}: no install method available", capability)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_chain_stops_at_first_success() {
        let calls = Cell::new(0u32);
        let outcome = run_chain(
            "Claude Code",
            vec![
                Attempt::new("Homebrew cask", || {
                    calls.set(calls.get() + 1);
                    Outcome::failure("cask not found")
                }),
                Attempt::new("official installer", || {
                    calls.set(calls.get() + 1);
                    Outcome::success("installed via official installer")
                }),
                Attempt::new("manual PATH entry", || {
                    calls.set(calls.get() + 1);
                    Outcome::success("should never run")
                }),
            ],
        );

        assert_eq!(calls.get(), 2);
        assert_eq!(outcome, Outcome::success("installed via official installer"));
    }

    #[test]
    fn test_chain_aggregates_last_failure() {
        let calls = Cell::new(0u32);
        let outcome = run_chain(
            "Claude Code",
            vec![
                Attempt::new("Homebrew cask", || {
                    calls.set(calls.get() + 1);
                    Outcome::failure("cask not found")
                }),
                Attempt::new("official installer", || {
                    calls.set(calls.get() + 1);
                    Outcome::failure("download failed")
                }),
            ],
        );

        assert_eq!(calls.get(), 2);
        let Outcome::Failure(reason) = outcome else {
            panic!("expected failure");
        };
        assert!(reason.contains("official installer"));
        assert!(reason.contains("download failed"));
        // Earlier failures are logged, not surfaced.
        assert!(!reason.contains("cask not found"));
    }

    #[test]
    fn test_empty_chain_fails() {
        let outcome = run_chain("nothing", Vec::new());
        assert!(!outcome.is_success());
    }
}
