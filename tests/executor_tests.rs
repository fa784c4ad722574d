//! Tests for the Run Executor
//!
//! These tests verify the central reliability contract: every selected step
//! runs exactly once in catalog order, a panicking step is converted into a
//! recorded failure, and no failure prevents later steps from running.

use macsetup::executor::execute;
use macsetup::registry::{Registry, Step};
use macsetup::select::Selection;
use macsetup::system::SetupContext;
use macsetup::types::{Outcome, ShellKind};
use std::sync::atomic::{AtomicUsize, Ordering};

fn test_ctx(dir: &std::path::Path) -> SetupContext {
    SetupContext {
        home: dir.to_path_buf(),
        shell: ShellKind::Zsh,
        shell_profile: dir.join(".zshrc"),
        launch_agents: dir.join("Library/LaunchAgents"),
    }
}

static FIRST_CALLS: AtomicUsize = AtomicUsize::new(0);
static PANICKING_CALLS: AtomicUsize = AtomicUsize::new(0);
static THIRD_CALLS: AtomicUsize = AtomicUsize::new(0);

fn first(_: &SetupContext) -> Outcome {
    FIRST_CALLS.fetch_add(1, Ordering::SeqCst);
    Outcome::success("first step done")
}

fn panicking(_: &SetupContext) -> Outcome {
    PANICKING_CALLS.fetch_add(1, Ordering::SeqCst);
    panic!("installer exploded")
}

fn third(_: &SetupContext) -> Outcome {
    THIRD_CALLS.fetch_add(1, Ordering::SeqCst);
    Outcome::success("third step done")
}

fn failing(_: &SetupContext) -> Outcome {
    Outcome::failure("download failed")
}

#[test]
fn test_panicking_step_does_not_halt_the_walk() {
    let registry = Registry::from_steps(vec![
        Step {
            name: "first",
            description: "succeeds",
            run: first,
        },
        Step {
            name: "second",
            description: "panics",
            run: panicking,
        },
        Step {
            name: "third",
            description: "succeeds",
            run: third,
        },
    ]);
    let dir = tempfile::tempdir().unwrap();

    let report = execute(&registry, &Selection::all(3), &test_ctx(dir.path()));

    // All three actions were invoked despite the panic in the middle.
    assert_eq!(FIRST_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(PANICKING_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(THIRD_CALLS.load(Ordering::SeqCst), 1);

    assert_eq!(report.successes, vec!["first step done", "third step done"]);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].contains("second"));
    assert!(report.failures[0].contains("installer exploded"));
    assert!(!report.is_clean());
}

#[test]
fn test_failure_outcome_is_recorded_not_fatal() {
    fn ok(_: &SetupContext) -> Outcome {
        Outcome::success("fine")
    }

    let registry = Registry::from_steps(vec![
        Step {
            name: "bad",
            description: "fails politely",
            run: failing,
        },
        Step {
            name: "good",
            description: "succeeds",
            run: ok,
        },
    ]);
    let dir = tempfile::tempdir().unwrap();

    let report = execute(&registry, &Selection::all(2), &test_ctx(dir.path()));
    assert_eq!(report.failures, vec!["download failed"]);
    assert_eq!(report.successes, vec!["fine"]);
}

#[test]
fn test_subset_selection_runs_only_selected_steps() {
    static A: AtomicUsize = AtomicUsize::new(0);
    static B: AtomicUsize = AtomicUsize::new(0);
    static C: AtomicUsize = AtomicUsize::new(0);

    fn a(_: &SetupContext) -> Outcome {
        A.fetch_add(1, Ordering::SeqCst);
        Outcome::success("a")
    }
    fn b(_: &SetupContext) -> Outcome {
        B.fetch_add(1, Ordering::SeqCst);
        Outcome::success("b")
    }
    fn c(_: &SetupContext) -> Outcome {
        C.fetch_add(1, Ordering::SeqCst);
        Outcome::success("c")
    }

    let registry = Registry::from_steps(vec![
        Step {
            name: "a",
            description: "",
            run: a,
        },
        Step {
            name: "b",
            description: "",
            run: b,
        },
        Step {
            name: "c",
            description: "",
            run: c,
        },
    ]);
    let dir = tempfile::tempdir().unwrap();

    let report = execute(
        &registry,
        &Selection::from_indices([2, 0]),
        &test_ctx(dir.path()),
    );

    assert_eq!(A.load(Ordering::SeqCst), 1);
    assert_eq!(B.load(Ordering::SeqCst), 0);
    assert_eq!(C.load(Ordering::SeqCst), 1);
    // Catalog order, not toggle order.
    assert_eq!(report.successes, vec!["a", "c"]);
}

#[test]
fn test_empty_selection_produces_empty_report() {
    let registry = Registry::from_steps(Vec::new());
    let dir = tempfile::tempdir().unwrap();

    let report = execute(&registry, &Selection::empty(), &test_ctx(dir.path()));
    assert!(report.successes.is_empty());
    assert!(report.failures.is_empty());
    assert!(report.is_clean());
}
