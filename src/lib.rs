//! macsetup library
//!
//! Core functionality for the macOS development environment setup tool: the
//! step catalog, the three selection surfaces, the isolating run executor,
//! and the idempotent helpers (shell profile mutation, fallback chains,
//! launchd job installation) the installer bodies build on.

pub mod cli;
pub mod error;
pub mod executor;
pub mod fallback;
pub mod launchd;
pub mod preflight;
pub mod profile;
pub mod registry;
pub mod report;
pub mod select;
pub mod steps;
pub mod system;
pub mod theme;
pub mod types;

// Re-export main types for convenience
pub use cli::Cli;
pub use error::{Result, SetupError};
pub use executor::{RunReport, execute};
pub use fallback::{Attempt, run_chain};
pub use launchd::{JobInstaller, JobState, Launchctl, ServiceDescriptor, Supervisor};
pub use registry::{Registry, Step, StepFn};
pub use select::{Resolution, Selection};
pub use system::{CommandOutput, OsVersion, SetupContext};
pub use types::{OsFamily, Outcome, ShellKind};
