//! Shared types for macsetup
//!
//! This module holds the small enums shared across the orchestration core,
//! with compile-time validation and exhaustive matching instead of
//! stringly-typed values.

use strum::{Display, EnumIter, EnumString};

/// Operating system family reported by the system probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Display, EnumString, EnumIter)]
pub enum OsFamily {
    #[strum(serialize = "macOS")]
    MacOs,
    #[strum(serialize = "Linux")]
    Linux,
    #[strum(serialize = "unknown")]
    Other,
}

/// Login shell flavor, used to locate the profile file steps write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ShellKind {
    #[default]
    #[strum(serialize = "zsh")]
    Zsh,
    #[strum(serialize = "bash")]
    Bash,
}

impl ShellKind {
    /// Determine the shell from a `$SHELL` value. Anything unrecognized
    /// defaults to zsh, the macOS login shell since Catalina.
    pub fn from_shell_env(shell: &str) -> Self {
        if shell.contains("bash") {
            Self::Bash
        } else {
            Self::Zsh
        }
    }

    /// File name of the profile this shell sources at login
    pub fn profile_file_name(&self) -> &'static str {
        match self {
            Self::Zsh => ".zshrc",
            Self::Bash => ".bash_profile",
        }
    }
}

/// Result of one step's execution.
///
/// A partially-applied step that left a usable artifact behind reports
/// `Success` with follow-up guidance in the message rather than `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    /// Create a success outcome
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// Create a failure outcome
    pub fn failure(msg: impl Into<String>) -> Self {
        Self::Failure(msg.into())
    }

    /// Whether this outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The human-readable message carried by either variant
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Failure(msg) => msg,
        }
    }
}
