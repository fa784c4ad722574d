//! Error handling module for macsetup
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Only preflight failures and malformed non-interactive input are fatal;
//! everything that happens inside a step is reported through the run ledger
//! instead of this error channel.

use thiserror::Error;

/// Main error type for macsetup
#[derive(Error, Debug)]
pub enum SetupError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Platform incompatibility detected before any step runs
    #[error("Preflight check failed: {0}")]
    Preflight(String),

    /// Malformed or out-of-range selection input
    #[error("Invalid selection: {0}")]
    Input(String),

    /// External command errors (spawn failures, nonzero exits)
    #[error("Command failed: {0}")]
    Command(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Property-list serialization errors
    #[error("Property list error: {0}")]
    Plist(#[from] plist::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for macsetup operations
pub type Result<T> = std::result::Result<T, SetupError>;

// Convenient error constructors
impl SetupError {
    /// Create a preflight error
    pub fn preflight(msg: impl Into<String>) -> Self {
        Self::Preflight(msg.into())
    }

    /// Create an input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a command error
    pub fn command(msg: impl Into<String>) -> Self {
        Self::Command(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
