//! System probing and subprocess execution
//!
//! This module is the only sanctioned way for steps to reach the host:
//! command execution (captured or interactive), binary lookup, and the
//! OS family/version probe consumed by the preflight check.

use crate::error::{Result, SetupError};
use crate::types::{OsFamily, ShellKind};
use anyhow::Context;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::str::FromStr;
use tracing::{debug, info};

/// Output from a captured command execution.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Standard output from the command.
    pub stdout: String,
    /// Standard error from the command.
    pub stderr: String,
    /// Exit code (None if terminated by signal).
    pub exit_code: Option<i32>,
    /// Whether the command exited successfully (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// Check that the command succeeded and return an error if not.
    pub fn ensure_success(&self, context: &str) -> anyhow::Result<()> {
        if self.success {
            Ok(())
        } else {
            let code = self.exit_code.unwrap_or(-1);
            anyhow::bail!(
                "{} failed (exit code {}): {}",
                context,
                code,
                self.stderr.trim()
            )
        }
    }
}

/// Run a command with captured stdout/stderr.
pub fn run_command(program: &str, args: &[&str]) -> anyhow::Result<CommandOutput> {
    debug!("run_command: {} {:?}", program, args);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to spawn command: {}", program))?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code(),
        success: output.status.success(),
    })
}

/// Run a shell snippet with captured output.
///
/// Used for probes that need shell constructs (`source`, `&&` chains).
pub fn run_shell(script: &str) -> anyhow::Result<CommandOutput> {
    debug!("run_shell: {}", script);

    let output = Command::new("bash")
        .arg("-c")
        .arg(script)
        .stdin(Stdio::null())
        .output()
        .context("Failed to spawn bash")?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code(),
        success: output.status.success(),
    })
}

/// Run a command with inherited stdio, blocking until it exits.
///
/// Installers that stream progress or prompt the operator (Homebrew's
/// install script, `gh auth login`) run through here. The run blocks for
/// the full duration with no timeout.
pub fn run_interactive(program: &str, args: &[&str]) -> anyhow::Result<ExitStatus> {
    info!("run_interactive: {} {:?}", program, args);

    Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to spawn command: {}", program))
}

/// Run a shell snippet with inherited stdio.
pub fn run_shell_interactive(script: &str) -> anyhow::Result<ExitStatus> {
    info!("run_shell_interactive: {}", script);

    Command::new("bash")
        .arg("-c")
        .arg(script)
        .status()
        .context("Failed to spawn bash")
}

/// Check whether a binary is reachable through PATH.
pub fn binary_on_path(name: &str) -> bool {
    which::which(name).is_ok()
}

/// A parsed OS product version (e.g. "15.2" from `sw_vers`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
}

impl FromStr for OsVersion {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| SetupError::general(format!("unparseable OS version: {:?}", s)))?;
        let minor = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        Ok(Self { major, minor })
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Determine the OS family and, on macOS, the product version.
pub fn probe_os() -> (OsFamily, Option<OsVersion>) {
    let family = match std::env::consts::OS {
        "macos" => OsFamily::MacOs,
        "linux" => OsFamily::Linux,
        _ => OsFamily::Other,
    };

    let version = if family == OsFamily::MacOs {
        run_command("sw_vers", &["-productVersion"])
            .ok()
            .filter(|out| out.success)
            .and_then(|out| out.stdout.parse().ok())
    } else {
        None
    };

    debug!("probe_os: family={} version={:?}", family, version);
    (family, version)
}

/// Resolved environment handed to every step: the home directory, the
/// shell profile steps append to, and the LaunchAgents directory for
/// background jobs. Built once per run, never mutated.
#[derive(Debug, Clone)]
pub struct SetupContext {
    pub home: PathBuf,
    pub shell: ShellKind,
    pub shell_profile: PathBuf,
    pub launch_agents: PathBuf,
}

impl SetupContext {
    /// Detect the context from the environment.
    pub fn detect() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| SetupError::general("home directory could not be determined"))?;
        let shell = ShellKind::from_shell_env(&std::env::var("SHELL").unwrap_or_default());
        let shell_profile = home.join(shell.profile_file_name());
        let launch_agents = home.join("Library/LaunchAgents");

        info!(
            "setup context: shell={} profile={}",
            shell,
            shell_profile.display()
        );
        Ok(Self {
            home,
            shell,
            shell_profile,
            launch_agents,
        })
    }
}
