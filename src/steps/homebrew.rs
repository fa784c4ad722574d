//! Homebrew installation
//!
//! Nearly every later step shells out to `brew`, so this step comes first
//! in the catalog. A fresh install lands outside the current PATH, which is
//! why [`brew_bin`] also probes the two well-known prefixes.

use crate::system::{self, CommandOutput, SetupContext};
use crate::types::Outcome;
use anyhow::Context;
use std::path::PathBuf;

const INSTALL_SCRIPT: &str =
    r#"/bin/bash -c "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)""#;

/// Locate the brew binary, covering installs not yet on PATH.
pub(crate) fn brew_bin() -> Option<PathBuf> {
    if let Ok(path) = which::which("brew") {
        return Some(path);
    }
    ["/opt/homebrew/bin/brew", "/usr/local/bin/brew"]
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// Run brew with captured output.
pub(crate) fn brew(args: &[&str]) -> anyhow::Result<CommandOutput> {
    let brew = brew_bin().context("brew not found (run the Homebrew step first)")?;
    system::run_command(&brew.to_string_lossy(), args)
}

pub fn install(_ctx: &SetupContext) -> Outcome {
    if brew_bin().is_some() {
        return Outcome::success("Homebrew already installed");
    }

    println!("📦 Installing Homebrew...");
    match system::run_shell_interactive(INSTALL_SCRIPT) {
        Ok(status) if status.success() && brew_bin().is_some() => {
            Outcome::success("Homebrew installed")
        }
        Ok(status) => Outcome::failure(format!(
            "Homebrew installation failed (installer exited with status {})",
            status.code().unwrap_or(-1)
        )),
        Err(e) => Outcome::failure(format!("Homebrew installation failed: {:#}", e)),
    }
}
