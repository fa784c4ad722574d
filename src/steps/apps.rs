//! Desktop application installs: iTerm2 and Claude Code

use super::homebrew;
use crate::fallback::{Attempt, run_chain};
use crate::system::{self, SetupContext};
use crate::types::Outcome;
use std::path::Path;

pub fn install_iterm2(_ctx: &SetupContext) -> Outcome {
    if Path::new("/Applications/iTerm.app").exists() {
        return Outcome::success("iTerm2 already installed");
    }

    println!("📦 Installing iTerm2...");
    match homebrew::brew(&["install", "--cask", "iterm2"])
        .and_then(|out| out.ensure_success("brew install --cask iterm2"))
    {
        Ok(()) => Outcome::success("iTerm2 installed"),
        Err(e) => Outcome::failure(format!("iTerm2 installation failed: {:#}", e)),
    }
}

pub fn install_claude_code(_ctx: &SetupContext) -> Outcome {
    if system::binary_on_path("claude") {
        return Outcome::success("Claude Code already installed");
    }

    println!("📦 Installing Claude Code...");
    run_chain(
        "Claude Code",
        vec![
            Attempt::new("Homebrew cask", || {
                match homebrew::brew(&["install", "--cask", "claude-code"])
                    .and_then(|out| out.ensure_success("brew install --cask claude-code"))
                {
                    Ok(()) => Outcome::success("Claude Code installed via Homebrew"),
                    Err(e) => Outcome::failure(format!("{:#}", e)),
                }
            }),
            Attempt::new("official installer", || {
                match system::run_shell_interactive("curl -fsSL https://claude.ai/install.sh | bash")
                {
                    Ok(status) if status.success() => {
                        Outcome::success("Claude Code installed via official installer")
                    }
                    Ok(status) => Outcome::failure(format!(
                        "installer exited with status {}",
                        status.code().unwrap_or(-1)
                    )),
                    Err(e) => Outcome::failure(format!("{:#}", e)),
                }
            }),
        ],
    )
}
