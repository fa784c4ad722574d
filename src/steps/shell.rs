//! ZSH, Oh My Zsh and the shell profile template

use super::homebrew;
use crate::system::{self, SetupContext};
use crate::types::Outcome;
use std::fs;
use std::path::Path;

const ZSHRC_TEMPLATE: &str = include_str!("../../assets/zshrc");

const OH_MY_ZSH_INSTALL: &str =
    r#"sh -c "$(curl -fsSL https://raw.github.com/ohmyzsh/ohmyzsh/master/tools/install.sh)" "" --unattended"#;

pub fn ensure_default_zsh(_ctx: &SetupContext) -> Outcome {
    println!("📦 Checking ZSH installation...");
    if std::env::var("SHELL").unwrap_or_default().contains("/bin/zsh") {
        return Outcome::success("ZSH already default shell");
    }

    if !Path::new("/bin/zsh").exists() {
        if let Err(e) =
            homebrew::brew(&["install", "zsh"]).and_then(|out| out.ensure_success("brew install zsh"))
        {
            return Outcome::failure(format!("ZSH installation failed: {:#}", e));
        }
    }

    // chsh prompts for the operator's password.
    match system::run_interactive("chsh", &["-s", "/bin/zsh"]) {
        Ok(status) if status.success() => Outcome::success("ZSH set as default shell"),
        _ => Outcome::success("ZSH available (change it manually with: chsh -s /bin/zsh)"),
    }
}

pub fn install_oh_my_zsh(ctx: &SetupContext) -> Outcome {
    let oh_my_zsh_dir = ctx.home.join(".oh-my-zsh");
    if oh_my_zsh_dir.exists() {
        return Outcome::success("Oh My Zsh already installed");
    }

    println!("📦 Installing Oh My Zsh...");
    match system::run_shell_interactive(OH_MY_ZSH_INSTALL) {
        Ok(status) if status.success() && oh_my_zsh_dir.exists() => {
            Outcome::success("Oh My Zsh installed")
        }
        Ok(_) => Outcome::failure("Oh My Zsh installation failed"),
        Err(e) => Outcome::failure(format!("Oh My Zsh installation failed: {:#}", e)),
    }
}

/// Write the bundled zshrc template, preserving any existing file as a
/// backup next to it.
pub fn seed_profile(ctx: &SetupContext) -> Outcome {
    let dest = ctx.home.join(".zshrc");

    if dest.exists() {
        let backup = ctx.home.join(".zshrc.backup");
        if let Err(e) = fs::copy(&dest, &backup) {
            return Outcome::failure(format!(
                "could not back up existing .zshrc to {}: {}",
                backup.display(),
                e
            ));
        }
        println!("Backed up existing .zshrc to {}", backup.display());
    }

    match fs::write(&dest, ZSHRC_TEMPLATE) {
        Ok(()) => Outcome::success(format!(".zshrc template written to {}", dest.display())),
        Err(e) => Outcome::failure(format!("failed to write {}: {}", dest.display(), e)),
    }
}
