//! GitHub CLI installation and authentication

use super::homebrew;
use crate::system::{self, SetupContext};
use crate::types::Outcome;
use std::io::Write;

pub fn install_cli(_ctx: &SetupContext) -> Outcome {
    if system::binary_on_path("gh") {
        return Outcome::success("GitHub CLI already installed");
    }

    println!("📦 Installing GitHub CLI...");
    match homebrew::brew(&["install", "gh"]).and_then(|out| out.ensure_success("brew install gh")) {
        Ok(()) => Outcome::success("GitHub CLI installed"),
        Err(e) => Outcome::failure(format!("GitHub CLI installation failed: {:#}", e)),
    }
}

/// Walk the operator through `gh auth login`. Blocks on the browser-based
/// flow for as long as it takes.
pub fn authenticate(_ctx: &SetupContext) -> Outcome {
    if !system::binary_on_path("gh") {
        return Outcome::failure("GitHub authentication requires the GitHub CLI (gh not found)");
    }

    println!("🔐 Setting up GitHub CLI authentication...");
    println!();
    println!("{}", "=".repeat(50));
    println!("GitHub CLI Authentication Required");
    println!("{}", "=".repeat(50));
    println!("You will now be prompted to authenticate with GitHub.");
    println!("This opens a browser window to GitHub's sign-in page.");

    let _ = system::run_command("open", &["https://github.com/login"]);

    print!("\nPress Enter when ready to continue with GitHub CLI authentication...");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);

    match system::run_interactive("gh", &["auth", "login"]) {
        Ok(status) if status.success() => Outcome::success("GitHub CLI authentication completed"),
        Ok(_) => Outcome::failure("GitHub CLI authentication failed"),
        Err(e) => Outcome::failure(format!("GitHub CLI authentication failed: {:#}", e)),
    }
}
