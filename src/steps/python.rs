//! Python installation

use super::homebrew;
use crate::profile;
use crate::system::SetupContext;
use crate::types::Outcome;
use tracing::warn;

const ALIAS_LINE: &str = r#"alias python="python3""#;

pub fn install(ctx: &SetupContext) -> Outcome {
    println!("📦 Installing Python via Homebrew...");
    if let Err(e) =
        homebrew::brew(&["install", "python"]).and_then(|out| out.ensure_success("brew install python"))
    {
        return Outcome::failure(format!("Python installation failed: {:#}", e));
    }

    // A missing alias is an inconvenience, not a failed install.
    match profile::ensure_line(&ctx.shell_profile, ALIAS_LINE) {
        Ok(true) => Outcome::success("Python installed and alias configured"),
        Ok(false) => Outcome::success("Python installed (alias already configured)"),
        Err(e) => {
            warn!("could not set Python alias: {}", e);
            Outcome::success("Python installed (alias setup failed)")
        }
    }
}
