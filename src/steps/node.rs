//! NVM and Node.js LTS installation
//!
//! Installs NVM, guards the profile bootstrap block behind the `NVM_DIR`
//! marker so partial blocks from interrupted runs are never interleaved,
//! then installs Node through a chain with a simpler fallback invocation.

use crate::error::Result;
use crate::fallback::{Attempt, run_chain};
use crate::profile;
use crate::system::{self, SetupContext};
use crate::types::Outcome;
use std::path::Path;
use tracing::warn;

const NVM_VERSION: &str = "v0.39.7";

pub fn install(ctx: &SetupContext) -> Outcome {
    let nvm_dir = ctx.home.join(".nvm");
    if nvm_dir.exists() {
        println!("NVM already installed");
        return setup_node(ctx, &nvm_dir);
    }

    println!("📦 Installing NVM (Node Version Manager)...");
    let install_cmd = format!(
        "curl -o- https://raw.githubusercontent.com/nvm-sh/nvm/{}/install.sh | bash",
        NVM_VERSION
    );
    match system::run_shell_interactive(&install_cmd) {
        Ok(status) if status.success() => setup_node(ctx, &nvm_dir),
        Ok(_) => Outcome::failure("NVM installation failed"),
        Err(e) => Outcome::failure(format!("NVM installation failed: {:#}", e)),
    }
}

fn setup_node(ctx: &SetupContext, nvm_dir: &Path) -> Outcome {
    if !nvm_dir.join("nvm.sh").exists() {
        return Outcome::failure("NVM script not found after installation");
    }

    // The NVM installer usually writes this itself; make sure.
    if let Err(e) = ensure_profile_block(ctx, nvm_dir) {
        warn!("could not update shell profile for NVM: {}", e);
    }

    println!("⚙ Installing Node.js LTS...");
    let nvm_dir = nvm_dir.display().to_string();
    run_chain(
        "Node.js LTS",
        vec![
            Attempt::new("nvm install --lts", || {
                let script = format!(
                    r#"export NVM_DIR="{0}" && [ -s "$NVM_DIR/nvm.sh" ] && \. "$NVM_DIR/nvm.sh" && nvm install --lts && nvm use --lts && nvm alias default 'lts/*'"#,
                    nvm_dir
                );
                match system::run_shell_interactive(&script) {
                    Ok(status) if status.success() => match node_version(&nvm_dir) {
                        Some(version) => {
                            Outcome::success(format!("Node.js {} (LTS) installed via NVM", version))
                        }
                        None => Outcome::success("Node.js LTS installed via NVM"),
                    },
                    Ok(status) => Outcome::failure(format!(
                        "nvm exited with status {}",
                        status.code().unwrap_or(-1)
                    )),
                    Err(e) => Outcome::failure(format!("{:#}", e)),
                }
            }),
            Attempt::new("direct nvm invocation", || {
                let script = format!(
                    "export NVM_DIR={0} && source {0}/nvm.sh && nvm install --lts && nvm use --lts",
                    nvm_dir
                );
                match system::run_shell_interactive(&script) {
                    Ok(status) if status.success() => {
                        Outcome::success("Node.js LTS installed via NVM (fallback invocation)")
                    }
                    Ok(status) => Outcome::failure(format!(
                        "nvm exited with status {}",
                        status.code().unwrap_or(-1)
                    )),
                    Err(e) => Outcome::failure(format!("{:#}", e)),
                }
            }),
        ],
    )
}

fn node_version(nvm_dir: &str) -> Option<String> {
    system::run_shell(&format!("source {}/nvm.sh && node --version", nvm_dir))
        .ok()
        .filter(|out| out.success)
        .map(|out| out.stdout.trim().to_string())
        .filter(|version| !version.is_empty())
}

fn ensure_profile_block(ctx: &SetupContext, nvm_dir: &Path) -> Result<bool> {
    let export_line = format!(r#"export NVM_DIR="{}""#, nvm_dir.display());
    let lines = [
        export_line.as_str(),
        r#"[ -s "$NVM_DIR/nvm.sh" ] && \. "$NVM_DIR/nvm.sh""#,
        r#"[ -s "$NVM_DIR/bash_completion" ] && \. "$NVM_DIR/bash_completion""#,
    ];
    profile::ensure_block(&ctx.shell_profile, "NVM_DIR", &lines)
}
