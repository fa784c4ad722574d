//! VS Code installation, `code` CLI wiring and extensions

use super::homebrew;
use crate::fallback::{Attempt, run_chain};
use crate::profile;
use crate::system::{self, SetupContext};
use crate::types::Outcome;
use std::path::Path;

const APP_PATH: &str = "/Applications/Visual Studio Code.app";
const CLI_BIN: &str = "/Applications/Visual Studio Code.app/Contents/Resources/app/bin/code";
const CLI_DIR: &str = "/Applications/Visual Studio Code.app/Contents/Resources/app/bin";

const EXTENSIONS: [(&str, &str); 2] = [
    ("anthropic.claude-code", "Claude Code for VS Code"),
    ("ms-python.python", "Python extension"),
];

pub fn install(ctx: &SetupContext) -> Outcome {
    if Path::new(APP_PATH).exists() {
        println!("VS Code already installed");
        return setup_cli(ctx);
    }

    println!("📦 Installing Visual Studio Code...");
    if let Err(e) = homebrew::brew(&["install", "--cask", "visual-studio-code"])
        .and_then(|out| out.ensure_success("brew install --cask visual-studio-code"))
    {
        return Outcome::failure(format!("VS Code installation failed: {:#}", e));
    }
    setup_cli(ctx)
}

/// Make the `code` command reachable, trying progressively less privileged
/// mechanisms.
fn setup_cli(ctx: &SetupContext) -> Outcome {
    if system::binary_on_path("code") {
        return Outcome::success("VS Code installed and 'code' command available");
    }
    if !Path::new(CLI_BIN).exists() {
        return Outcome::failure("VS Code binary not found");
    }

    println!("⚙ Setting up the VS Code 'code' command...");
    run_chain(
        "code command",
        vec![
            Attempt::new("symlink in /usr/local/bin", || {
                // Needs sudo; the prompt goes to the operator's terminal.
                match system::run_interactive("sudo", &["ln", "-sf", CLI_BIN, "/usr/local/bin/code"])
                {
                    Ok(status) if status.success() && system::binary_on_path("code") => {
                        Outcome::success("VS Code installed, 'code' linked into /usr/local/bin")
                    }
                    Ok(_) => Outcome::failure("symlink did not produce a working 'code' command"),
                    Err(e) => Outcome::failure(format!("{:#}", e)),
                }
            }),
            Attempt::new("symlink in Homebrew bin", || {
                match system::run_command("ln", &["-sf", CLI_BIN, "/opt/homebrew/bin/code"]) {
                    Ok(out) if out.success && system::binary_on_path("code") => {
                        Outcome::success("VS Code installed, 'code' linked into /opt/homebrew/bin")
                    }
                    Ok(out) => Outcome::failure(format!(
                        "symlink failed: {}",
                        out.stderr.trim()
                    )),
                    Err(e) => Outcome::failure(format!("{:#}", e)),
                }
            }),
            Attempt::new("PATH entry in shell profile", || {
                let line = format!(r#"export PATH="$PATH:{}""#, CLI_DIR);
                match profile::ensure_line(&ctx.shell_profile, &line) {
                    Ok(_) => Outcome::success(
                        "VS Code installed, 'code' added to PATH (restart your terminal to use it)",
                    ),
                    Err(e) => Outcome::failure(format!("could not update shell profile: {}", e)),
                }
            }),
        ],
    )
}

pub fn configure_extensions(_ctx: &SetupContext) -> Outcome {
    println!("⚙ Configuring VS Code extensions...");
    let Ok(code) = which::which("code") else {
        return Outcome::failure(
            "VS Code extensions skipped: 'code' command not available \
             (restart your terminal and re-run this step)",
        );
    };
    let code = code.to_string_lossy().into_owned();

    let mut configured = Vec::new();
    let mut failed = Vec::new();
    let installed = list_extensions(&code);

    for (id, name) in EXTENSIONS {
        if has_extension(&installed, id) {
            configured.push(format!("{} (already installed)", name));
            continue;
        }

        println!("Installing {}...", name);
        let install_ok = system::run_command(&code, &["--install-extension", id])
            .map(|out| out.success)
            .unwrap_or(false);
        if install_ok && has_extension(&list_extensions(&code), id) {
            configured.push(format!("installed {}", name));
        } else {
            failed.push(name);
        }
    }

    if failed.is_empty() {
        Outcome::success(format!("VS Code extensions: {}", configured.join(", ")))
    } else {
        Outcome::failure(format!(
            "Some VS Code extensions failed: {} (install them manually from the Extensions panel)",
            failed.join(", ")
        ))
    }
}

fn list_extensions(code: &str) -> String {
    system::run_command(code, &["--list-extensions"])
        .ok()
        .filter(|out| out.success)
        .map(|out| out.stdout)
        .unwrap_or_default()
}

fn has_extension(listing: &str, id: &str) -> bool {
    listing.lines().any(|line| line.trim().eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension_matches_whole_lines() {
        let listing = "ms-python.python\nanthropic.claude-code\n";
        assert!(has_extension(listing, "ms-python.python"));
        assert!(has_extension(listing, "Anthropic.Claude-Code"));
        assert!(!has_extension(listing, "python"));
        assert!(!has_extension("", "ms-python.python"));
    }
}
