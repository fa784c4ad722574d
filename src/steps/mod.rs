//! Installer step bodies
//!
//! Each submodule contributes one or more catalog entries. Bodies are
//! deliberately thin and defensive: they check for existing work before
//! writing, return an [`Outcome`](crate::types::Outcome) instead of
//! propagating errors, and reach the host only through
//! [`system`](crate::system), [`profile`](crate::profile) and
//! [`launchd`](crate::launchd).

pub mod apps;
pub mod github;
pub mod homebrew;
pub mod maintenance;
pub mod node;
pub mod python;
pub mod shell;
pub mod vscode;

use crate::registry::Step;

/// The standard catalog, in dependency-aware registration order: Homebrew
/// first, profile-writing steps before the template seed, tools before the
/// steps that configure them.
pub fn catalog() -> Vec<Step> {
    vec![
        Step {
            name: "Homebrew",
            description: "Install the Homebrew package manager used by most later steps.",
            run: homebrew::install,
        },
        Step {
            name: "Python",
            description: "Install Python via Homebrew and alias python to python3.",
            run: python::install,
        },
        Step {
            name: "ZSH default shell",
            description: "Make sure ZSH is installed and set as the login shell.",
            run: shell::ensure_default_zsh,
        },
        Step {
            name: "Oh My Zsh",
            description: "Install the Oh My Zsh configuration framework.",
            run: shell::install_oh_my_zsh,
        },
        Step {
            name: "Shell profile template",
            description: "Seed ~/.zshrc from the bundled template (existing file is backed up).",
            run: shell::seed_profile,
        },
        Step {
            name: "NVM & Node.js",
            description: "Install NVM, wire it into the shell profile, and install Node.js LTS.",
            run: node::install,
        },
        Step {
            name: "iTerm2",
            description: "Install the iTerm2 terminal emulator.",
            run: apps::install_iterm2,
        },
        Step {
            name: "Claude Code",
            description: "Install Claude Code via Homebrew, falling back to the official installer.",
            run: apps::install_claude_code,
        },
        Step {
            name: "Visual Studio Code",
            description: "Install VS Code and make the 'code' command available.",
            run: vscode::install,
        },
        Step {
            name: "VS Code extensions",
            description: "Install the Claude Code and Python extensions for VS Code.",
            run: vscode::configure_extensions,
        },
        Step {
            name: "GitHub CLI",
            description: "Install the GitHub CLI (gh).",
            run: github::install_cli,
        },
        Step {
            name: "GitHub authentication",
            description: "Sign in to GitHub through the browser and gh auth login.",
            run: github::authenticate,
        },
        Step {
            name: "Homebrew maintenance job",
            description: "Register a launchd agent that runs brew update daily.",
            run: maintenance::install_brew_update_job,
        },
    ]
}
