//! Scheduled Homebrew maintenance
//!
//! Registers a launchd agent that runs `brew update` once a day (and once
//! at load), so formula metadata stays fresh between runs of this tool.

use super::homebrew;
use crate::launchd::{JobInstaller, Launchctl, ServiceDescriptor};
use crate::system::SetupContext;
use crate::types::Outcome;
use std::fs;

pub const BREW_UPDATE_LABEL: &str = "com.macsetup.brew-update";

const DAILY: u32 = 86_400;

pub fn install_brew_update_job(ctx: &SetupContext) -> Outcome {
    let Some(brew) = homebrew::brew_bin() else {
        return Outcome::failure("Homebrew maintenance job requires Homebrew (brew not found)");
    };

    println!("⚙ Installing scheduled Homebrew maintenance job...");
    let log_dir = ctx.home.join("Library/Logs/macsetup");
    if let Err(e) = fs::create_dir_all(&log_dir) {
        return Outcome::failure(format!(
            "could not create log directory {}: {}",
            log_dir.display(),
            e
        ));
    }

    let descriptor = ServiceDescriptor {
        label: BREW_UPDATE_LABEL.to_string(),
        program_arguments: vec![brew.to_string_lossy().into_owned(), "update".to_string()],
        run_at_load: true,
        start_interval: Some(DAILY),
        standard_out_path: log_dir.join("brew-update.log"),
        standard_error_path: log_dir.join("brew-update.err.log"),
    };

    JobInstaller::new(Launchctl).install(&descriptor, &ctx.launch_agents)
}
