//! Background job installation via launchd
//!
//! A job moves through three states: `Absent` (no descriptor on disk),
//! `Registered` (property list written under `~/Library/LaunchAgents`), and
//! `Loaded` (the supervisor is running it). Descriptors are declarative, so
//! registration always overwrites; loading an already-loaded label unloads
//! and reloads instead of failing, which keeps repeated runs idempotent even
//! though launchctl itself is not.
//!
//! Whether a label is loaded is determined by querying `launchctl list`
//! rather than by matching human-readable error text, which varies across
//! macOS releases.

use crate::system;
use crate::types::Outcome;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Declarative description of a persistent background job, serialized as a
/// launchd property list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceDescriptor {
    /// Unique reverse-DNS label within the OS-wide namespace.
    pub label: String,
    /// Command and arguments launchd runs.
    pub program_arguments: Vec<String>,
    /// Run once immediately when the job is loaded.
    pub run_at_load: bool,
    /// Recurring schedule, in seconds between runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_interval: Option<u32>,
    pub standard_out_path: PathBuf,
    pub standard_error_path: PathBuf,
}

impl ServiceDescriptor {
    /// Fixed on-disk location of this descriptor within `dir`.
    pub fn plist_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.plist", self.label))
    }
}

/// Installation state of a background job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Absent,
    Registered,
    Loaded,
}

/// Seam over the OS service supervisor.
pub trait Supervisor {
    /// Whether the supervisor currently has this label loaded.
    fn is_loaded(&self, label: &str) -> bool;
    /// Load the descriptor at `plist`.
    fn load(&mut self, plist: &Path) -> anyhow::Result<()>;
    /// Unload the descriptor at `plist`.
    fn unload(&mut self, plist: &Path) -> anyhow::Result<()>;
}

/// The real supervisor, backed by `launchctl`.
pub struct Launchctl;

impl Supervisor for Launchctl {
    fn is_loaded(&self, label: &str) -> bool {
        system::run_command("launchctl", &["list", label])
            .map(|out| out.success)
            .unwrap_or(false)
    }

    fn load(&mut self, plist: &Path) -> anyhow::Result<()> {
        let path = plist.display().to_string();
        system::run_command("launchctl", &["load", &path])?.ensure_success("launchctl load")
    }

    fn unload(&mut self, plist: &Path) -> anyhow::Result<()> {
        let path = plist.display().to_string();
        system::run_command("launchctl", &["unload", &path])?.ensure_success("launchctl unload")
    }
}

/// Installs background jobs through a [`Supervisor`].
pub struct JobInstaller<S: Supervisor> {
    supervisor: S,
}

impl<S: Supervisor> JobInstaller<S> {
    pub fn new(supervisor: S) -> Self {
        Self { supervisor }
    }

    /// Current state of `descriptor` relative to `dir`.
    pub fn state(&self, descriptor: &ServiceDescriptor, dir: &Path) -> JobState {
        if self.supervisor.is_loaded(&descriptor.label) {
            JobState::Loaded
        } else if descriptor.plist_path(dir).exists() {
            JobState::Registered
        } else {
            JobState::Absent
        }
    }

    /// Write the descriptor into `dir` and activate it.
    ///
    /// Failure to activate is reported as success with manual-activation
    /// guidance: the descriptor is safely in place and will be picked up at
    /// the next login regardless.
    pub fn install(&mut self, descriptor: &ServiceDescriptor, dir: &Path) -> Outcome {
        // Absent -> Registered
        if let Err(e) = fs::create_dir_all(dir) {
            return Outcome::failure(format!(
                "{}: could not create {}: {}",
                descriptor.label,
                dir.display(),
                e
            ));
        }
        let path = descriptor.plist_path(dir);
        if let Err(e) = plist::to_file_xml(&path, descriptor) {
            return Outcome::failure(format!(
                "{}: could not write {}: {}",
                descriptor.label,
                path.display(),
                e
            ));
        }
        info!("registered job {} at {}", descriptor.label, path.display());

        // Registered -> Loaded
        match self.activate(&descriptor.label, &path) {
            Ok(()) => Outcome::success(format!("{} background job active", descriptor.label)),
            Err(e) => {
                warn!("activation of {} failed: {:#}", descriptor.label, e);
                Outcome::success(format!(
                    "{} background job installed; it will start at next login \
                     (activate now with: launchctl load {})",
                    descriptor.label,
                    path.display()
                ))
            }
        }
    }

    fn activate(&mut self, label: &str, plist: &Path) -> anyhow::Result<()> {
        if self.supervisor.is_loaded(label) {
            debug!("job {} already loaded, reloading", label);
            self.supervisor.unload(plist)?;
        }
        self.supervisor.load(plist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    /// Records supervisor calls and tracks loaded labels by plist file stem.
    struct FakeSupervisor {
        loaded: HashSet<String>,
        calls: Vec<String>,
    }

    impl FakeSupervisor {
        fn new() -> Self {
            Self {
                loaded: HashSet::new(),
                calls: Vec::new(),
            }
        }

        fn preloaded(label: &str) -> Self {
            let mut fake = Self::new();
            fake.loaded.insert(label.to_string());
            fake
        }
    }

    fn label_of(plist: &Path) -> String {
        plist.file_stem().unwrap().to_string_lossy().into_owned()
    }

    impl Supervisor for FakeSupervisor {
        fn is_loaded(&self, label: &str) -> bool {
            self.loaded.contains(label)
        }

        fn load(&mut self, plist: &Path) -> anyhow::Result<()> {
            self.calls.push(format!("load {}", label_of(plist)));
            self.loaded.insert(label_of(plist));
            Ok(())
        }

        fn unload(&mut self, plist: &Path) -> anyhow::Result<()> {
            self.calls.push(format!("unload {}", label_of(plist)));
            self.loaded.remove(&label_of(plist));
            Ok(())
        }
    }

    fn descriptor() -> ServiceDescriptor {
        ServiceDescriptor {
            label: "com.macsetup.brew-update".to_string(),
            program_arguments: vec!["/opt/homebrew/bin/brew".to_string(), "update".to_string()],
            run_at_load: true,
            start_interval: Some(86_400),
            standard_out_path: PathBuf::from("/tmp/brew-update.log"),
            standard_error_path: PathBuf::from("/tmp/brew-update.err.log"),
        }
    }

    #[test]
    fn test_install_from_absent_loads_once() {
        let dir = tempdir().unwrap();
        let mut installer = JobInstaller::new(FakeSupervisor::new());

        let desc = descriptor();
        assert_eq!(installer.state(&desc, dir.path()), JobState::Absent);

        let outcome = installer.install(&desc, dir.path());
        assert!(outcome.is_success());
        assert_eq!(
            installer.supervisor.calls,
            vec!["load com.macsetup.brew-update"]
        );
        assert_eq!(installer.state(&desc, dir.path()), JobState::Loaded);
        assert!(desc.plist_path(dir.path()).exists());
    }

    #[test]
    fn test_install_on_loaded_label_reloads() {
        let dir = tempdir().unwrap();
        let mut installer =
            JobInstaller::new(FakeSupervisor::preloaded("com.macsetup.brew-update"));

        let desc = descriptor();
        let outcome = installer.install(&desc, dir.path());

        assert!(outcome.is_success());
        assert_eq!(
            installer.supervisor.calls,
            vec![
                "unload com.macsetup.brew-update",
                "load com.macsetup.brew-update"
            ]
        );
        assert_eq!(installer.state(&desc, dir.path()), JobState::Loaded);
    }

    #[test]
    fn test_activation_failure_downgrades_to_caveat() {
        struct BrokenSupervisor;
        impl Supervisor for BrokenSupervisor {
            fn is_loaded(&self, _label: &str) -> bool {
                false
            }
            fn load(&mut self, _plist: &Path) -> anyhow::Result<()> {
                anyhow::bail!("Bootstrap failed: 5: Input/output error")
            }
            fn unload(&mut self, _plist: &Path) -> anyhow::Result<()> {
                Ok(())
            }
        }

        let dir = tempdir().unwrap();
        let mut installer = JobInstaller::new(BrokenSupervisor);
        let desc = descriptor();

        let outcome = installer.install(&desc, dir.path());
        assert!(outcome.is_success());
        assert!(outcome.message().contains("next login"));
        // The declarative artifact is in place despite the failed load.
        assert_eq!(installer.state(&desc, dir.path()), JobState::Registered);
    }

    #[test]
    fn test_registered_state_without_load() {
        let dir = tempdir().unwrap();
        let desc = descriptor();
        plist::to_file_xml(desc.plist_path(dir.path()), &desc).unwrap();

        let installer = JobInstaller::new(FakeSupervisor::new());
        assert_eq!(installer.state(&desc, dir.path()), JobState::Registered);
    }

    #[test]
    fn test_plist_serialization_uses_launchd_keys() {
        let dir = tempdir().unwrap();
        let desc = descriptor();
        let path = desc.plist_path(dir.path());
        plist::to_file_xml(&path, &desc).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        for key in [
            "Label",
            "ProgramArguments",
            "RunAtLoad",
            "StartInterval",
            "StandardOutPath",
            "StandardErrorPath",
        ] {
            assert!(written.contains(key), "missing key {} in {}", key, written);
        }
    }
}
