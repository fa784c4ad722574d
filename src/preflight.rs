//! Pre-flight platform check
//!
//! Verifies the host before any step executes: the tool targets macOS 15
//! and later. An incompatible platform is a fatal error, reported before a
//! single installer runs.

use crate::error::{Result, SetupError};
use crate::system::{self, OsVersion};
use crate::types::OsFamily;
use tracing::info;

/// Minimum supported macOS major version.
pub const MIN_MACOS: OsVersion = OsVersion {
    major: 15,
    minor: 0,
};

/// Gate the run on platform compatibility.
pub fn check() -> Result<()> {
    let (family, version) = system::probe_os();
    check_probe(family, version)
}

fn check_probe(family: OsFamily, version: Option<OsVersion>) -> Result<()> {
    match (family, version) {
        (OsFamily::MacOs, Some(version)) if version >= MIN_MACOS => {
            info!("macOS {} is compatible", version);
            Ok(())
        }
        (OsFamily::MacOs, Some(version)) => Err(SetupError::preflight(format!(
            "this tool requires macOS {} or later; found macOS {}",
            MIN_MACOS.major, version
        ))),
        (OsFamily::MacOs, None) => Err(SetupError::preflight(
            "could not determine the macOS version (sw_vers unavailable)",
        )),
        (family, _) => Err(SetupError::preflight(format!(
            "this tool is designed for macOS only (detected {})",
            family
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_version_passes() {
        let version = "15.2".parse().ok();
        assert!(check_probe(OsFamily::MacOs, version).is_ok());
    }

    #[test]
    fn test_old_version_is_fatal() {
        let version = "14.7".parse().ok();
        let err = check_probe(OsFamily::MacOs, version).unwrap_err();
        assert!(matches!(err, SetupError::Preflight(_)));
        assert!(err.to_string().contains("14.7"));
    }

    #[test]
    fn test_other_platform_is_fatal() {
        let err = check_probe(OsFamily::Linux, None).unwrap_err();
        assert!(matches!(err, SetupError::Preflight(_)));
        assert!(err.to_string().contains("Linux"));
    }

    #[test]
    fn test_unknown_version_is_fatal() {
        assert!(check_probe(OsFamily::MacOs, None).is_err());
    }
}
