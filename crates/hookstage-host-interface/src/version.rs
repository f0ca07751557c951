//! Interface version compatibility checking.
//!
//! Extensions may declare the minimum interface version they were written
//! against; the bootstrap layer compares that declaration with the version
//! this crate was built as.

use semver::Version;

/// Version of this interface crate.
///
/// Extensions declare their minimum required interface version in their
/// manifest; the bootstrap layer checks it against this constant before
/// admitting the extension.
pub const INTERFACE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check whether an extension's minimum interface version is satisfied by
/// the host's interface version.
///
/// Compatible when both share a major version and the host is at least the
/// declared minimum: an extension written against 0.1.0 works with a 0.1.5
/// host, but not with a 0.0.9 host (older) or a 1.0.0 host (different
/// major).
///
/// Returns `Err` when either string is not valid semver.
pub fn is_version_compatible(extension_min: &str, host_version: &str) -> Result<bool, String> {
    let minimum = Version::parse(extension_min)
        .map_err(|e| format!("Invalid extension interface version '{}': {}", extension_min, e))?;
    let host = Version::parse(host_version)
        .map_err(|e| format!("Invalid host interface version '{}': {}", host_version, e))?;

    Ok(host.major == minimum.major && host >= minimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_compatible() {
        assert!(is_version_compatible("0.1.0", "0.1.0").unwrap());
    }

    #[test]
    fn test_newer_host_same_major_is_compatible() {
        assert!(is_version_compatible("0.1.0", "0.1.5").unwrap());
        assert!(is_version_compatible("0.1.0", "0.2.0").unwrap());
    }

    #[test]
    fn test_older_host_is_incompatible() {
        assert!(!is_version_compatible("0.2.0", "0.1.0").unwrap());
    }

    #[test]
    fn test_major_mismatch_is_incompatible() {
        assert!(!is_version_compatible("1.0.0", "0.9.0").unwrap());
        assert!(!is_version_compatible("0.1.0", "1.0.0").unwrap());
    }

    #[test]
    fn test_invalid_versions_error() {
        assert!(is_version_compatible("not-a-version", "0.1.0").is_err());
        assert!(is_version_compatible("0.1.0", "not-a-version").is_err());
    }

    #[test]
    fn test_interface_version_parses() {
        Version::parse(INTERFACE_VERSION).expect("INTERFACE_VERSION must be valid semver");
    }
}
