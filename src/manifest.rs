//! Extension manifest parsing and validation.
//!
//! An extension describes itself in an `extension.toml`: identity, version,
//! text domain, and the widget areas it wants the bootstrap layer to
//! declare. Manifest validation is a manifest concern only; the hook
//! registry itself stays permissive and accepts whatever code registers.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use hookstage_host_interface::{is_version_compatible, INTERFACE_VERSION};

/// A widget area declared in the manifest.
///
/// Declared areas are buffered into the registry at bootstrap, before any
/// code-level registrations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AreaDefinition {
    /// Display name shown in host admin screens.
    pub name: String,

    /// Area slug: ASCII alphanumerics, `-` and `_`.
    pub id: String,

    /// Optional short description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Check if an area id is a valid slug.
///
/// Valid slugs are non-empty and contain only ASCII alphanumerics, hyphens,
/// and underscores.
fn is_valid_area_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Extension manifest from an `extension.toml` file.
///
/// Required fields: name, version, description.
/// Optional fields have serde defaults for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    /// Extension name (required, must not be empty).
    pub name: String,

    /// Extension version in semver format (required).
    pub version: String,

    /// Short description shown in host admin screens (required).
    pub description: String,

    /// Extension author.
    #[serde(default)]
    pub author: Option<String>,

    /// License identifier (e.g., "MIT", "GPL-2.0-or-later").
    #[serde(default)]
    pub license: Option<String>,

    /// Text domain translation strings are keyed under. Defaults to the
    /// extension name when omitted.
    #[serde(default)]
    pub text_domain: Option<String>,

    /// Minimum host interface version this extension requires.
    #[serde(default)]
    pub min_host_interface: Option<String>,

    /// Widget areas to declare at bootstrap.
    #[serde(default)]
    pub areas: Vec<AreaDefinition>,
}

impl Default for ExtensionManifest {
    fn default() -> Self {
        Self {
            name: "<unknown>".to_string(),
            version: "0.0.0".to_string(),
            description: "<no description>".to_string(),
            author: None,
            license: None,
            text_domain: None,
            min_host_interface: None,
            areas: Vec::new(),
        }
    }
}

impl ExtensionManifest {
    /// Read and validate a manifest from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let manifest: ExtensionManifest = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML in {}", path.display()))?;
        manifest
            .validate()
            .map_err(|e| anyhow!("Invalid manifest {}: {}", path.display(), e))?;
        Ok(manifest)
    }

    /// Validate the manifest fields.
    ///
    /// Checks:
    /// - name and description are not empty
    /// - version is valid semver
    /// - min_host_interface is valid semver if present
    /// - every declared area has a non-empty name and a slug-shaped id
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Extension name cannot be empty".to_string());
        }

        if semver::Version::parse(&self.version).is_err() {
            return Err(format!(
                "Invalid version '{}': must be valid semver",
                self.version
            ));
        }

        if self.description.is_empty() {
            return Err("Extension description cannot be empty".to_string());
        }

        if let Some(ref min) = self.min_host_interface
            && semver::Version::parse(min).is_err()
        {
            return Err(format!("Invalid min_host_interface '{}'", min));
        }

        for area in &self.areas {
            if !is_valid_area_id(&area.id) {
                return Err(format!(
                    "Invalid area id '{}': must be non-empty and contain only alphanumeric characters, hyphens, and underscores",
                    area.id
                ));
            }
            if area.name.is_empty() {
                return Err(format!("Area '{}' has empty name", area.id));
            }
        }

        Ok(())
    }

    /// The text domain to hand the host: the explicit `text_domain`, or the
    /// extension name when none was declared.
    pub fn effective_text_domain(&self) -> &str {
        self.text_domain.as_deref().unwrap_or(&self.name)
    }

    /// Check `min_host_interface` against the interface version this
    /// workspace was built with.
    pub fn check_host_compatibility(&self) -> Result<(), String> {
        let Some(ref min) = self.min_host_interface else {
            return Ok(());
        };
        if is_version_compatible(min, INTERFACE_VERSION)? {
            Ok(())
        } else {
            Err(format!(
                "Extension '{}' requires host interface {} but this host provides {}",
                self.name, min, INTERFACE_VERSION
            ))
        }
    }
}

/// Generate a commented starter manifest.
///
/// The output is itself a valid, validating manifest so that
/// `hookstage template > extension.toml` produces a working starting point.
pub fn generate_manifest_template() -> String {
    let mut lines = Vec::new();

    lines.push("# Extension manifest".to_string());
    lines.push("# Optional fields are commented out; remove the leading '#' to set them.".to_string());
    lines.push(String::new());

    lines.push("# Extension name, also the default text domain (required)".to_string());
    lines.push(r#"name = "my-extension""#.to_string());
    lines.push(String::new());

    lines.push("# Extension version, semver (required)".to_string());
    lines.push(r#"version = "0.1.0""#.to_string());
    lines.push(String::new());

    lines.push("# Short description shown in host admin screens (required)".to_string());
    lines.push(r#"description = "Describe what the extension does""#.to_string());
    lines.push(String::new());

    lines.push(r#"# author = "Your Name""#.to_string());
    lines.push(r#"# license = "GPL-2.0-or-later""#.to_string());
    lines.push(r#"# text_domain = "my-extension""#.to_string());
    lines.push(format!(
        r#"# min_host_interface = "{}""#,
        INTERFACE_VERSION
    ));
    lines.push(String::new());

    lines.push("# Widget areas to declare at bootstrap (repeatable)".to_string());
    lines.push("# [[areas]]".to_string());
    lines.push(r#"# name = "Sidebar""#.to_string());
    lines.push(r#"# id = "sidebar-1""#.to_string());
    lines.push(r#"# description = "Main sidebar""#.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
