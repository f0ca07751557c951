//! Wires a manifest and a hook registry together for one host bootstrap.
//!
//! The flow mirrors how a host brings an extension up: build the extension
//! from its manifest, let components register hooks against the registry,
//! then hand everything to the host exactly once. Locale goes first, hook
//! bindings via [`Extension::run`], widget areas via
//! [`Extension::load_areas`].

use std::path::Path;

use anyhow::{anyhow, Result};

use hookstage_host_interface::{BindError, HostHooks, HostL10n};

use crate::manifest::ExtensionManifest;
use crate::registry::HookRegistry;

/// An extension prepared for a single host bootstrap.
#[derive(Debug)]
pub struct Extension {
    manifest: ExtensionManifest,
    registry: HookRegistry,
}

impl Extension {
    /// Build an extension from a manifest.
    ///
    /// Fails when the manifest is invalid or requires a newer host
    /// interface than this workspace provides. Areas declared in the
    /// manifest are buffered immediately, in declaration order, ahead of
    /// any code-level registrations.
    pub fn new(manifest: ExtensionManifest) -> Result<Self> {
        manifest.validate().map_err(|e| anyhow!(e))?;
        manifest.check_host_compatibility().map_err(|e| anyhow!(e))?;

        let mut registry = HookRegistry::new();
        for area in &manifest.areas {
            registry.register_area_with_description(
                &area.name,
                &area.id,
                area.description.as_deref(),
            );
        }

        tracing::info!(
            extension = %manifest.name,
            version = %manifest.version,
            areas = manifest.areas.len(),
            "extension prepared"
        );

        Ok(Self { manifest, registry })
    }

    /// Build an extension from a manifest file on disk.
    pub fn from_manifest_path(path: &Path) -> Result<Self> {
        Self::new(ExtensionManifest::load_from_path(path)?)
    }

    pub fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// Mutable access for components to buffer their hook registrations.
    pub fn registry_mut(&mut self) -> &mut HookRegistry {
        &mut self.registry
    }

    /// Hand the extension's text domain to the host localization facility.
    pub fn set_locale<H: HostL10n>(&self, host: &mut H) -> Result<(), BindError> {
        host.load_text_domain(self.manifest.effective_text_domain())
    }

    /// Flush buffered hook bindings into the host: filters first, then
    /// actions.
    pub fn run<H: HostHooks>(&mut self, host: &mut H) -> Result<(), BindError> {
        self.registry.run(host)
    }

    /// Flush buffered widget areas into the host.
    pub fn load_areas<H: HostHooks>(&mut self, host: &mut H) -> Result<(), BindError> {
        self.registry.flush_areas(host)
    }
}
