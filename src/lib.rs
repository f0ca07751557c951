//! Deferred hook registration for host extensions.
//!
//! Components declare actions, filters, and widget areas while the host is
//! still bootstrapping; the [`registry::HookRegistry`] buffers the
//! declarations in order and [`dispatch`] replays them in one pass once the
//! host's hook table is live. The boundary types live in the
//! `hookstage-host-interface` crate so that hosts depend only on the
//! contract, not on the scaffold.

pub mod bootstrap;
pub mod dispatch;
pub mod manifest;
pub mod registry;

pub use bootstrap::Extension;
pub use manifest::{AreaDefinition, ExtensionManifest};
pub use registry::{AreaBinding, Binding, HookRegistry};

pub use hookstage_host_interface::{
    AreaTemplate, BindError, CallbackRef, ExtensionLifecycle, HookValue, HostHooks, HostL10n,
};
