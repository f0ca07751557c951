//! Types shared between host applications and their deferred-registration
//! extensions.
//!
//! Extensions buffer hook and widget-area registrations while the host is
//! still bootstrapping, then replay them through the traits defined here once
//! the host's dispatch machinery is live. This crate carries only the
//! boundary contract: the host-side traits, the opaque callback handle, the
//! area wrapper markup, the extension lifecycle callbacks, and interface
//! version checking.

pub mod area;
pub mod extension;
pub mod host;
pub mod types;
pub mod version;

pub use area::AreaTemplate;
pub use extension::ExtensionLifecycle;
pub use host::{BindError, HostHooks, HostL10n};
pub use types::{CallbackRef, HookFn, HookValue, DEFAULT_ACCEPTED_ARGS, DEFAULT_PRIORITY};
pub use version::{is_version_compatible, INTERFACE_VERSION};
