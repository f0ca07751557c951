//! Traits a host implements to receive deferred registrations.

use std::fmt;

use crate::area::AreaTemplate;
use crate::types::CallbackRef;

/// Error returned when the host rejects a binding.
///
/// The registry never constructs or translates these; they originate in host
/// implementations and travel back to whoever triggered the flush.
#[derive(Debug, Clone)]
pub struct BindError {
    /// Hook name or area id the failed binding targeted.
    pub target: String,
    /// Human-readable reason for the rejection.
    pub message: String,
}

impl BindError {
    pub fn new(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.message)
    }
}

impl std::error::Error for BindError {}

/// The host's live hook table.
///
/// Implementations install each handed-over binding so it fires when the
/// host dispatches the named hook. How priority interacts with bindings from
/// other sources is the host's business; callers only guarantee the order in
/// which bindings are handed over.
pub trait HostHooks {
    /// Install a filter binding. The callback's return value replaces the
    /// filtered value when the hook fires.
    fn bind_filter(
        &mut self,
        hook: &str,
        callback: CallbackRef,
        priority: i32,
        accepted_args: usize,
    ) -> Result<(), BindError>;

    /// Install an action binding. The callback's return value is discarded
    /// when the hook fires.
    fn bind_action(
        &mut self,
        hook: &str,
        callback: CallbackRef,
        priority: i32,
        accepted_args: usize,
    ) -> Result<(), BindError>;

    /// Register a named widget area together with its wrapper markup.
    ///
    /// A `None` description means the extension supplied none; hosts must
    /// not conflate that with an empty string.
    fn bind_area(
        &mut self,
        name: &str,
        id: &str,
        description: Option<&str>,
        template: &AreaTemplate,
    ) -> Result<(), BindError>;
}

/// Host localization facility.
///
/// Loading translation catalogs is entirely the host's concern; extensions
/// only hand over the text domain their strings are keyed under.
pub trait HostL10n {
    fn load_text_domain(&mut self, domain: &str) -> Result<(), BindError>;
}
