//! Deferred registration of hooks and widget areas.
//!
//! Components declare interest in named hooks during startup, before the
//! host's hook table exists. The registry buffers every declaration verbatim
//! and in order; [`crate::dispatch`] replays the buffer into the host in one
//! pass once the host is ready.

use hookstage_host_interface::{CallbackRef, DEFAULT_ACCEPTED_ARGS, DEFAULT_PRIORITY};

/// A buffered action or filter registration.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Name of the hook the callback attaches to. Stored verbatim: the
    /// registry accepts empty and duplicate names without comment.
    pub hook: String,
    /// Opaque callback handle, forwarded to the host unchanged and never
    /// invoked here.
    pub callback: CallbackRef,
    /// Dispatch priority, passed through to the host.
    pub priority: i32,
    /// Number of arguments the host should pass to the callback.
    pub accepted_args: usize,
}

/// A buffered widget-area registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaBinding {
    /// Display name shown in host admin screens.
    pub name: String,
    /// Slug identifying the area.
    pub id: String,
    /// Optional short description. `None` records that the caller supplied
    /// none, which is distinct from an empty string.
    pub description: Option<String>,
}

/// Buffers hook and area registrations until the host is ready.
///
/// All three collections are append-only and preserve insertion order; at
/// flush time entries reach the host in exactly the order they were
/// registered. The registry is a buffer, not a gatekeeper: it validates
/// nothing and deduplicates nothing, so two registrations on the same hook
/// are two independent entries and two host calls. Malformed input surfaces,
/// if at all, in the host at flush time.
///
/// One registry serves one host bootstrap; once its collections are flushed
/// it has nothing left to do and can be dropped.
#[derive(Debug, Default)]
pub struct HookRegistry {
    pub(crate) actions: Vec<Binding>,
    pub(crate) filters: Vec<Binding>,
    pub(crate) areas: Vec<AreaBinding>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer an action with the default priority and argument count.
    pub fn register_action(&mut self, hook: &str, callback: CallbackRef) {
        self.register_action_with(hook, callback, DEFAULT_PRIORITY, DEFAULT_ACCEPTED_ARGS);
    }

    /// Buffer an action with explicit dispatch metadata.
    pub fn register_action_with(
        &mut self,
        hook: &str,
        callback: CallbackRef,
        priority: i32,
        accepted_args: usize,
    ) {
        Self::push_binding(&mut self.actions, hook, callback, priority, accepted_args);
    }

    /// Buffer a filter with the default priority and argument count.
    ///
    /// Filters and actions share a shape but live in separate collections:
    /// the host dispatches them differently (filters return a transformed
    /// value), and the registry preserves that distinction structurally
    /// without enforcing it.
    pub fn register_filter(&mut self, hook: &str, callback: CallbackRef) {
        self.register_filter_with(hook, callback, DEFAULT_PRIORITY, DEFAULT_ACCEPTED_ARGS);
    }

    /// Buffer a filter with explicit dispatch metadata.
    pub fn register_filter_with(
        &mut self,
        hook: &str,
        callback: CallbackRef,
        priority: i32,
        accepted_args: usize,
    ) {
        Self::push_binding(&mut self.filters, hook, callback, priority, accepted_args);
    }

    /// Buffer a widget area without a description.
    pub fn register_area(&mut self, name: &str, id: &str) {
        self.register_area_with_description(name, id, None);
    }

    /// Buffer a widget area, optionally with a description.
    pub fn register_area_with_description(
        &mut self,
        name: &str,
        id: &str,
        description: Option<&str>,
    ) {
        self.areas.push(AreaBinding {
            name: name.to_string(),
            id: id.to_string(),
            description: description.map(str::to_string),
        });
    }

    /// Buffered actions, in registration order.
    pub fn actions(&self) -> &[Binding] {
        &self.actions
    }

    /// Buffered filters, in registration order.
    pub fn filters(&self) -> &[Binding] {
        &self.filters
    }

    /// Buffered areas, in registration order.
    pub fn areas(&self) -> &[AreaBinding] {
        &self.areas
    }

    /// True when nothing is buffered in any collection.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.filters.is_empty() && self.areas.is_empty()
    }

    fn push_binding(
        collection: &mut Vec<Binding>,
        hook: &str,
        callback: CallbackRef,
        priority: i32,
        accepted_args: usize,
    ) {
        collection.push(Binding {
            hook: hook.to_string(),
            callback,
            priority,
            accepted_args,
        });
    }
}
