//! Callback handles and dispatch defaults shared across the boundary.

use std::fmt;
use std::sync::Arc;

/// Dispatch priority applied when the registering code does not supply one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Number of arguments forwarded to a callback when the registering code
/// does not supply a count.
pub const DEFAULT_ACCEPTED_ARGS: usize = 1;

/// Value passed through hooks at dispatch time.
///
/// Filter callbacks return the (possibly transformed) value; the host
/// discards whatever an action callback returns.
pub type HookValue = serde_json::Value;

/// Signature shared by action and filter callbacks.
pub type HookFn = dyn Fn(Vec<HookValue>) -> HookValue + Send + Sync;

/// Opaque, clonable handle to a component callback.
///
/// Registries store and forward these without ever invoking them; only the
/// host's hook table calls the underlying function, at dispatch time.
/// Cloning shares the same callback, so ownership stays with whoever
/// created the handle.
#[derive(Clone)]
pub struct CallbackRef(Arc<HookFn>);

impl CallbackRef {
    /// Wrap a closure or function in a forwardable handle.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Vec<HookValue>) -> HookValue + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Invoke the underlying callback. Host implementations call this when
    /// the hook fires; extension-side code has no reason to.
    pub fn call(&self, args: Vec<HookValue>) -> HookValue {
        (self.0)(args)
    }

    /// Whether two handles refer to the same underlying callback.
    pub fn same_callback(a: &CallbackRef, b: &CallbackRef) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for CallbackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallbackRef(..)")
    }
}
