//! Replays buffered registrations into a live host.
//!
//! Flushing iterates a collection exactly once, in insertion order, and
//! hands every entry to the host. Forwarded entries are drained from the
//! buffer, so a second flush forwards nothing unless new registrations
//! arrived in between.
//!
//! Flushing is best-effort, not all-or-nothing: when the host rejects an
//! entry, everything forwarded so far stays installed, the rejected entry
//! counts as attempted and is dropped, the error is returned unchanged, and
//! the entries not yet attempted remain buffered for a later flush.

use hookstage_host_interface::{AreaTemplate, BindError, HostHooks};

use crate::registry::{AreaBinding, Binding, HookRegistry};

impl HookRegistry {
    /// Hand every buffered filter to the host, in registration order.
    pub fn flush_filters<H: HostHooks>(&mut self, host: &mut H) -> Result<(), BindError> {
        let pending = std::mem::take(&mut self.filters);
        let mut remaining = pending.into_iter();
        while let Some(binding) = remaining.next() {
            let Binding {
                hook,
                callback,
                priority,
                accepted_args,
            } = binding;
            tracing::debug!(hook = %hook, priority, accepted_args, "binding filter");
            if let Err(err) = host.bind_filter(&hook, callback, priority, accepted_args) {
                tracing::warn!(hook = %hook, error = %err, "host rejected filter binding");
                self.filters = remaining.collect();
                return Err(err);
            }
        }
        Ok(())
    }

    /// Hand every buffered action to the host, in registration order.
    pub fn flush_actions<H: HostHooks>(&mut self, host: &mut H) -> Result<(), BindError> {
        let pending = std::mem::take(&mut self.actions);
        let mut remaining = pending.into_iter();
        while let Some(binding) = remaining.next() {
            let Binding {
                hook,
                callback,
                priority,
                accepted_args,
            } = binding;
            tracing::debug!(hook = %hook, priority, accepted_args, "binding action");
            if let Err(err) = host.bind_action(&hook, callback, priority, accepted_args) {
                tracing::warn!(hook = %hook, error = %err, "host rejected action binding");
                self.actions = remaining.collect();
                return Err(err);
            }
        }
        Ok(())
    }

    /// Flush filters, then actions.
    ///
    /// Every filter reaches the host before any action does; hosts with
    /// ordering-sensitive behavior between the two kinds can rely on that.
    pub fn run<H: HostHooks>(&mut self, host: &mut H) -> Result<(), BindError> {
        self.flush_filters(host)?;
        self.flush_actions(host)
    }

    /// Register every buffered widget area with the host, in order, each
    /// with [`AreaTemplate::STANDARD`]. No buffered areas means no host
    /// calls.
    pub fn flush_areas<H: HostHooks>(&mut self, host: &mut H) -> Result<(), BindError> {
        let pending = std::mem::take(&mut self.areas);
        let mut remaining = pending.into_iter();
        while let Some(area) = remaining.next() {
            let AreaBinding {
                name,
                id,
                description,
            } = area;
            tracing::debug!(area = %id, "registering widget area");
            if let Err(err) =
                host.bind_area(&name, &id, description.as_deref(), &AreaTemplate::STANDARD)
            {
                tracing::warn!(area = %id, error = %err, "host rejected widget area");
                self.areas = remaining.collect();
                return Err(err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookstage_host_interface::{CallbackRef, HookValue};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug)]
    enum HostCall {
        Filter {
            hook: String,
            callback: CallbackRef,
            priority: i32,
            accepted_args: usize,
        },
        Action {
            hook: String,
            callback: CallbackRef,
            priority: i32,
            accepted_args: usize,
        },
        Area {
            name: String,
            id: String,
            description: Option<String>,
            template: AreaTemplate,
        },
    }

    /// Test double that records every binding and can reject chosen hooks.
    #[derive(Debug, Default)]
    struct RecordingHost {
        calls: Vec<HostCall>,
        reject: Option<String>,
    }

    impl RecordingHost {
        fn rejecting(hook: &str) -> Self {
            Self {
                calls: Vec::new(),
                reject: Some(hook.to_string()),
            }
        }

        fn check(&mut self, target: &str) -> Result<(), BindError> {
            match &self.reject {
                Some(rejected) if rejected == target => {
                    Err(BindError::new(target, "rejected by test host"))
                }
                _ => Ok(()),
            }
        }

        fn call_kinds(&self) -> Vec<&'static str> {
            self.calls
                .iter()
                .map(|c| match c {
                    HostCall::Filter { .. } => "filter",
                    HostCall::Action { .. } => "action",
                    HostCall::Area { .. } => "area",
                })
                .collect()
        }
    }

    impl HostHooks for RecordingHost {
        fn bind_filter(
            &mut self,
            hook: &str,
            callback: CallbackRef,
            priority: i32,
            accepted_args: usize,
        ) -> Result<(), BindError> {
            self.check(hook)?;
            self.calls.push(HostCall::Filter {
                hook: hook.to_string(),
                callback,
                priority,
                accepted_args,
            });
            Ok(())
        }

        fn bind_action(
            &mut self,
            hook: &str,
            callback: CallbackRef,
            priority: i32,
            accepted_args: usize,
        ) -> Result<(), BindError> {
            self.check(hook)?;
            self.calls.push(HostCall::Action {
                hook: hook.to_string(),
                callback,
                priority,
                accepted_args,
            });
            Ok(())
        }

        fn bind_area(
            &mut self,
            name: &str,
            id: &str,
            description: Option<&str>,
            template: &AreaTemplate,
        ) -> Result<(), BindError> {
            self.check(id)?;
            self.calls.push(HostCall::Area {
                name: name.to_string(),
                id: id.to_string(),
                description: description.map(str::to_string),
                template: *template,
            });
            Ok(())
        }
    }

    fn noop() -> CallbackRef {
        CallbackRef::new(|_| HookValue::Null)
    }

    #[test]
    fn test_run_flushes_all_filters_before_any_action() {
        let mut registry = HookRegistry::new();
        registry.register_action("init", noop());
        registry.register_filter("the_content", noop());
        registry.register_action("admin_init", noop());
        registry.register_filter("the_title", noop());

        let mut host = RecordingHost::default();
        registry.run(&mut host).unwrap();

        assert_eq!(host.call_kinds(), ["filter", "filter", "action", "action"]);
    }

    #[test]
    fn test_flush_preserves_registration_order() {
        let mut registry = HookRegistry::new();
        for hook in ["a", "b", "c"] {
            registry.register_filter(hook, noop());
        }

        let mut host = RecordingHost::default();
        registry.flush_filters(&mut host).unwrap();

        let hooks: Vec<&str> = host
            .calls
            .iter()
            .map(|c| match c {
                HostCall::Filter { hook, .. } => hook.as_str(),
                other => panic!("unexpected call {:?}", other),
            })
            .collect();
        assert_eq!(hooks, ["a", "b", "c"]);
    }

    #[test]
    fn test_end_to_end_bootstrap_scenario() {
        let render = CallbackRef::new(|mut args| args.pop().unwrap_or(HookValue::Null));
        let setup = CallbackRef::new(|_| HookValue::Null);

        let mut registry = HookRegistry::new();
        registry.register_filter_with("the_content", render.clone(), 5, 1);
        registry.register_action("init", setup.clone());
        registry.register_area_with_description("Sidebar", "sidebar-1", Some("Main sidebar"));

        let mut host = RecordingHost::default();
        registry.run(&mut host).unwrap();
        registry.flush_areas(&mut host).unwrap();

        assert_eq!(host.calls.len(), 3);
        match &host.calls[0] {
            HostCall::Filter {
                hook,
                callback,
                priority,
                accepted_args,
            } => {
                assert_eq!(hook, "the_content");
                assert!(CallbackRef::same_callback(callback, &render));
                assert_eq!(*priority, 5);
                assert_eq!(*accepted_args, 1);
            }
            other => panic!("expected filter first, got {:?}", other),
        }
        match &host.calls[1] {
            HostCall::Action {
                hook,
                callback,
                priority,
                accepted_args,
            } => {
                assert_eq!(hook, "init");
                assert!(CallbackRef::same_callback(callback, &setup));
                assert_eq!(*priority, 10);
                assert_eq!(*accepted_args, 1);
            }
            other => panic!("expected action second, got {:?}", other),
        }
        match &host.calls[2] {
            HostCall::Area {
                name,
                id,
                description,
                template,
            } => {
                assert_eq!(name, "Sidebar");
                assert_eq!(id, "sidebar-1");
                assert_eq!(description.as_deref(), Some("Main sidebar"));
                assert_eq!(*template, AreaTemplate::STANDARD);
            }
            other => panic!("expected area last, got {:?}", other),
        }
    }

    #[test]
    fn test_forwarded_callback_still_works() {
        let upper = CallbackRef::new(|mut args| match args.pop() {
            Some(HookValue::String(s)) => json!(s.to_uppercase()),
            other => other.unwrap_or(HookValue::Null),
        });

        let mut registry = HookRegistry::new();
        registry.register_filter("the_title", upper);

        let mut host = RecordingHost::default();
        registry.flush_filters(&mut host).unwrap();

        let HostCall::Filter { callback, .. } = &host.calls[0] else {
            panic!("expected a filter call");
        };
        assert_eq!(callback.call(vec![json!("hello")]), json!("HELLO"));
    }

    #[test]
    fn test_flush_drains_the_buffer() {
        let mut registry = HookRegistry::new();
        registry.register_filter("the_content", noop());

        let mut host = RecordingHost::default();
        registry.flush_filters(&mut host).unwrap();
        registry.flush_filters(&mut host).unwrap();
        assert_eq!(host.calls.len(), 1);
        assert!(registry.is_empty());

        registry.register_filter("the_excerpt", noop());
        registry.flush_filters(&mut host).unwrap();
        assert_eq!(host.calls.len(), 2);
    }

    #[test]
    fn test_duplicate_bindings_produce_two_host_calls() {
        let cb = noop();
        let mut registry = HookRegistry::new();
        registry.register_action("init", cb.clone());
        registry.register_action("init", cb);

        let mut host = RecordingHost::default();
        registry.flush_actions(&mut host).unwrap();
        assert_eq!(host.call_kinds(), ["action", "action"]);
    }

    #[test]
    fn test_no_areas_means_no_host_calls() {
        let mut registry = HookRegistry::new();
        let mut host = RecordingHost::default();
        registry.flush_areas(&mut host).unwrap();
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_every_area_gets_the_standard_template() {
        let mut registry = HookRegistry::new();
        registry.register_area("Sidebar", "sidebar-1");
        registry.register_area("Footer", "footer-1");
        registry.register_area_with_description("Header", "header-1", Some("Header area"));

        let mut host = RecordingHost::default();
        registry.flush_areas(&mut host).unwrap();

        assert_eq!(host.calls.len(), 3);
        for call in &host.calls {
            let HostCall::Area { template, .. } = call else {
                panic!("expected only area calls");
            };
            assert_eq!(*template, AreaTemplate::STANDARD);
        }
    }

    #[test]
    fn test_area_description_absent_reaches_host_as_none() {
        let mut registry = HookRegistry::new();
        registry.register_area("Sidebar", "sidebar-1");

        let mut host = RecordingHost::default();
        registry.flush_areas(&mut host).unwrap();

        let HostCall::Area { description, .. } = &host.calls[0] else {
            panic!("expected an area call");
        };
        assert_eq!(*description, None);
    }

    #[test]
    fn test_rejection_stops_flush_and_keeps_the_tail() {
        let mut registry = HookRegistry::new();
        registry.register_filter("first", noop());
        registry.register_filter("second", noop());
        registry.register_filter("third", noop());

        let mut host = RecordingHost::rejecting("second");
        let err = registry.flush_filters(&mut host).unwrap_err();
        assert_eq!(err.target, "second");

        // "first" was installed, "second" was attempted and dropped,
        // "third" stays buffered.
        assert_eq!(host.call_kinds(), ["filter"]);
        let buffered: Vec<&str> = registry.filters().iter().map(|b| b.hook.as_str()).collect();
        assert_eq!(buffered, ["third"]);

        let mut retry_host = RecordingHost::default();
        registry.flush_filters(&mut retry_host).unwrap();
        assert_eq!(retry_host.calls.len(), 1);
        assert!(registry.filters().is_empty());
    }

    #[test]
    fn test_rejection_error_propagates_unchanged() {
        let mut registry = HookRegistry::new();
        registry.register_action("init", noop());

        let mut host = RecordingHost::rejecting("init");
        let err = registry.flush_actions(&mut host).unwrap_err();
        assert_eq!(err.to_string(), "init: rejected by test host");
    }

    #[test]
    fn test_run_stops_before_actions_when_a_filter_fails() {
        let mut registry = HookRegistry::new();
        registry.register_filter("broken", noop());
        registry.register_action("init", noop());

        let mut host = RecordingHost::rejecting("broken");
        assert!(registry.run(&mut host).is_err());
        assert!(host.calls.is_empty());
        // The action collection was never touched.
        assert_eq!(registry.actions().len(), 1);
    }
}
