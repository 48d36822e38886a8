use crate::{
    handler::{self, METHOD_GET_LAST_INTENT, METHOD_READ_TAG_ID, METHOD_TEST_PLUGIN},
    IntentSnapshot, PluginError, PluginResult, ResultRecord,
};
use dashmap::{mapref::entry::Entry, DashMap};
use std::sync::Arc;

/// Handler bound to a method name.
pub type PluginHandler =
    Arc<dyn Fn(&IntentSnapshot) -> PluginResult<ResultRecord> + Send + Sync>;

/// Explicit mapping from method name to handler.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    handlers: Arc<DashMap<String, PluginHandler>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `readTagId`, `getLastIntent` and `testPlugin`.
    pub fn with_builtin(plugin_name: &str) -> Self {
        let registry = Self::new();
        let liveness = handler::test_plugin(plugin_name);
        let builtin: [(&str, PluginHandler); 3] = [
            (METHOD_READ_TAG_ID, Arc::new(handler::read_tag_id)),
            (
                METHOD_GET_LAST_INTENT,
                Arc::new(|snapshot: &IntentSnapshot| -> PluginResult<ResultRecord> {
                    Ok(handler::get_last_intent(snapshot))
                }),
            ),
            (
                METHOD_TEST_PLUGIN,
                Arc::new(move |_: &IntentSnapshot| -> PluginResult<ResultRecord> {
                    Ok(liveness.clone())
                }),
            ),
        ];
        for (name, handler) in builtin {
            // Fresh map, names are distinct.
            let _ = registry.register(name, handler);
        }
        registry
    }

    pub fn register(&self, name: impl Into<String>, handler: PluginHandler) -> PluginResult<()> {
        match self.handlers.entry(name.into()) {
            Entry::Occupied(entry) => Err(PluginError::DuplicateMethod(entry.key().clone())),
            Entry::Vacant(entry) => {
                tracing::debug!("Registered plugin method: {}", entry.key());
                entry.insert(handler);
                Ok(())
            }
        }
    }

    pub fn unregister(&self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    pub fn handler(&self, name: &str) -> Option<PluginHandler> {
        self.handlers.get(name).map(|h| Arc::clone(h.value()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered method names, sorted.
    pub fn methods(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn dispatch(&self, name: &str, snapshot: &IntentSnapshot) -> PluginResult<ResultRecord> {
        let handler = self
            .handler(name)
            .ok_or_else(|| PluginError::MethodNotFound(name.to_string()))?;
        handler(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntentAction;

    #[test]
    fn builtin_registry_lists_three_methods() {
        let registry = PluginRegistry::with_builtin("NFCTagReader");
        assert_eq!(
            registry.methods(),
            vec!["getLastIntent", "readTagId", "testPlugin"]
        );
    }

    #[test]
    fn register_rejects_duplicates() {
        let registry = PluginRegistry::with_builtin("NFCTagReader");
        let err = registry
            .register(
                METHOD_READ_TAG_ID,
                Arc::new(|_: &IntentSnapshot| -> PluginResult<ResultRecord> {
                    Ok(ResultRecord::default())
                }),
            )
            .expect_err("duplicate method rejected");
        assert_eq!(err, PluginError::DuplicateMethod("readTagId".into()));
    }

    #[test]
    fn dispatch_unknown_method_fails() {
        let registry = PluginRegistry::new();
        assert_eq!(
            registry.dispatch("scan", &IntentSnapshot::absent()),
            Err(PluginError::MethodNotFound("scan".into()))
        );
    }

    #[test]
    fn dispatch_routes_to_handler() {
        let registry = PluginRegistry::with_builtin("NFCTagReader");
        let snapshot = IntentSnapshot::discovered(IntentAction::TagDiscovered, vec![0x04u8, 0xA3]);
        let record = registry.dispatch(METHOD_READ_TAG_ID, &snapshot).unwrap();
        assert_eq!(record.tag_id_formatted(), Some("04:A3"));
    }

    #[test]
    fn unregister_removes_method() {
        let registry = PluginRegistry::with_builtin("NFCTagReader");
        assert!(registry.unregister(METHOD_TEST_PLUGIN));
        assert!(!registry.contains(METHOD_TEST_PLUGIN));
        assert!(!registry.unregister(METHOD_TEST_PLUGIN));
    }
}
