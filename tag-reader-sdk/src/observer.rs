use crate::{PluginError, ResultRecord};

/// Hook for operational instrumentation around plugin calls.
///
/// All methods default to no-ops so implementors only override what they need.
pub trait PluginObserver: Send + Sync {
    fn on_call(&self, _method: &str) {}
    fn on_resolve(&self, _method: &str, _record: &ResultRecord) {}
    fn on_reject(&self, _method: &str, _error: &PluginError) {}
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PluginObserver for NoopObserver {}

/// Observer forwarding events to `tracing`.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    plugin: String,
}

impl TracingObserver {
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
        }
    }
}

impl PluginObserver for TracingObserver {
    fn on_call(&self, method: &str) {
        tracing::debug!(plugin = %self.plugin, method, "Plugin method called");
    }

    fn on_resolve(&self, method: &str, record: &ResultRecord) {
        match record.tag_id() {
            Some(tag_id) => {
                tracing::info!(plugin = %self.plugin, method, tag_id, "Tag found")
            }
            None => tracing::debug!(plugin = %self.plugin, method, "Plugin call resolved"),
        }
    }

    fn on_reject(&self, method: &str, error: &PluginError) {
        tracing::warn!(plugin = %self.plugin, method, code = error.code(), "{error}");
    }
}
