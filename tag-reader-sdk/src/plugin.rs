use crate::{
    handler::DEFAULT_PLUGIN_NAME, IntentSource, NoopObserver, PluginHandler,
    PluginObserver, PluginRegistry, PluginResult, ResultRecord,
};
use serde::Serialize;
use std::{fmt, sync::Arc};

/// Outcome of a plugin call as handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PluginResponse {
    Resolved { data: ResultRecord },
    Rejected { code: String, message: String },
}

impl PluginResponse {
    pub fn is_resolved(&self) -> bool {
        matches!(self, PluginResponse::Resolved { .. })
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<PluginResult<ResultRecord>> for PluginResponse {
    fn from(result: PluginResult<ResultRecord>) -> Self {
        match result {
            Ok(data) => PluginResponse::Resolved { data },
            Err(err) => PluginResponse::Rejected {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// NFC tag reader exposed to a host runtime.
///
/// Each call reads the injected [`IntentSource`] afresh, so calls are
/// independent and nothing is retained between them.
#[derive(Clone)]
pub struct TagReaderPlugin {
    name: String,
    registry: PluginRegistry,
    source: Arc<dyn IntentSource>,
    observer: Arc<dyn PluginObserver>,
}

impl fmt::Debug for TagReaderPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagReaderPlugin")
            .field("name", &self.name)
            .field("methods", &self.registry.methods())
            .finish()
    }
}

impl TagReaderPlugin {
    pub fn new(name: impl Into<String>, source: Arc<dyn IntentSource>) -> Self {
        let name = name.into();
        Self {
            registry: PluginRegistry::with_builtin(&name),
            name,
            source,
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_default_name(source: Arc<dyn IntentSource>) -> Self {
        Self::new(DEFAULT_PLUGIN_NAME, source)
    }

    pub fn with_observer(mut self, observer: Arc<dyn PluginObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn methods(&self) -> Vec<String> {
        self.registry.methods()
    }

    pub fn register(&self, method: impl Into<String>, handler: PluginHandler) -> PluginResult<()> {
        self.registry.register(method, handler)
    }

    /// Run `method` against the current intent.
    pub fn call(&self, method: &str) -> PluginResult<ResultRecord> {
        self.observer.on_call(method);
        let snapshot = self.source.read_snapshot();
        let result = self.registry.dispatch(method, &snapshot);
        match &result {
            Ok(record) => self.observer.on_resolve(method, record),
            Err(err) => self.observer.on_reject(method, err),
        }
        result
    }

    /// Like [`TagReaderPlugin::call`], folded into a host response.
    pub fn invoke(&self, method: &str) -> PluginResponse {
        self.call(method).into()
    }

    pub fn read_tag_id(&self) -> PluginResult<ResultRecord> {
        self.call(crate::handler::METHOD_READ_TAG_ID)
    }

    pub fn get_last_intent(&self) -> ResultRecord {
        // Total unless the method was unregistered.
        self.call(crate::handler::METHOD_GET_LAST_INTENT)
            .unwrap_or_default()
    }

    pub fn test_plugin(&self) -> PluginResult<ResultRecord> {
        self.call(crate::handler::METHOD_TEST_PLUGIN)
    }
}
