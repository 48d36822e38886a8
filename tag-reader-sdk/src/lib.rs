mod codec;
pub mod handler;
mod intent;
mod observer;
mod plugin;
mod record;
mod registry;

/// Internal re-exports so embedders log through the same `tracing` version.
pub mod export {
    pub use serde_json;
    pub use tracing;
}

pub use codec::{TagIdCodec, GROUP_SEPARATOR};
pub use handler::{
    get_last_intent, read_tag_id, test_plugin, DEFAULT_PLUGIN_NAME, METHOD_GET_LAST_INTENT,
    METHOD_READ_TAG_ID, METHOD_TEST_PLUGIN,
};
pub use intent::{
    extract_snapshot, HostIntent, IntentAction, IntentSnapshot, IntentSource, RawIntent,
    StaticIntentSource, TagIdentifier, ACTION_NDEF_DISCOVERED, ACTION_TAG_DISCOVERED,
    ACTION_TECH_DISCOVERED, EXTRA_TAG,
};
pub use observer::{NoopObserver, PluginObserver, TracingObserver};
pub use plugin::{PluginResponse, TagReaderPlugin};
pub use record::{FormattedTagId, ResultRecord};
pub use registry::{PluginHandler, PluginRegistry};
pub use tag_reader_error::{plugin::PluginError, PluginResult};
