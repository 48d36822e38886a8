#![allow(dead_code)]

use std::sync::{Mutex, Once};
use tag_reader_sdk::{
    extract_snapshot, HostIntent, IntentSnapshot, IntentSource, PluginError, PluginObserver,
    RawIntent, ResultRecord,
};
use tracing::Level;

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// Source whose intent the test can swap between calls, like a host
/// delivering a new intent to the activity.
#[derive(Default)]
pub struct SwappableSource {
    intent: Mutex<Option<RawIntent>>,
}

impl SwappableSource {
    pub fn set(&self, intent: Option<RawIntent>) {
        *self.intent.lock().unwrap() = intent;
    }
}

impl IntentSource for SwappableSource {
    fn read_snapshot(&self) -> IntentSnapshot {
        let guard = self.intent.lock().unwrap();
        extract_snapshot(guard.as_ref().map(|i| i as &dyn HostIntent))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Call(String),
    Resolve(String, Option<String>),
    Reject(String, PluginError),
}

/// Observer capturing every event for later assertions.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl PluginObserver for RecordingObserver {
    fn on_call(&self, method: &str) {
        self.events.lock().unwrap().push(Event::Call(method.into()));
    }

    fn on_resolve(&self, method: &str, record: &ResultRecord) {
        self.events.lock().unwrap().push(Event::Resolve(
            method.into(),
            record.tag_id().map(str::to_string),
        ));
    }

    fn on_reject(&self, method: &str, error: &PluginError) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Reject(method.into(), error.clone()));
    }
}
