use crate::constants::ENV_PREFIX;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::{ops::Deref, path::Path, str::FromStr, sync::Arc};
use tag_reader_error::{ReaderError, ReaderResult};
use tag_reader_sdk::DEFAULT_PLUGIN_NAME;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    /// Layer the optional config file under `TAG_READER__*` environment overrides.
    pub fn new(config_path: &Path) -> ReaderResult<Self> {
        let path = config_path.to_string_lossy();
        let builder = Config::builder()
            .add_source(File::with_name(path.as_ref()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self(Arc::new(Inner::default()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub plugin: PluginSettings,
    #[serde(default)]
    pub log: LogSettings,
    #[serde(default)]
    pub host: HostSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PluginSettings {
    /// Name reported by the liveness probe.
    #[serde(default = "PluginSettings::name_default")]
    pub name: String,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            name: Self::name_default(),
        }
    }
}

impl PluginSettings {
    fn name_default() -> String {
        DEFAULT_PLUGIN_NAME.into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    #[serde(default = "LogSettings::level_default")]
    pub level: String,
    /// Directory for daily rolling log files; console only when unset.
    #[serde(default)]
    pub file_dir: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: Self::level_default(),
            file_dir: None,
        }
    }
}

impl LogSettings {
    fn level_default() -> String {
        "info".into()
    }

    pub fn parsed_level(&self) -> ReaderResult<Level> {
        Level::from_str(self.level.trim()).map_err(|_| {
            ReaderError::InitializationError(format!("Invalid log level '{}'", self.level))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostSettings {
    /// JSON file holding the current intent, re-read on every call.
    #[serde(default = "HostSettings::intent_file_default")]
    pub intent_file: String,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            intent_file: Self::intent_file_default(),
        }
    }
}

impl HostSettings {
    fn intent_file_default() -> String {
        "intent.json".into()
    }
}
