pub mod plugin;

use config::ConfigError;
use plugin::PluginError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

pub type ReaderResult<T, E = ReaderError> = anyhow::Result<T, E>;
pub type PluginResult<T, E = PluginError> = Result<T, E>;

#[derive(Error, Debug, Default)]
pub enum ReaderError {
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    Plugin(#[from] PluginError),
    #[error("Initialization error: {0}")]
    InitializationError(String),
    #[error("{0}")]
    Msg(String),
    #[error("Unknown error")]
    #[default]
    None,
}

impl From<String> for ReaderError {
    #[inline]
    fn from(e: String) -> Self {
        ReaderError::Msg(e)
    }
}

impl From<&str> for ReaderError {
    #[inline]
    fn from(e: &str) -> Self {
        ReaderError::Msg(e.to_string())
    }
}
