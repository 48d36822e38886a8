/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "tag-reader.toml";

/// Prefix for environment overrides, e.g. `TAG_READER__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "TAG_READER";

pub const LOG_FILE_NAME: &str = "tag-reader.log";
