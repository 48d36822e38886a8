use crate::constants::LOG_FILE_NAME;
use std::path::PathBuf;
use tag_reader_error::{ReaderError, ReaderResult};
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, Layer, Registry};

pub struct Logger {
    level: Level,
    file_dir: Option<PathBuf>,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Level, file_dir: Option<PathBuf>) -> Self {
        Logger {
            level,
            file_dir,
            _file_guard: None,
        }
    }

    /// Install the global subscriber.
    ///
    /// Console output goes to stderr because stdout carries the call response.
    /// A daily rolling file is added when a log directory is configured; the
    /// returned logger must be kept alive for it to flush.
    pub fn initialize(&mut self) -> ReaderResult<()> {
        let filter = LevelFilter::from_level(self.level);

        let console_layer = {
            #[cfg(debug_assertions)]
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true);

            #[cfg(not(debug_assertions))]
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .with_line_number(false);

            layer.with_filter(filter)
        };

        let file_layer = match &self.file_dir {
            Some(dir) => {
                let file_appender = rolling::daily(dir, LOG_FILE_NAME);
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                self._file_guard = Some(guard);
                Some(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_filter(filter),
                )
            }
            None => None,
        };

        let subscriber = Registry::default().with(console_layer).with(file_layer);
        set_global_default(subscriber).map_err(|e| {
            ReaderError::InitializationError(format!("Failed to install logger: {e}"))
        })
    }
}
