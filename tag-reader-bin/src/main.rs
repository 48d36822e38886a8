mod constants;
mod logger;
mod settings;
mod source;

use clap::Parser;
use constants::DEFAULT_CONFIG_FILE_NAME;
use logger::Logger;
use settings::Settings;
use source::FileIntentSource;
use std::{env::current_dir, path::PathBuf, sync::Arc};
use tag_reader_error::{ReaderError, ReaderResult};
use tag_reader_sdk::{TagReaderPlugin, TracingObserver, METHOD_GET_LAST_INTENT};
use tracing::Level;

/// NFC tag reader host shell
///
/// Reads the current intent from a JSON file, invokes one plugin method on
/// it and prints the call response as JSON on stdout.
#[derive(Parser)]
#[command(name = "tag-reader")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "NFC tag reader", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, 'tag-reader.toml' in the current working directory
    /// is used when present.
    #[arg(short, long, env = "TAG_READER_CONFIG")]
    config: Option<PathBuf>,

    /// Intent JSON file, overrides `host.intent_file`
    #[arg(short, long)]
    intent: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long)]
    verbose: bool,

    /// Print registered methods and exit
    #[arg(long)]
    list: bool,

    /// Plugin method to invoke
    #[arg(default_value = METHOD_GET_LAST_INTENT)]
    method: String,
}

fn main() -> ReaderResult<()> {
    let cli = Cli::parse();
    let resolved = run(cli)?;
    if !resolved {
        std::process::exit(1);
    }
    Ok(())
}

/// Returns whether the call resolved.
fn run(cli: Cli) -> ReaderResult<bool> {
    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir().map_err(|e| {
                ReaderError::from(format!("Failed to get current directory: {e}"))
            })?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };
    let settings = Settings::new(&config_path)?;

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        settings.log.parsed_level()?
    };
    let mut logger = Logger::new(level, settings.log.file_dir.as_ref().map(PathBuf::from));
    logger.initialize()?;

    let intent_path = cli
        .intent
        .unwrap_or_else(|| PathBuf::from(&settings.host.intent_file));
    tracing::debug!(
        config = %config_path.display(),
        intent = %intent_path.display(),
        "Starting tag reader"
    );

    let plugin = TagReaderPlugin::new(
        settings.plugin.name.clone(),
        Arc::new(FileIntentSource::new(intent_path)),
    )
    .with_observer(Arc::new(TracingObserver::new(settings.plugin.name.clone())));

    if cli.list {
        for method in plugin.methods() {
            println!("{method}");
        }
        return Ok(true);
    }

    let response = plugin.invoke(&cli.method);
    println!("{}", response.to_json_string()?);
    Ok(response.is_resolved())
}
