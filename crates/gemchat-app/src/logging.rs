//! File-backed `tracing` setup.
//!
//! The UI owns stdout, so events go to a log file (or are dropped when
//! file logging is off).

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gemchat_common::GemchatError;
use gemchat_config::schema::LoggingConfig;
use tracing_subscriber::EnvFilter;

const FALLBACK_DIRECTIVE: &str = "gemchat=info";

/// Install the global subscriber. Returns the log file path, if any.
///
/// `RUST_LOG` wins over everything; otherwise `level_override` (from the
/// command line) wins over the configured level.
pub fn init_logging(
    config: &LoggingConfig,
    level_override: Option<&str>,
) -> Result<Option<PathBuf>, GemchatError> {
    let filter = build_filter(config, level_override);

    if !config.file_logging {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .try_init()
            .map_err(|e| GemchatError::Other(format!("failed to install logger: {e}")))?;
        return Ok(None);
    }

    let path = config.file.clone().unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| GemchatError::Other(format!("failed to install logger: {e}")))?;

    Ok(Some(path))
}

fn build_filter(config: &LoggingConfig, level_override: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    level_override
        .and_then(|level| EnvFilter::try_new(directive_for(level)).ok())
        .or_else(|| EnvFilter::try_new(directive_for(config.level.as_directive())).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Filter directive enabling `level` for every gemchat crate.
pub(crate) fn directive_for(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    format!("gemchat={level},gemchat_ai={level},gemchat_config={level}")
}

/// `<data dir>/gemchat/gemchat.log`, or the temp dir if there is none.
pub(crate) fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("gemchat")
        .join("gemchat.log")
}

/// Open `path` for appending, creating parent directories as needed.
pub(crate) fn open_log_file(path: &Path) -> Result<File, GemchatError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
