mod chat;
mod cli;
mod logging;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use gemchat_common::{ConfigError, GemchatError, Result};
use gemchat_config::GemchatConfig;

use crate::chat::ChatApp;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Leave raw mode first so the report is readable.
        let _ = tui::restore_terminal();
        default_hook(info);
    }));
}

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the environment are left alone.
fn load_dotenv() {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("gemchat").join(".env"));
    }

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// The effective config, plus a note when the default file could not be
/// used and built-in defaults were substituted.
struct LoadedConfig {
    config: GemchatConfig,
    fallback: Option<String>,
}

fn load_config(
    args: &cli::Args,
    load_default: impl FnOnce() -> std::result::Result<GemchatConfig, ConfigError>,
) -> Result<LoadedConfig> {
    let (mut config, fallback) = match &args.config {
        Some(path) => (gemchat_config::load_config_from(path)?, None),
        None => match load_default() {
            Ok(config) => (config, None),
            Err(e) => {
                let note = format!("config load failed, using defaults: {e}");
                eprintln!("gemchat: {note}");
                (GemchatConfig::default(), Some(note))
            }
        },
    };

    if let Some(model) = &args.model {
        config.model.name = model.clone();
    }
    Ok(LoadedConfig { config, fallback })
}

fn run(args: cli::Args) -> Result<()> {
    let LoadedConfig { config, fallback } = load_config(&args, gemchat_config::load_config)?;

    if args.print_config {
        println!("{}", gemchat_config::config_to_json(&config));
        return Ok(());
    }

    let log_path = logging::init_logging(&config.logging, args.log_level.as_deref())?;
    tracing::info!(
        log = ?log_path,
        model = %config.model.name,
        "gemchat v{} starting",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(note) = &fallback {
        tracing::warn!("{note}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let mut app = ChatApp::new(
        config.ui.clone(),
        config.model.name.clone(),
        runtime.handle().clone(),
    );
    app.initialize(|history| chat::open_session(&config, history));

    let mut terminal = tui::init_terminal()
        .map_err(|e| GemchatError::Terminal(format!("failed to set up terminal: {e}")))?;
    let result = tui::run(&mut terminal, &mut app);
    tui::restore_terminal()
        .map_err(|e| GemchatError::Terminal(format!("failed to restore terminal: {e}")))?;
    result?;

    tracing::info!(
        messages = app.messages().len(),
        tokens = app.tracker().total_tokens(),
        "shutdown complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    load_dotenv();
    install_panic_hook();

    let args = cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gemchat: {e}");
            ExitCode::FAILURE
        }
    }
}
