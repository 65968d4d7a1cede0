mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so its level can drive the filter
    let loaded = match &args.config {
        Some(path) => tinct_config::load_from_path(path),
        None => tinct_config::load_config(),
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (tinct_config::TinctConfig::default(), Some(e)),
    };

    // Initialize logging
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("tinct={}", config.logging.level.as_str()));
    let directive: Directive = log_directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive {log_directive:?}: {e}");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::debug!(
        "tinct v{} (appearance mode: {:?})",
        env!("CARGO_PKG_VERSION"),
        config.appearance.mode
    );

    match commands::run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
