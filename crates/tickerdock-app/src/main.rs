mod app_state;
mod cli;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config (before logging init: the log level may come from it)
    let config_path = args.config.as_ref().map(PathBuf::from);
    let mut config = match &config_path {
        Some(path) => tickerdock_config::toml_loader::load_from_path(path),
        None => tickerdock_config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Config load failed, using defaults: {e}");
        tickerdock_config::TickerdockConfig::default()
    });

    // Initialize logging
    let log_directive = args
        .log_level
        .as_deref()
        .map(|level| format!("tickerdock={level}"))
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "tickerdock=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Tickerdock v{} starting...", env!("CARGO_PKG_VERSION"));

    // Apply CLI overrides
    if let Some(ref url) = args.url {
        tracing::info!("Using URL override: {url}");
        config.page.url = url.clone();
    }
    if args.no_dock {
        config.dock.enabled = false;
    }
    tracing::info!(
        url = %config.page.url,
        dock = config.dock.enabled,
        "Config loaded"
    );

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::TickerdockApp::new(config, config_path);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
