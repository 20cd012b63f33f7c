mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use splitscreen_config::SplitscreenConfig;

const DEFAULT_LOG_DIRECTIVE: &str = "splitscreen=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = splitscreen_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Splitscreen crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("---------------------------\n");

        default_hook(info);
    }));
}

fn init_logging(directive: &str) {
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>());
    let filter = match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Apply command-line overrides on top of the loaded config.
fn apply_overrides(config: &mut SplitscreenConfig, args: &cli::Args) {
    if let Some(url) = &args.url {
        config.panes.default_url = url.clone();
    }
    if let Some(n) = args.panes {
        config.panes.initial_count = n;
        if config.panes.initial_unmuted > n {
            config.panes.initial_unmuted = 0;
        }
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Load before logging so the configured level applies; report afterwards.
    let loaded = match &args.config {
        Some(path) => splitscreen_config::load_config_from(Path::new(path)),
        None => splitscreen_config::load_config(),
    };

    let config_directive = loaded
        .as_ref()
        .map(|c| c.logging.level.directive())
        .unwrap_or(DEFAULT_LOG_DIRECTIVE);
    init_logging(args.log_level.as_deref().unwrap_or(config_directive));

    tracing::info!("Splitscreen v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        SplitscreenConfig::default()
    });
    apply_overrides(&mut config, &args);
    tracing::info!(
        url = %config.panes.default_url,
        panes = config.panes.initial_count,
        "Config loaded"
    );
    tracing::debug!(
        config = %splitscreen_config::config_to_json(&config),
        "Effective config"
    );

    if let Err(e) = splitscreen_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::SplitscreenApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
