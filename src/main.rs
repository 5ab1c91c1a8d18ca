use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use taskdesk::app::{report_server_error, Args};
use taskdesk::cors::normalize_origins;
use taskdesk::logging::{self, default_log_dir, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use taskdesk::server::{build_router, build_state, serve, shutdown_signal};
use taskdesk::user_config::{self, UserConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);
    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // User config is optional; a broken file falls back to defaults.
    let loaded = match &args.config {
        Some(path) => user_config::load_user_config_from(path),
        None => user_config::load_user_config(),
    };
    let user_cfg = loaded
        .unwrap_or_else(|e| {
            warn!("Failed to load user config, using defaults: {e}");
            UserConfig::default()
        })
        .with_overrides(args.ticket_db.clone(), args.seed_demo_data);

    let addr: std::net::SocketAddr = args.addr.parse()?;

    let cors_origins = normalize_origins(&args.cors_origins);
    info!(
        "CORS origins: {}",
        if cors_origins.iter().any(|o| o == "*") {
            "*".to_string()
        } else {
            cors_origins.join(", ")
        }
    );

    let state = build_state(&user_cfg).map_err(|e| eyre!("{e:#}"))?;
    let router = build_router(state, cors_origins);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!("Starting taskdesk on {addr}");
    if let Err(e) = serve(listener, router, shutdown_signal()).await {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("Taskdesk stopped");
    Ok(())
}
