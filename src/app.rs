use clap::Parser;
use std::path::PathBuf;
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
/// Taskdesk - todo list and support ticket REST service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "TASKDESK_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins (not recommended for production).
    /// Example: --cors-origins=http://localhost:8080,https://desk.example.com
    #[arg(
        long,
        env = "TASKDESK_CORS_ORIGINS",
        default_value = crate::cors::DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,
    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "TASKDESK_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "TASKDESK_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,
    /// Custom log directory (default: ~/.taskdesk/logs)
    #[arg(long, env = "TASKDESK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
    /// User config file (default: ~/.taskdesk/config.toml)
    #[arg(long, env = "TASKDESK_CONFIG")]
    pub config: Option<PathBuf>,
    /// Keep tickets in this sqlite database instead of memory
    #[arg(long, env = "TASKDESK_TICKET_DB")]
    pub ticket_db: Option<PathBuf>,
    /// Fill the items store with generated completion history
    #[arg(long, env = "TASKDESK_SEED_DEMO_DATA", default_value = "false")]
    pub seed_demo_data: bool,
}
pub fn report_server_error(
    addr: std::net::SocketAddr,
    log_file: &std::path::Path,
    e: &std::io::Error,
) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of taskdesk may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill taskdesk");
        eprintln!("  2. Use a different port:        taskdesk --addr 127.0.0.1:3001");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return;
    }
    eprintln!();
    eprintln!("Error: Failed to start server: {e}");
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}
