mod init;
pub use init::{init_logging, parse_rotation};
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used by the server.
pub const LOG_FILENAME: &str = "taskdesk.log";
/// Default `EnvFilter` target when `RUST_LOG` is not set.
pub const LOG_TARGET: &str = "taskdesk";
/// Global log file path, set once at startup.
static LOG_FILE_PATH: OnceLock<String> = OnceLock::new();
/// Store the log file path for later retrieval (e.g., in structured error responses).
///
/// Only the first call has an effect.
pub fn set_log_file_path(path: String) {
    if LOG_FILE_PATH.set(path).is_err() {
        tracing::debug!("Log file path already set");
    }
}
/// Get the log file path set at startup.
pub fn get_log_file_path() -> &'static str {
    LOG_FILE_PATH.get().map_or("", |s| s.as_str())
}
/// Default log directory (`~/.taskdesk/logs`).
#[must_use]
pub fn default_log_dir() -> PathBuf {
    crate::user_config::taskdesk_home().join("logs")
}
/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
