//! User-level configuration loaded from `~/.taskdesk/config.toml`.
//!
//! The file is optional; absent sections and fields fall back to their
//! `Default` values. Command-line flags override what the file says.

mod loader;
pub use loader::{load_user_config, load_user_config_from};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Where tickets are kept.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketBackend {
    #[default]
    Memory,
    Sqlite,
}

/// `[tickets]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TicketsConfig {
    #[serde(default)]
    pub backend: TicketBackend,
    /// Database file for the sqlite backend (default: `~/.taskdesk/tickets.db`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

impl TicketsConfig {
    /// Database path, falling back to `~/.taskdesk/tickets.db`.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| taskdesk_home().join("tickets.db"))
    }
}

/// `[items]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ItemsConfig {
    /// Fill the items store with generated completion history at startup
    #[serde(default)]
    pub seed_demo_data: bool,
}

/// Top-level user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserConfig {
    #[serde(default)]
    pub tickets: TicketsConfig,
    #[serde(default)]
    pub items: ItemsConfig,
}

impl UserConfig {
    /// Apply command-line overrides. A ticket database path switches the
    /// ticket backend to sqlite.
    #[must_use]
    pub fn with_overrides(mut self, ticket_db: Option<PathBuf>, seed_demo_data: bool) -> Self {
        if let Some(path) = ticket_db {
            self.tickets.backend = TicketBackend::Sqlite;
            self.tickets.database = Some(path);
        }
        if seed_demo_data {
            self.items.seed_demo_data = true;
        }
        self
    }
}

/// Directory holding user-scoped data (`~/.taskdesk`).
#[must_use]
pub fn taskdesk_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".taskdesk")
}

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".taskdesk").join("config.toml"))
}

#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
