use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::item::core::crud::ItemStore;
use crate::item::entities::{Ticket, TodoItem};
use crate::item::seed::demo_items;
use crate::item::store::{MemoryStore, SqliteTicketStore};
use crate::user_config::{TicketBackend, UserConfig};

use super::AppState;

/// Build the stores described by the user configuration.
///
/// # Errors
///
/// Fails when the sqlite ticket database cannot be opened or migrated.
pub fn build_state(config: &UserConfig) -> Result<AppState> {
    let tickets: Arc<dyn ItemStore<Ticket>> = match config.tickets.backend {
        TicketBackend::Memory => {
            info!("Tickets kept in memory");
            Arc::new(MemoryStore::<Ticket>::new())
        }
        TicketBackend::Sqlite => {
            let path = config.tickets.database_path();
            info!(path = %path.display(), "Tickets kept in sqlite");
            Arc::new(SqliteTicketStore::open(&path)?)
        }
    };

    let items: Arc<dyn ItemStore<TodoItem>> = if config.items.seed_demo_data {
        let seeded = demo_items(&mut rand::thread_rng());
        info!(count = seeded.len(), "Seeded items with demo data");
        Arc::new(MemoryStore::with_records(seeded))
    } else {
        Arc::new(MemoryStore::<TodoItem>::new())
    };

    Ok(AppState { items, tickets })
}
