// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod client;
pub mod cors;
pub mod http_logging;
pub mod item;
pub mod logging;
pub mod metrics;
pub mod server;
pub mod user_config;
pub mod view;

// Re-export commonly used types
pub use client::{ClientError, ClientState, ResourceClient};
pub use item::entities::{
    CreateTicket, CreateTodo, Priority, Ticket, TodoItem, UpdateTicket, UpdateTodo,
};
pub use item::store::{MemoryStore, SqliteTicketStore};
pub use item::{ItemError, ItemId, ItemStore, Record};
pub use server::{build_router, build_state, serve, AppState};
pub use view::{ShowFilter, TicketView, TodoView};
