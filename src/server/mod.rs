//! REST server: shared state, router assembly and the serve loop.

pub mod error_mapping;
pub mod handlers;
pub mod startup;
pub mod structured_error;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::cors::build_cors_layer;
use crate::http_logging::HttpLoggingLayer;
use crate::item::core::crud::ItemStore;
use crate::item::entities::{Ticket, TodoItem};
use crate::item::store::MemoryStore;

pub use startup::build_state;
pub use structured_error::{ApiError, StructuredError};

/// Stores served by one router.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemStore<TodoItem>>,
    pub tickets: Arc<dyn ItemStore<Ticket>>,
}

impl AppState {
    /// Both resources backed by empty in-memory stores.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            items: Arc::new(MemoryStore::<TodoItem>::new()),
            tickets: Arc::new(MemoryStore::<Ticket>::new()),
        }
    }
}

/// Assemble the full router: both resource collections plus `/health`, wrapped
/// in the CORS and request logging layers.
pub fn build_router(state: AppState, cors_origins: Vec<String>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .merge(handlers::resource_router(state.items))
        .merge(handlers::resource_router(state.tickets))
        .layer(build_cors_layer(cors_origins))
        .layer(HttpLoggingLayer)
}

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Serving taskdesk on http://{addr}");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal, stopping server..."),
        Err(e) => {
            tracing::warn!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
