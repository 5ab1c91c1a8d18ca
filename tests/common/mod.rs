//! Common test utilities

use taskdesk::server::{build_router, AppState};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Create a temporary directory for testing
#[allow(dead_code)] // Test utility for integration tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Serve `state` on an ephemeral local port and return the base URL.
///
/// The server task lives until the test runtime shuts down.
#[allow(dead_code)] // Test utility for integration tests
pub async fn spawn_server(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Listener has no address");
    let router = build_router(state, vec!["*".to_string()]);
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Server stopped with an error");
    });
    format!("http://{addr}")
}
