use std::time::Instant;
use tracing::info;

/// A timer that logs the duration of a store operation when dropped.
///
/// # Example
///
/// ```ignore
/// async fn list(State(store): State<Arc<dyn ItemStore<R>>>) -> Result<Json<Vec<R>>, ApiError> {
///     let _timer = OperationTimer::new("list", R::COLLECTION);
///     // ... implementation ...
/// }
/// ```
pub struct OperationTimer {
    name: &'static str,
    resource: &'static str,
    start: Instant,
}

impl OperationTimer {
    /// Create a new timer for an operation on a resource collection.
    #[must_use]
    pub fn new(name: &'static str, resource: &'static str) -> Self {
        Self {
            name,
            resource,
            start: Instant::now(),
        }
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        info!(
            operation = %self.name,
            resource = %self.resource,
            duration_ms = %duration.as_millis(),
            "Operation completed"
        );
    }
}

/// Generate a short request ID for correlation.
#[must_use]
pub fn generate_request_id() -> String {
    let uuid_str = uuid::Uuid::new_v4().to_string();
    uuid_str.get(..8).unwrap_or(&uuid_str).to_string()
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
