use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::item::core::crud::{ItemStore, Record};
use crate::metrics::OperationTimer;
use crate::server::structured_error::ApiError;

/// `GET /api/{collection}`: every record in display order.
pub async fn list_items<R: Record>(
    State(store): State<Arc<dyn ItemStore<R>>>,
) -> Result<Json<Vec<R>>, ApiError> {
    let _timer = OperationTimer::new("list", R::COLLECTION);
    store
        .list()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_store::<R, _>(&e))
}
