use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::item::core::crud::{ItemStore, Record};
use crate::item::core::id::ItemId;
use crate::metrics::OperationTimer;
use crate::server::structured_error::ApiError;

/// `PUT /api/{collection}/:id`: overwrite the supplied fields, returning the
/// updated record.
pub async fn update_item<R: Record>(
    State(store): State<Arc<dyn ItemStore<R>>>,
    Path(id): Path<String>,
    Json(fields): Json<R::Update>,
) -> Result<Json<R>, ApiError> {
    let _timer = OperationTimer::new("update", R::COLLECTION);
    let id = ItemId::parse(&id);
    store
        .update(&id, fields)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_store::<R, _>(&e))
}
