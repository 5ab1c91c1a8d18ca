use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::item::core::crud::{ItemStore, Record};
use crate::metrics::OperationTimer;
use crate::server::structured_error::ApiError;

/// `POST /api/{collection}`: create a record and return it with its new id.
pub async fn create_item<R: Record>(
    State(store): State<Arc<dyn ItemStore<R>>>,
    Json(fields): Json<R::Create>,
) -> Result<Json<R>, ApiError> {
    let _timer = OperationTimer::new("create", R::COLLECTION);
    let record = store
        .create(fields)
        .await
        .map_err(|e| ApiError::from_store::<R, _>(&e))?;
    info!(noun = R::NOUN, id = record.id(), "Created record");
    Ok(Json(record))
}
