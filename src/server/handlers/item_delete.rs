use std::sync::Arc;

use axum::extract::{Path, State};
use tracing::info;

use crate::item::core::crud::{ItemStore, Record};
use crate::item::core::id::ItemId;
use crate::metrics::OperationTimer;
use crate::server::structured_error::ApiError;

/// `DELETE /api/{collection}/:id`: hard delete, answering `OK`.
pub async fn delete_item<R: Record>(
    State(store): State<Arc<dyn ItemStore<R>>>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let _timer = OperationTimer::new("delete", R::COLLECTION);
    let id = ItemId::parse(&id);
    store
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_store::<R, _>(&e))?;
    info!(noun = R::NOUN, id = %id, "Deleted record");
    Ok("OK")
}
