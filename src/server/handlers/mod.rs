//! REST handlers, one file per operation, generic over the record type.
//!
//! Every resource collection is served under `/api/{collection}` with the same
//! four routes; the store behind it is the router state.

pub mod health;
pub mod item_create;
pub mod item_delete;
pub mod item_list;
pub mod item_update;

use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;

use crate::item::core::crud::{ItemStore, Record};

/// Routes for one resource collection backed by `store`.
pub fn resource_router<R: Record>(store: Arc<dyn ItemStore<R>>) -> Router {
    let collection = format!("/api/{}", R::COLLECTION);
    let member = format!("/api/{}/:id", R::COLLECTION);
    Router::new()
        .route(
            &collection,
            get(item_list::list_items::<R>).post(item_create::create_item::<R>),
        )
        .route(
            &member,
            put(item_update::update_item::<R>).delete(item_delete::delete_item::<R>),
        )
        .with_state(store)
}
