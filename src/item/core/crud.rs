//! Generic CRUD operations trait for item stores.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ItemError;
use super::id::ItemId;

/// A record kept by an item store (a todo item, a ticket).
///
/// The associated `Create` and `Update` types are the request payloads that build
/// and overwrite a record; they travel over the wire in both directions.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Fields supplied when creating a record
    type Create: Serialize + DeserializeOwned + Send + Sync + 'static;
    /// Fields supplied when updating a record; absent fields stay untouched
    type Update: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Singular noun used in messages ("item", "ticket")
    const NOUN: &'static str;
    /// Collection segment under `/api` ("items", "tickets")
    const COLLECTION: &'static str;

    /// The store-assigned identifier.
    fn id(&self) -> u64;

    /// Build a new record from the creation fields and a freshly allocated id.
    fn from_create(id: u64, fields: Self::Create) -> Self;

    /// Overwrite the supplied fields in place.
    fn apply_update(&mut self, fields: &Self::Update);

    /// Target id for a reposition instruction carried by an update, if any.
    ///
    /// The record is moved to sit immediately before the target.
    fn reposition_target(_fields: &Self::Update) -> Option<u64> {
        None
    }
}

/// Generic CRUD operations over an ordered collection of records.
///
/// Implementations own the canonical collection. Object safe, so routers hold
/// `Arc<dyn ItemStore<R>>` and the backend can be picked at startup.
#[async_trait]
pub trait ItemStore<R: Record>: Send + Sync {
    /// Every record, in display order
    async fn list(&self) -> Result<Vec<R>, ItemError>;

    /// Create a record with the next id and append it
    async fn create(&self, fields: R::Create) -> Result<R, ItemError>;

    /// Overwrite the supplied fields of an existing record
    async fn update(&self, id: &ItemId, fields: R::Update) -> Result<R, ItemError>;

    /// Delete a record (hard delete)
    async fn delete(&self, id: &ItemId) -> Result<(), ItemError>;
}
