//! Shared client-side cache of one resource collection.
//!
//! The cache is a `watch` channel holding the whole collection. Every refresh
//! replaces it wholesale; subscribers see each replacement. Failed calls are
//! logged and dropped so the cache stays on its last good state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::api::ResourceClient;
use crate::item::core::crud::Record;

struct Shared<R> {
    api: ResourceClient<R>,
    cache: watch::Sender<Vec<R>>,
}

/// Cloning shares the cache: an action through any clone is seen by all.
pub struct ClientState<R> {
    inner: Arc<Shared<R>>,
}

impl<R> Clone for ClientState<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Record> ClientState<R> {
    /// Empty cache in front of `api`; call [`ClientState::refresh`] to populate it.
    #[must_use]
    pub fn new(api: ResourceClient<R>) -> Self {
        let (cache, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Shared { api, cache }),
        }
    }

    /// Shorthand for a state over a fresh client for `base_url`.
    #[must_use]
    pub fn connect(base_url: impl Into<String>) -> Self {
        Self::new(ResourceClient::new(base_url))
    }

    /// Refetch the whole collection and replace the cache. A failed fetch keeps
    /// the stale cache.
    pub async fn refresh(&self) {
        match self.inner.api.list().await {
            Ok(records) => {
                debug!(collection = R::COLLECTION, count = records.len(), "Refreshed cache");
                self.inner.cache.send_modify(|cache| *cache = records);
            }
            Err(e) => debug!(collection = R::COLLECTION, "Refresh failed: {e}"),
        }
    }

    /// Create a record, then refresh. Returns the created record on success.
    pub async fn add(&self, fields: R::Create) -> Option<R> {
        match self.inner.api.create(&fields).await {
            Ok(record) => {
                self.refresh().await;
                Some(record)
            }
            Err(e) => {
                debug!(collection = R::COLLECTION, "Create failed: {e}");
                None
            }
        }
    }

    /// Delete a record, then refresh. Returns whether the delete succeeded.
    pub async fn remove(&self, id: u64) -> bool {
        match self.inner.api.delete(id).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                debug!(collection = R::COLLECTION, id, "Delete failed: {e}");
                false
            }
        }
    }

    /// Update a record without refreshing; the cache may lag until the next refresh.
    pub async fn mutate(&self, id: u64, fields: R::Update) -> Option<R> {
        match self.inner.api.update(id, &fields).await {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(collection = R::COLLECTION, id, "Update failed: {e}");
                None
            }
        }
    }

    /// Snapshot of the cached collection.
    #[must_use]
    pub fn items(&self) -> Vec<R> {
        self.inner.cache.borrow().clone()
    }

    /// Receiver notified on every cache replacement or local edit.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<R>> {
        self.inner.cache.subscribe()
    }

    /// Edit the cache in place without talking to the server.
    pub fn modify_local<F>(&self, edit: F)
    where
        F: FnOnce(&mut Vec<R>),
    {
        self.inner.cache.send_modify(edit);
    }

    /// The underlying typed client.
    #[must_use]
    pub fn api(&self) -> &ResourceClient<R> {
        &self.inner.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::entities::TodoItem;

    fn todo(id: u64, text: &str) -> TodoItem {
        TodoItem {
            id,
            text: Some(text.to_string()),
            completed: false,
            completed_date: None,
        }
    }

    #[test]
    fn test_local_edits_are_shared_between_clones() {
        let state = ClientState::<TodoItem>::connect("http://127.0.0.1:9");
        let other = state.clone();
        state.modify_local(|items| items.push(todo(1, "a")));
        assert_eq!(other.items().len(), 1);
    }

    #[test]
    fn test_subscribers_see_local_edits() {
        let state = ClientState::<TodoItem>::connect("http://127.0.0.1:9");
        let mut rx = state.subscribe();
        state.modify_local(|items| items.push(todo(2, "b")));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().first().map(|t| t.id), Some(2));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_cache() {
        // Port 9 (discard) is not served; the fetch fails.
        let state = ClientState::<TodoItem>::connect("http://127.0.0.1:9");
        state.modify_local(|items| items.push(todo(3, "c")));
        state.refresh().await;
        assert_eq!(state.items(), vec![todo(3, "c")]);
    }

    #[tokio::test]
    async fn test_failed_add_and_remove_are_swallowed() {
        let state = ClientState::<TodoItem>::connect("http://127.0.0.1:9");
        assert!(state.add(crate::item::entities::CreateTodo::new("x")).await.is_none());
        assert!(!state.remove(1).await);
        assert!(state.items().is_empty());
    }
}
