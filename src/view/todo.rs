use futures::future::join_all;
use tracing::debug;

use super::filter::ShowFilter;
use crate::client::ClientState;
use crate::item::core::order::move_before;
use crate::item::entities::{CreateTodo, TodoItem, UpdateTodo};

/// Which local actions are written back to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoViewOptions {
    /// Send an update when an item's completion is toggled
    pub sync_completion: bool,
    /// Send a reposition update when an item is dropped
    pub persist_order: bool,
}

impl Default for TodoViewOptions {
    fn default() -> Self {
        Self {
            sync_completion: true,
            persist_order: true,
        }
    }
}

/// Todo list view model.
pub struct TodoView {
    state: ClientState<TodoItem>,
    options: TodoViewOptions,
    /// Draft text of the next item
    pub message: String,
    pub show: ShowFilter,
    dragging: Option<u64>,
}

impl TodoView {
    #[must_use]
    pub fn new(state: ClientState<TodoItem>) -> Self {
        Self::with_options(state, TodoViewOptions::default())
    }

    #[must_use]
    pub fn with_options(state: ClientState<TodoItem>, options: TodoViewOptions) -> Self {
        Self {
            state,
            options,
            message: String::new(),
            show: ShowFilter::All,
            dragging: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ClientState<TodoItem> {
        &self.state
    }

    /// Load the collection from the server.
    pub async fn load(&self) {
        self.state.refresh().await;
    }

    /// Every cached item, in display order.
    #[must_use]
    pub fn todos(&self) -> Vec<TodoItem> {
        self.state.items()
    }

    /// Items passing the current filter, in display order.
    #[must_use]
    pub fn filtered_todos(&self) -> Vec<TodoItem> {
        let show = self.show;
        self.state
            .items()
            .into_iter()
            .filter(|item| show.matches(item))
            .collect()
    }

    #[must_use]
    pub fn active_todos(&self) -> Vec<TodoItem> {
        self.state
            .items()
            .into_iter()
            .filter(|item| !item.completed)
            .collect()
    }

    pub fn show_all(&mut self) {
        self.show = ShowFilter::All;
    }

    pub fn show_active(&mut self) {
        self.show = ShowFilter::Active;
    }

    pub fn show_completed(&mut self) {
        self.show = ShowFilter::Completed;
    }

    /// Post the drafted message as a new item and clear the draft.
    pub async fn add_item(&mut self) -> Option<TodoItem> {
        let text = std::mem::take(&mut self.message);
        self.state
            .add(CreateTodo {
                text: Some(text),
                completed: false,
            })
            .await
    }

    /// Flip an item's completion in the cache, then sync it if enabled.
    pub async fn complete_item(&self, id: u64) {
        let mut toggled = None;
        self.state.modify_local(|items| {
            if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                item.set_completed(!item.completed);
                toggled = Some(item.completed);
            }
        });
        let Some(completed) = toggled else {
            debug!(id, "Toggled item not in cache");
            return;
        };
        if self.options.sync_completion {
            let update = UpdateTodo {
                completed: Some(completed),
                ..UpdateTodo::default()
            };
            if self.state.mutate(id, update).await.is_none() {
                debug!(id, "Completion was not synced");
            }
        }
    }

    pub async fn delete_item(&self, id: u64) -> bool {
        self.state.remove(id).await
    }

    /// Delete every completed item, one request each. Returns how many succeeded.
    pub async fn delete_completed(&self) -> usize {
        let completed: Vec<u64> = self
            .state
            .items()
            .iter()
            .filter(|item| item.completed)
            .map(|item| item.id)
            .collect();
        join_all(completed.into_iter().map(|id| self.state.remove(id)))
            .await
            .into_iter()
            .filter(|removed| *removed)
            .count()
    }

    /// Start dragging an item.
    pub fn drag_item(&mut self, id: u64) {
        self.dragging = Some(id);
    }

    #[must_use]
    pub fn dragging(&self) -> Option<u64> {
        self.dragging
    }

    /// Drop the dragged item immediately before `target`, then persist the new
    /// position if enabled. Without a drag in progress nothing happens.
    ///
    /// Uses the store's reposition rule, so dragging 1 onto 3 in `[1,2,3,4]` gives
    /// `[2,1,3,4]` locally and on the server alike.
    pub async fn drop_item(&mut self, target: u64) {
        let Some(id) = self.dragging.take() else {
            return;
        };
        if id == target {
            return;
        }
        let mut moved = false;
        self.state.modify_local(|items| {
            let from = items.iter().position(|item| item.id == id);
            let to = items.iter().position(|item| item.id == target);
            if let (Some(from), Some(to)) = (from, to) {
                move_before(items, from, to);
                moved = true;
            }
        });
        if !moved {
            debug!(id, target, "Dropped item or target not in cache");
            return;
        }
        if self.options.persist_order
            && self
                .state
                .mutate(id, UpdateTodo::move_before(target))
                .await
                .is_none()
        {
            debug!(id, target, "New order was not persisted");
        }
    }
}
