use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::core::crud::Record;

/// A todo list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: u64,
    pub text: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// When the item was last marked completed; cleared when it is reopened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Set the completed flag, stamping or clearing the completion date on a transition.
    pub fn set_completed(&mut self, completed: bool) {
        if completed && !self.completed {
            self.completed_date = Some(Utc::now());
        } else if !completed {
            self.completed_date = None;
        }
        self.completed = completed;
    }
}

/// Body of `POST /api/items`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl CreateTodo {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: false,
        }
    }
}

/// Body of `PUT /api/items/:id`
///
/// `orderChange` with an `orderTarget` moves the item to sit immediately before the
/// target item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default)]
    pub order_change: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_target: Option<u64>,
}

impl UpdateTodo {
    /// An update that only repositions the item before `target`.
    #[must_use]
    pub fn move_before(target: u64) -> Self {
        Self {
            order_change: true,
            order_target: Some(target),
            ..Self::default()
        }
    }
}

impl Record for TodoItem {
    type Create = CreateTodo;
    type Update = UpdateTodo;

    const NOUN: &'static str = "item";
    const COLLECTION: &'static str = "items";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_create(id: u64, fields: CreateTodo) -> Self {
        Self {
            id,
            text: fields.text,
            completed: fields.completed,
            completed_date: fields.completed.then(Utc::now),
        }
    }

    fn apply_update(&mut self, fields: &UpdateTodo) {
        if let Some(text) = &fields.text {
            self.text = Some(text.clone());
        }
        if let Some(completed) = fields.completed {
            self.set_completed(completed);
        }
    }

    fn reposition_target(fields: &UpdateTodo) -> Option<u64> {
        if fields.order_change {
            fields.order_target
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "todo_tests.rs"]
mod tests;
