mod priority;

pub use priority::{Priority, PriorityError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::core::crud::Record;

/// A support ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub name: Option<String>,
    pub problem: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// Set by the store at creation
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/tickets`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTicket {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl CreateTicket {
    #[must_use]
    pub fn new(name: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            problem: Some(problem.into()),
            priority: None,
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Body of `PUT /api/tickets/:id`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTicket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Record for Ticket {
    type Create = CreateTicket;
    type Update = UpdateTicket;

    const NOUN: &'static str = "ticket";
    const COLLECTION: &'static str = "tickets";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_create(id: u64, fields: CreateTicket) -> Self {
        Self {
            id,
            name: fields.name,
            problem: fields.problem,
            priority: fields.priority.unwrap_or_default(),
            created_at: Some(Utc::now()),
        }
    }

    fn apply_update(&mut self, fields: &UpdateTicket) {
        if let Some(name) = &fields.name {
            self.name = Some(name.clone());
        }
        if let Some(problem) = &fields.problem {
            self.problem = Some(problem.clone());
        }
        if let Some(priority) = fields.priority {
            self.priority = priority;
        }
    }
}
