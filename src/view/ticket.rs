use tracing::debug;

use crate::client::ClientState;
use crate::item::entities::{CreateTicket, Priority, Ticket};

/// Support ticket view model.
pub struct TicketView {
    state: ClientState<Ticket>,
    pub added_name: String,
    pub added_problem: String,
    pub added_priority: Priority,
    /// Show only tickets of this priority; `None` shows all
    pub priority_filter: Option<Priority>,
}

impl TicketView {
    #[must_use]
    pub fn new(state: ClientState<Ticket>) -> Self {
        Self {
            state,
            added_name: String::new(),
            added_problem: String::new(),
            added_priority: Priority::default(),
            priority_filter: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ClientState<Ticket> {
        &self.state
    }

    pub async fn load(&self) {
        self.state.refresh().await;
    }

    #[must_use]
    pub fn tickets(&self) -> Vec<Ticket> {
        self.state.items()
    }

    #[must_use]
    pub fn filtered_tickets(&self) -> Vec<Ticket> {
        let filter = self.priority_filter;
        self.state
            .items()
            .into_iter()
            .filter(|ticket| match filter {
                Some(priority) => ticket.priority == priority,
                None => true,
            })
            .collect()
    }

    /// Post the drafted ticket and reset the drafts.
    pub async fn add_ticket(&mut self) -> Option<Ticket> {
        let fields = CreateTicket {
            name: Some(std::mem::take(&mut self.added_name)),
            problem: Some(std::mem::take(&mut self.added_problem)),
            priority: Some(std::mem::take(&mut self.added_priority)),
        };
        let created = self.state.add(fields).await;
        if created.is_none() {
            debug!("Ticket was not created");
        }
        created
    }

    pub async fn delete_ticket(&self, id: u64) -> bool {
        self.state.remove(id).await
    }
}

/// Creation date as `"{day} {MonthName} {year}"`, e.g. `5 February 2018`.
/// Empty when the ticket has no date.
#[must_use]
pub fn date_format(ticket: &Ticket) -> String {
    ticket
        .created_at
        .map(|date| date.format("%-d %B %Y").to_string())
        .unwrap_or_default()
}

#[must_use]
pub fn priority_name(priority: Priority) -> &'static str {
    priority.name()
}
