//! View models over a [`ClientState`](crate::client::ClientState): client-local
//! filters, drafts and the actions a list UI dispatches.

pub mod filter;
pub mod graph;
pub mod ticket;
pub mod todo;

pub use filter::ShowFilter;
pub use graph::completion_histogram;
pub use ticket::{date_format, priority_name, TicketView};
pub use todo::{TodoView, TodoViewOptions};
