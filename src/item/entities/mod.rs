//! Concrete record types kept by the item stores.

pub mod ticket;
pub mod todo;

pub use ticket::{CreateTicket, Priority, PriorityError, Ticket, UpdateTicket};
pub use todo::{CreateTodo, TodoItem, UpdateTodo};
