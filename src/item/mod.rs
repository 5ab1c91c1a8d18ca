//! Item domain: record types, the store contract and its backends.

pub mod core;
pub mod entities;
pub mod seed;
pub mod store;

// Re-export core types
pub use core::crud::{ItemStore, Record};
pub use core::error::ItemError;
pub use core::id::ItemId;
