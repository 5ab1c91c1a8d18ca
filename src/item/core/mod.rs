//! Core item domain types and traits.

pub mod crud;
pub mod error;
pub mod id;
pub mod order;
