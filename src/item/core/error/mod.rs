//! Unified error types for item store operations.
mod impls;
use thiserror::Error;
/// Error type shared by every item store backend.
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Persistence failure: {0}")]
    Persistence(String),
}
#[cfg(test)]
#[path = "../error_tests.rs"]
mod error_tests;
