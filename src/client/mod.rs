//! Client side: typed REST calls and the shared collection cache views render from.

pub mod api;
pub mod error;
pub mod state;

pub use api::ResourceClient;
pub use error::ClientError;
pub use state::ClientState;
