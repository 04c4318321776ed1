//! Boundary to the external text generation service.

pub mod error;
pub mod generation_client;
pub mod prompts;
pub mod transport;

pub use error::GenerationError;
pub use generation_client::{GenerationClient, CHAT_EMPTY_REPLY, CHAT_FAILURE_REPLY};
pub use transport::GenerationTransport;
