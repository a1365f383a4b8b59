//! # mesmer-agent
//!
//! Client for the remote generation service.
//!
//! Each artwork is produced by exactly one stateless request: a fixed
//! system role, a fully self-contained art prompt, and a JSON-object
//! response format. There is no conversation history and no internal
//! retry: a transport failure, a non-2xx status, or an unparsable body
//! surfaces as one `MesmerError::Service` and the caller decides what
//! the session does with it.
//!
//! The [`GenerationService`] trait is the seam the rest of the system
//! depends on, so tests can script replies without a network.

mod auth;
mod client;
mod types;

pub use auth::resolve_api_key;
pub use client::{DeepSeekClient, GenerationService, DEEPSEEK_API_URL, DEFAULT_MODEL};
pub use types::*;
