//! # mesmer-core
//!
//! Core types for the Mesmer generation agent.
//!
//! Mesmer produces animated SVG artworks by prompting a remote language
//! model, validating what comes back, and pricing accepted pieces by
//! rarity. This crate holds the vocabulary shared by every other crate:
//! the rarity tiers and their static tables, the artwork record, the
//! session accounting state, and the unified error type.

mod error;
mod types;

pub use error::{MesmerError, Result};
pub use types::*;
