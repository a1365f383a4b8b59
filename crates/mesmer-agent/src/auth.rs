//! Authentication for the generation service
//!
//! The API key is read from the environment on every request so a key
//! rotated mid-session is picked up without a restart.

use mesmer_core::{MesmerError, Result};
use std::env;

/// Resolve the generation service API key from `DEEPSEEK_API_KEY`
pub fn resolve_api_key() -> Result<String> {
    if let Ok(key) = env::var("DEEPSEEK_API_KEY") {
        if !key.trim().is_empty() {
            return Ok(key);
        }
    }

    Err(MesmerError::Auth(
        "No API credential found. Set DEEPSEEK_API_KEY=sk-... in the environment or an .env file."
            .to_string(),
    ))
}
