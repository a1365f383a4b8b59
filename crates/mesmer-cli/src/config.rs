//! Environment configuration for the binary
//!
//! Resolved once at startup. A missing API credential is a fatal
//! startup condition reported to the operator here, before any of the
//! pipeline runs.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub model: String,
    pub gallery_dir: PathBuf,
    pub market_command: String,
    pub market_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        // Fail fast when the credential is absent; the client re-reads it
        // per request.
        mesmer_agent::resolve_api_key()
            .context("set DEEPSEEK_API_KEY in the environment or an .env file")?;

        if env::var("STRIPE_SECRET_KEY").is_err() {
            tracing::warn!("STRIPE_SECRET_KEY is not set; marketplace payments stay disabled");
        }

        Ok(Config {
            api_url: env::var("DEEPSEEK_API_URL")
                .unwrap_or_else(|_| mesmer_agent::DEEPSEEK_API_URL.into()),
            model: env::var("MESMER_MODEL").unwrap_or_else(|_| mesmer_agent::DEFAULT_MODEL.into()),
            gallery_dir: env::var("MESMER_GALLERY_DIR")
                .unwrap_or_else(|_| "gallery".into())
                .into(),
            market_command: env::var("MESMER_MARKET_CMD")
                .unwrap_or_else(|_| "python3 marketplace.py".into()),
            market_url: env::var("MESMER_MARKET_URL")
                .unwrap_or_else(|_| "http://localhost:5000".into()),
        })
    }
}
