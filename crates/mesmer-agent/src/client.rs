//! DeepSeek-compatible chat-completions client
//!
//! One request per artwork, fully synchronous from the session's point of
//! view. Failures are not retried here: the session loop treats any
//! propagated error as fatal, so retrying silently would hide spend.

use crate::auth;
use crate::types::{
    ChatMessage, ChatRequest, ChatResponse, GenerationReply, GenerationRequest, ResponseFormat,
};
use async_trait::async_trait;
use mesmer_core::{MesmerError, Result};

pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-reasoner";

/// Fixed token budget per generation request
const DEFAULT_MAX_TOKENS: u32 = 20000;

/// Fixed high sampling temperature, favors creative diversity
const SAMPLING_TEMPERATURE: f32 = 0.9;

/// Seam between the pipeline and the remote generation service
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Issue one generation request and return the raw reply
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationReply>;
}

/// HTTP client for the DeepSeek chat-completions API
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    http: reqwest::Client,
    api_url: String,
    model: String,
    max_tokens: u32,
}

impl DeepSeekClient {
    /// Create a new client against the given endpoint and model
    pub fn new(api_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Override the per-request token budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl Default for DeepSeekClient {
    fn default() -> Self {
        Self::new(DEEPSEEK_API_URL, DEFAULT_MODEL)
    }
}

#[async_trait]
impl GenerationService for DeepSeekClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationReply> {
        let api_key = auth::resolve_api_key()?;

        let payload = ChatRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: SAMPLING_TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            response_format: ResponseFormat::json_object(),
        };

        tracing::debug!(
            "Sending generation request to {} ({} prompt chars)",
            self.api_url,
            request.prompt.len()
        );

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&api_key)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| MesmerError::Service(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown".to_string());
            return Err(MesmerError::Service(format!(
                "Generation service error {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| MesmerError::Service(format!("Failed to parse response: {}", e)))?;

        let content = chat_response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| MesmerError::Service("No choices in response".to_string()))?;

        let total_tokens = chat_response
            .usage
            .map(|usage| usage.total_tokens)
            .unwrap_or(0);

        tracing::info!(
            "Generation reply received ({} chars, {} tokens)",
            content.len(),
            total_tokens
        );

        Ok(GenerationReply {
            content,
            total_tokens,
        })
    }
}
