//! Type definitions for generation service interactions

use serde::{Deserialize, Serialize};

/// Chat-completions request payload
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
    pub response_format: ResponseFormat,
}

/// One message in a chat-completions request
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Response format directive
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    /// The service must answer with a single JSON object
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

/// Chat-completions response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

/// Message body of a completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

/// Token usage reported by the service
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ChatUsage {
    #[serde(default)]
    pub total_tokens: u64,
}

/// Request handed to a [`crate::GenerationService`]
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Fixed system role description
    pub system: String,
    /// Fully self-contained art prompt
    pub prompt: String,
}

/// Reply from a generation service
#[derive(Debug, Clone)]
pub struct GenerationReply {
    /// Raw content string, expected to be one JSON object
    pub content: String,
    /// Reported token usage, 0 when the service omitted it
    pub total_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_serializes_type_key() {
        let json = serde_json::to_string(&ResponseFormat::json_object()).unwrap();
        assert_eq!(json, r#"{"type":"json_object"}"#);
    }

    #[test]
    fn test_usage_defaults_to_zero() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"{}"}}]}"#).unwrap();
        assert!(response.usage.is_none());

        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"{}"}}],"usage":{}}"#,
        )
        .unwrap();
        assert_eq!(response.usage.unwrap().total_tokens, 0);
    }
}
