//! Wire types for the chat-completions endpoint.

use serde::{Deserialize, Serialize};

/// One message in the completion conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system", content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user", content: content.into() }
    }
}

/// Sampling bounds for one completion call.
///
/// Handlers pick a preset per route; creative generation runs hot,
/// translation runs cold for consistency.
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Preset for note/rewrite/card generation.
pub const CREATIVE: CompletionParams = CompletionParams { temperature: 0.85, max_tokens: 2048 };

/// Preset for translation.
pub const TRANSLATION: CompletionParams = CompletionParams { temperature: 0.3, max_tokens: 2048 };

/// Request body for `/chat/completions`.
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Response body from `/chat/completions`.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: String,
}
