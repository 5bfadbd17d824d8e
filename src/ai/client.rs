// OpenAI API client for lyric commentary
//
// Sends lyric text to the chat-completions endpoint and returns the model's
// commentary on themes, emotions, and harmonic content. The client is a thin
// collaborator: the chord analysis core never touches the network.

use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::AnalysisError;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_MODEL: &str = "gpt-4";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 300;

const SYSTEM_PROMPT: &str = "You are a music expert.";

/// Message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String, // "system" or "user" or "assistant"
    pub content: String,
}

/// Request to the chat-completions endpoint
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

/// Response from the chat-completions endpoint
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

pub struct OpenAiClient {
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    /// Create a new client with the given API key
    pub fn new(api_key: String) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AnalysisError::Api(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, client })
    }

    /// Analyze song lyrics: themes, emotions, and harmonic content.
    pub async fn analyze_lyrics(&self, lyrics: &str) -> Result<String, AnalysisError> {
        let request = build_lyrics_request(lyrics);

        let response = self
            .client
            .post(OPENAI_API_URL)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Api(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AnalysisError::Api(format!("API error {}: {}", status, error_text)));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Api(format!("failed to parse response: {}", e)))?;

        let commentary = chat_response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| AnalysisError::Api("response contained no choices".to_string()))?;

        Ok(commentary)
    }
}

/// Build the request body for a lyric analysis call
fn build_lyrics_request(lyrics: &str) -> ChatRequest {
    ChatRequest {
        model: OPENAI_MODEL.to_string(),
        messages: vec![
            Message {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: "user".to_string(),
                content: format!(
                    "Analyze the following song lyrics and identify the themes, emotions, and any harmonic progressions:\n{}",
                    lyrics
                ),
            },
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}
