// AI module for lyric commentary
//
// This module provides:
// - OpenAI chat-completions client for lyric analysis
// - API key lookup from the environment / .env file

pub mod client;
pub mod credentials;

// Re-export commonly used types
pub use client::OpenAiClient;
pub use credentials::openai_api_key;
