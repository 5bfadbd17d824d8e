// Error types shared across the analysis pipeline.
//
// The core chord estimation is a total function and never fails; errors only
// arise from bad configuration, the collaborator boundaries (decoding,
// rendering, the lyric commentary API), or a missing credential.

use thiserror::Error;

/// Errors surfaced by the analysis library
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Non-positive frame duration, or a derived frame length below one sample
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Audio file could not be opened or decoded
    #[error("failed to decode audio: {0}")]
    Decode(String),

    /// Timeline image could not be rendered or written
    #[error("failed to render timeline: {0}")]
    Render(String),

    /// OPENAI_API_KEY is not set in the environment or .env file
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    /// Lyric commentary request failed (network, HTTP status, or parse)
    #[error("lyric commentary request failed: {0}")]
    Api(String),
}
