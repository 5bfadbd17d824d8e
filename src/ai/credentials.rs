// API key lookup for the lyric commentary client.
//
// The key is read from the OPENAI_API_KEY environment variable; a local
// .env file is loaded first so development setups work without exporting
// anything. No key is ever persisted by this crate.

use crate::error::AnalysisError;

const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Read the OpenAI API key from the environment.
///
/// Loads `.env` (if present) before the lookup. A missing or empty variable
/// surfaces `MissingApiKey` so callers can report the configuration problem
/// to the user before attempting any network call.
pub fn openai_api_key() -> Result<String, AnalysisError> {
    // Ignore a missing .env file; the variable may be exported directly
    let _ = dotenvy::dotenv();

    match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AnalysisError::MissingApiKey),
    }
}

/// Check whether an API key is configured without exposing it
pub fn has_api_key() -> bool {
    openai_api_key().is_ok()
}
