// Modules
pub mod ai;
pub mod audio;
pub mod error;
pub mod viz;

// Re-export the main analysis surface
pub use audio::chords::{estimate_chord, extract_chord_sequence};
pub use audio::decoder::{decode_to_mono, MonoAudio};
pub use audio::progression::{detect_progression, ProgressionMatch};
pub use error::AnalysisError;
