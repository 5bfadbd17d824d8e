// Audio processing (DSP)
// Modules: decoder, capture, frames, chroma, chords, progression

pub mod capture;
pub mod chords;
pub mod chroma;
pub mod decoder;
pub mod frames;
pub mod progression;
