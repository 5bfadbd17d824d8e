// Frame segmentation for chord analysis.
//
// The buffer is cut into consecutive non-overlapping windows of exactly
// `frame_length` samples starting at offset 0. A trailing window shorter
// than `frame_length` is discarded, never zero-padded, so every emitted
// window carries the same duration of audio.

use crate::error::AnalysisError;

/// Compute the analysis frame length in samples.
///
/// `frame_length = floor(sample_rate × frame_duration)`. Fails fast with
/// `InvalidConfiguration` for a non-positive duration or when the product
/// rounds below one sample — downstream code must never see a zero-length
/// window.
pub fn frame_length(sample_rate: u32, frame_duration: f32) -> Result<usize, AnalysisError> {
    if !(frame_duration > 0.0) {
        return Err(AnalysisError::InvalidConfiguration(format!(
            "frame duration must be positive, got {}",
            frame_duration
        )));
    }

    let length = (sample_rate as f64 * frame_duration as f64).floor() as usize;
    if length < 1 {
        return Err(AnalysisError::InvalidConfiguration(format!(
            "frame length below one sample ({} Hz × {} s)",
            sample_rate, frame_duration
        )));
    }

    Ok(length)
}

/// Split a sample buffer into analysis windows of `frame_length` samples.
///
/// Returns exactly `floor(samples.len() / frame_length)` windows in temporal
/// order. A buffer shorter than one frame yields no windows, which is a
/// valid (informationless) result rather than an error.
pub fn split_frames(samples: &[f32], frame_length: usize) -> impl Iterator<Item = &[f32]> {
    samples.chunks_exact(frame_length)
}
