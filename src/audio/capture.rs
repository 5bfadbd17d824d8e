// Microphone capture assembly.
//
// The capture device itself belongs to the UI layer; it hands over raw i16
// PCM frames as they arrive. This module accumulates those frames, exposes
// an RMS level percentage for a live meter, and converts the finished
// recording into the same `MonoAudio` the file decoder produces, so the
// analysis pipeline does not care where the samples came from.

use crate::audio::decoder::MonoAudio;

/// An in-progress microphone recording assembled from raw PCM frames
#[derive(Debug, Clone)]
pub struct Recording {
    frames: Vec<Vec<i16>>,
    sample_rate: u32,
    level: u8,
}

impl Recording {
    /// Start an empty recording at the capture device's sample rate
    pub fn new(sample_rate: u32) -> Self {
        Self {
            frames: Vec::new(),
            sample_rate,
            level: 0,
        }
    }

    /// Append one captured PCM frame and update the level meter
    pub fn push_frame(&mut self, pcm: &[i16]) {
        self.level = rms_level_percent(pcm);
        self.frames.push(pcm.to_vec());
    }

    /// RMS level of the most recent frame, as a 0-99 percentage
    pub fn level_percent(&self) -> u8 {
        self.level
    }

    /// True when no frames have been captured yet
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total number of captured samples across all frames
    pub fn len(&self) -> usize {
        self.frames.iter().map(|f| f.len()).sum()
    }

    /// Convert the recording into a mono analysis buffer.
    ///
    /// Frames are concatenated in arrival order and scaled from i16 to
    /// [-1.0, 1.0] f32.
    pub fn into_mono(self) -> MonoAudio {
        let mut samples = Vec::with_capacity(self.len());
        for frame in &self.frames {
            samples.extend(frame.iter().map(|&s| s as f32 / 32768.0));
        }
        MonoAudio {
            samples,
            sample_rate: self.sample_rate,
        }
    }
}

/// RMS amplitude of a PCM frame as a percentage of full scale, capped at 99
/// so a level meter never shows a full bar.
fn rms_level_percent(pcm: &[i16]) -> u8 {
    if pcm.is_empty() {
        return 0;
    }
    let mean_square: f64 = pcm
        .iter()
        .map(|&s| {
            let v = s as f64;
            v * v
        })
        .sum::<f64>()
        / pcm.len() as f64;
    let percent = (mean_square.sqrt() / 32768.0 * 100.0) as u8;
    percent.min(99)
}
