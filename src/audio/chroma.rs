// Pitch-class profiling for one analysis window.
//
// Produces a 12-bin chroma-style energy vector: Hann-windowed FFT frames are
// taken across the analysis window, each spectral bin between 65 Hz and
// 2000 Hz is mapped to its semitone class (12-TET, A4 = 440 Hz, C = index 0),
// and power is summed per class across all frames and octaves. The vector is
// normalized to sum 1.0 so that chord quality, not loudness, drives the
// downstream template score. A silent window yields the all-zero vector.

use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;

/// FFT frame size for the pitch-class projection.
/// 4096 samples gives ~10 Hz resolution at 44100 Hz, enough to separate
/// adjacent semitones down to the bottom of the analysis range.
const FFT_SIZE: usize = 4096;

/// Hop between consecutive FFT frames inside one analysis window (50% overlap).
const HOP_SIZE: usize = 2048;

/// Lower bound of the projected range (Hz). Below ~C2 bass rumble and noise
/// dominate the spectrum.
const MIN_FREQ: f64 = 65.0;

/// Upper bound of the projected range (Hz). Above ~2 kHz harmonics rather
/// than fundamentals dominate and distort the pitch-class distribution.
const MAX_FREQ: f64 = 2000.0;

/// Compute the 12-bin pitch-class energy profile of one analysis window.
///
/// An analysis window shorter than the FFT size is zero-padded to a single
/// FFT frame; longer windows are processed as overlapping frames and the
/// per-class power is accumulated across all of them.
pub fn pitch_class_profile(window: &[f32], sample_rate: u32) -> [f64; 12] {
    let mut profile = [0.0f64; 12];
    if window.is_empty() || sample_rate == 0 {
        return profile;
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(FFT_SIZE);

    // Precompute Hann coefficients for one FFT frame
    let hann: Vec<f64> = (0..FFT_SIZE)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / (FFT_SIZE - 1) as f64).cos()))
        .collect();

    // Precompute the bin → pitch-class mapping.
    // semitones_from_A = 12 · log2(freq / 440); +9 shifts A-based indexing to
    // C-based (C = 0, ..., A = 9, ..., B = 11).
    let bin_to_pitch_class: Vec<Option<usize>> = (0..FFT_SIZE / 2 + 1)
        .map(|bin| {
            let freq = bin as f64 * sample_rate as f64 / FFT_SIZE as f64;
            if freq < MIN_FREQ || freq > MAX_FREQ {
                None
            } else {
                let semitones_from_a = 12.0 * (freq / 440.0).log2();
                let pitch_class = ((semitones_from_a.round() as i32 + 9) % 12 + 12) % 12;
                Some(pitch_class as usize)
            }
        })
        .collect();

    let mut buffer = vec![Complex::new(0.0f64, 0.0); FFT_SIZE];

    // Frame start offsets: at least one frame even for short windows
    let mut start = 0;
    loop {
        let frame = &window[start..window.len().min(start + FFT_SIZE)];

        // Hann-window the frame, zero-padding up to the FFT size
        for (i, slot) in buffer.iter_mut().enumerate() {
            let sample = frame.get(i).copied().unwrap_or(0.0) as f64;
            *slot = Complex::new(sample * hann[i], 0.0);
        }

        fft.process(&mut buffer);

        // Accumulate power per pitch class
        for (bin, pc) in bin_to_pitch_class.iter().enumerate() {
            if let Some(pc) = pc {
                profile[*pc] += buffer[bin].norm_sqr();
            }
        }

        start += HOP_SIZE;
        if start + FFT_SIZE > window.len() {
            break;
        }
    }

    // Normalize to sum 1.0 to remove amplitude and duration dependence.
    // Silence stays the all-zero vector.
    let total: f64 = profile.iter().sum();
    if total > 0.0 {
        for value in profile.iter_mut() {
            *value /= total;
        }
    }

    profile
}
