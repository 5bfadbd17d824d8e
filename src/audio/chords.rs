// Chord estimation via binary template matching.
//
// Algorithm overview:
// 1. Segment the buffer into fixed-duration windows (frames module)
// 2. Compute a 12-bin pitch-class profile per window (chroma module)
// 3. Score the profile against every (root, quality) template: the template
//    has 1 at (root + interval) mod 12 for each interval of the quality, and
//    the score is the plain dot product — energy on chord tones counts,
//    off-template energy is never penalized
// 4. Emit the label of the highest-scoring combination per window
//
// Enumeration order is part of the observable contract: roots C..B outer,
// qualities in table order inner, and only a strictly greater score replaces
// the current best. Ties therefore resolve to the first combination reached,
// which keeps degenerate inputs (silence, flat profiles) deterministic.

use crate::audio::chroma::pitch_class_profile;
use crate::audio::frames::{frame_length, split_frames};
use crate::error::AnalysisError;

/// Pitch-class names, index 0 = C
pub const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chord quality table: label suffix + semitone intervals from the root.
/// An ordered slice, not a map — the inner tie-break order follows this
/// table exactly.
pub const CHORD_QUALITIES: [(&str, &[usize]); 6] = [
    ("", &[0, 4, 7]),        // major
    ("m", &[0, 3, 7]),       // minor
    ("7", &[0, 4, 7, 10]),   // dominant 7
    ("maj7", &[0, 4, 7, 11]), // major 7
    ("m7", &[0, 3, 7, 10]),  // minor 7
    ("dim7", &[0, 3, 6, 9]), // diminished 7
];

/// Estimate the best-matching chord label for a pitch-class profile.
///
/// Total function: even an all-zero profile returns a label (the first
/// combination in enumeration order, "C"). The initial best score of −1
/// guarantees the first combination wins when every score is zero.
pub fn estimate_chord(profile: &[f64; 12]) -> String {
    let mut best_score = -1.0f64;
    let mut best_root = 0;
    let mut best_quality = "";

    for root in 0..12 {
        for (suffix, intervals) in CHORD_QUALITIES.iter() {
            // Dot product against the binary template: only chord-tone bins
            // contribute, so the template itself never needs materializing.
            let score: f64 = intervals
                .iter()
                .map(|&interval| profile[(root + interval) % 12])
                .sum();

            if score > best_score {
                best_score = score;
                best_root = root;
                best_quality = suffix;
            }
        }
    }

    format!("{}{}", PITCH_CLASSES[best_root], best_quality)
}

/// Extract the time-ordered chord sequence from a sample buffer.
///
/// Applies the frame segmenter, then profiles and estimates each window in
/// order. Label i covers the interval starting at `i × frame_duration`
/// seconds. A buffer shorter than one frame produces an empty sequence;
/// only the frame configuration itself can fail.
pub fn extract_chord_sequence(
    samples: &[f32],
    sample_rate: u32,
    frame_duration: f32,
) -> Result<Vec<String>, AnalysisError> {
    let frame_len = frame_length(sample_rate, frame_duration)?;

    let chords = split_frames(samples, frame_len)
        .map(|window| {
            let profile = pitch_class_profile(window, sample_rate);
            estimate_chord(&profile)
        })
        .collect();

    Ok(chords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    /// Pure-sine chord: fundamentals only, no harmonics. Harmonics would
    /// bleed energy into seventh-chord templates and shift the estimate.
    fn generate_chord(frequencies: &[f32], sample_rate: u32, num_samples: usize) -> Vec<f32> {
        let n = frequencies.len() as f32;
        (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                let sum: f32 = frequencies
                    .iter()
                    .map(|&freq| (2.0 * PI * freq * t).sin())
                    .sum();
                sum / n
            })
            .collect()
    }

    fn template_vector(bins: &[usize]) -> [f64; 12] {
        let mut v = [0.0f64; 12];
        for &bin in bins {
            v[bin] = 1.0;
        }
        v
    }

    #[test]
    fn test_c_major_template_vector() {
        // Bins 0, 4, 7 = C, E, G
        assert_eq!(estimate_chord(&template_vector(&[0, 4, 7])), "C");
    }

    #[test]
    fn test_a_minor_template_vector() {
        // Bins 9, 0, 4 = A, C, E
        assert_eq!(estimate_chord(&template_vector(&[9, 0, 4])), "Am");
    }

    #[test]
    fn test_g7_template_vector() {
        // Bins 7, 11, 2, 5 = G, B, D, F
        assert_eq!(estimate_chord(&template_vector(&[7, 11, 2, 5])), "G7");
    }

    #[test]
    fn test_all_zero_profile_resolves_to_first_combination() {
        // Every score is 0; the −1 initial best means root 0 / quality ""
        // wins. Silence is deliberately not a distinguished case.
        assert_eq!(estimate_chord(&[0.0; 12]), "C");
    }

    #[test]
    fn test_all_ones_tie_break() {
        // Every four-note template scores 4.0; the first one in enumeration
        // order is root 0, quality "7".
        assert_eq!(estimate_chord(&[1.0; 12]), "C7");
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let profile = template_vector(&[2, 5, 9]);
        let first = estimate_chord(&profile);
        for _ in 0..10 {
            assert_eq!(estimate_chord(&profile), first);
        }
        assert_eq!(first, "Dm");
    }

    #[test]
    fn test_sequence_length_is_floor_of_buffer_over_frame() {
        // 2.3 s at 8 kHz with 0.5 s frames → floor(18400 / 4000) = 4 labels
        let samples = vec![0.0f32; 18400];
        let chords = extract_chord_sequence(&samples, 8000, 0.5).unwrap();
        assert_eq!(chords.len(), 4);
    }

    #[test]
    fn test_label_count_across_configurations() {
        // floor(len / floor(sr × d)) labels for any valid configuration
        let cases: [(u32, f32, usize); 4] = [
            (44100, 0.5, 100_000),
            (48000, 0.25, 50_000),
            (8000, 1.0, 8_001),
            (22050, 0.1, 2_204),
        ];
        for (sample_rate, duration, len) in cases {
            let frame_len = (sample_rate as f64 * duration as f64).floor() as usize;
            let samples = vec![0.0f32; len];
            let chords = extract_chord_sequence(&samples, sample_rate, duration).unwrap();
            assert_eq!(
                chords.len(),
                len / frame_len,
                "sr={} d={} len={}",
                sample_rate,
                duration,
                len
            );
        }
    }

    #[test]
    fn test_empty_buffer_yields_empty_sequence() {
        let chords = extract_chord_sequence(&[], 44100, 0.5).unwrap();
        assert!(chords.is_empty());
    }

    #[test]
    fn test_buffer_shorter_than_one_frame_yields_empty_sequence() {
        let samples = vec![0.0f32; 1000];
        let chords = extract_chord_sequence(&samples, 44100, 0.5).unwrap();
        assert!(chords.is_empty());
    }

    #[test]
    fn test_non_positive_frame_duration_is_rejected() {
        let samples = vec![0.0f32; 44100];
        assert!(matches!(
            extract_chord_sequence(&samples, 44100, 0.0),
            Err(AnalysisError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            extract_chord_sequence(&samples, 44100, -0.5),
            Err(AnalysisError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_c_major_chord_audio_estimates_c_root() {
        // C4 + E4 + G4, one second
        let samples = generate_chord(&[261.63, 329.63, 392.00], 44100, 44100);
        let chords = extract_chord_sequence(&samples, 44100, 0.5).unwrap();
        assert_eq!(chords.len(), 2);
        // Off-template energy is never penalized, so any template containing
        // the C triad as a subset can capture a sliver of spectral leakage
        // and edge out the plain triad. All such labels are acceptable here;
        // estimating an unrelated root is not.
        let acceptable = ["C", "C7", "Cmaj7", "Am7"];
        for label in &chords {
            assert!(
                acceptable.contains(&label.as_str()),
                "expected a chord containing the C triad, got {}",
                label
            );
        }
    }

    #[test]
    fn test_a_minor_chord_audio_estimates_a_root() {
        // A3 + C4 + E4, one second
        let samples = generate_chord(&[220.0, 261.63, 329.63], 44100, 44100);
        let chords = extract_chord_sequence(&samples, 44100, 0.5).unwrap();
        assert_eq!(chords.len(), 2);
        // Templates containing the A minor triad as a subset: Am itself,
        // Am7 (adds G), and Fmaj7 (F-A-C-E adds F)
        let acceptable = ["Am", "Am7", "Fmaj7"];
        for label in &chords {
            assert!(
                acceptable.contains(&label.as_str()),
                "expected a chord containing the A minor triad, got {}",
                label
            );
        }
    }

    #[test]
    fn test_silent_buffer_still_yields_labels() {
        let samples = vec![0.0f32; 44100];
        let chords = extract_chord_sequence(&samples, 44100, 0.5).unwrap();
        assert_eq!(chords, vec!["C".to_string(), "C".to_string()]);
    }
}
