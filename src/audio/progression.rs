// Harmonic progression detection over a chord sequence.
//
// Matching is literal and key-specific: each pattern is an exact contiguous
// sublist of chord label strings, with no transposition and no enharmonic
// equivalence. Patterns are checked in library order (outer) and start
// position ascending (inner); the first pattern with any occurrence wins and
// reports its leftmost start.

use serde::{Deserialize, Serialize};

/// Canonical progression library, in match-priority order.
const COMMON_PROGRESSIONS: [(&str, &[&str]); 3] = [
    ("I–IV–V", &["C", "F", "G"]),
    ("vi–IV–I–V", &["Am", "F", "C", "G"]),
    ("ii–V–I", &["Dm", "G", "C"]),
];

/// A detected progression within a chord sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionMatch {
    /// Pattern name, e.g. "I–IV–V"
    pub name: String,
    /// The matched chord labels, e.g. ["C", "F", "G"]
    pub pattern: Vec<String>,
    /// Index of the first matching window in the sequence
    pub position: usize,
}

/// Scan a chord sequence for the first known progression.
///
/// Returns `None` when no library pattern occurs anywhere in the sequence.
pub fn detect_progression(chords: &[String]) -> Option<ProgressionMatch> {
    for (name, pattern) in COMMON_PROGRESSIONS.iter() {
        let found = chords
            .windows(pattern.len())
            .position(|window| window.iter().zip(pattern.iter()).all(|(c, p)| c == p));

        if let Some(position) = found {
            return Some(ProgressionMatch {
                name: name.to_string(),
                pattern: pattern.iter().map(|p| p.to_string()).collect(),
                position,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detects_i_iv_v_at_start() {
        let matched = detect_progression(&labels(&["C", "F", "G", "Am"])).unwrap();
        assert_eq!(matched.name, "I–IV–V");
        assert_eq!(matched.pattern, labels(&["C", "F", "G"]));
        assert_eq!(matched.position, 0);
    }

    #[test]
    fn test_detects_progression_mid_sequence() {
        let matched = detect_progression(&labels(&["Em", "Am", "F", "C", "G"])).unwrap();
        assert_eq!(matched.name, "vi–IV–I–V");
        assert_eq!(matched.position, 1);
    }

    #[test]
    fn test_no_match_returns_none() {
        assert!(detect_progression(&labels(&["D", "E", "F"])).is_none());
    }

    #[test]
    fn test_empty_sequence_returns_none() {
        assert!(detect_progression(&[]).is_none());
    }

    #[test]
    fn test_sequence_shorter_than_pattern_returns_none() {
        assert!(detect_progression(&labels(&["C", "F"])).is_none());
    }

    #[test]
    fn test_library_order_beats_start_position() {
        // ii–V–I occurs at position 0, but I–IV–V is earlier in the library
        // and occurs at position 2, so it wins.
        let matched = detect_progression(&labels(&["Dm", "G", "C", "F", "G"])).unwrap();
        assert_eq!(matched.name, "I–IV–V");
        assert_eq!(matched.position, 2);
    }

    #[test]
    fn test_matching_is_literal_not_transposed() {
        // D–G–A is I–IV–V in D major, but the library only knows C major
        assert!(detect_progression(&labels(&["D", "G", "A"])).is_none());
    }

    #[test]
    fn test_leftmost_occurrence_reported() {
        let matched = detect_progression(&labels(&["C", "F", "G", "C", "F", "G"])).unwrap();
        assert_eq!(matched.position, 0);
    }
}
