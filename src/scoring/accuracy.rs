//! Word-level alignment and accuracy scoring.
//!
//! Each transcript word is matched independently against the reference
//! under normalized comparison, earliest reference position first. No
//! global sequence alignment is attempted, so transposed or repeated
//! words can mis-score; that trade keeps every suggestion explainable
//! to a learner.

use crate::error::ScoringError;
use crate::scoring::edit_distance::closest_match;
use crate::types::{AccuracyReport, ErrorRecord, MatchRecord};

pub fn compare_texts<F>(
    reference: &str,
    transcript: &str,
    normalize: F,
) -> Result<AccuracyReport, ScoringError>
where
    F: Fn(&str) -> String,
{
    let reference_words: Vec<&str> = reference.split_whitespace().collect();
    if reference_words.is_empty() {
        return Err(ScoringError::invalid_input(
            "reference text contains no words",
        ));
    }

    let normalized_reference: Vec<String> =
        reference_words.iter().map(|word| normalize(word)).collect();

    let mut matches = Vec::new();
    let mut errors = Vec::new();
    for (transcript_pos, word) in transcript.split_whitespace().enumerate() {
        let normalized = normalize(word);
        match normalized_reference
            .iter()
            .position(|reference_word| *reference_word == normalized)
        {
            Some(reference_pos) => matches.push(MatchRecord {
                transcript_pos,
                reference_pos,
            }),
            None => errors.push(ErrorRecord {
                transcript_pos,
                word: word.to_string(),
                suggestion: closest_match(
                    &normalized,
                    reference_words
                        .iter()
                        .copied()
                        .zip(normalized_reference.iter().map(String::as_str)),
                ),
            }),
        }
    }

    // Duplicate transcript words each re-match the same reference slot,
    // so the raw ratio can exceed 100; the score is clamped.
    let raw = (matches.len() as f64 / reference_words.len() as f64 * 100.0).round() as u32;
    let accuracy = raw.min(100);

    Ok(AccuracyReport {
        accuracy,
        matches,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use crate::scoring::normalize::normalize_arabic;

    use super::*;

    const BISMILLAH: &str = "بسم الله الرحمن الرحيم";

    #[test]
    fn perfect_match_scores_100_with_no_errors() {
        let report = compare_texts(BISMILLAH, BISMILLAH, normalize_arabic).unwrap();
        assert_eq!(report.accuracy, 100);
        assert!(report.errors.is_empty());
        assert_eq!(report.matches.len(), 4);
        for (i, record) in report.matches.iter().enumerate() {
            assert_eq!(record.transcript_pos, i);
            assert_eq!(record.reference_pos, i);
        }
    }

    #[test]
    fn diacritics_do_not_break_matching() {
        let report =
            compare_texts(BISMILLAH, "بِسْمِ اللَّهِ الرحمن الرحيم", normalize_arabic).unwrap();
        assert_eq!(report.accuracy, 100);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn total_mismatch_scores_zero_with_suggestions() {
        let report = compare_texts(BISMILLAH, "قل هو احد", normalize_arabic).unwrap();
        assert_eq!(report.accuracy, 0);
        assert!(report.matches.is_empty());
        assert_eq!(report.errors.len(), 3);
        for error in &report.errors {
            assert!(!error.suggestion.is_empty());
        }
    }

    #[test]
    fn partial_match_rounds_ratio() {
        // 2 of 4 reference words present.
        let report = compare_texts(BISMILLAH, "بسم الرحيم", normalize_arabic).unwrap();
        assert_eq!(report.accuracy, 50);
        assert_eq!(report.matches.len(), 2);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn first_reference_position_wins() {
        let report = compare_texts("الله نور الله", "الله", normalize_arabic).unwrap();
        assert_eq!(report.matches, vec![MatchRecord { transcript_pos: 0, reference_pos: 0 }]);
    }

    #[test]
    fn duplicate_transcript_words_clamp_at_100() {
        let report = compare_texts("الله", "الله الله الله", normalize_arabic).unwrap();
        assert_eq!(report.accuracy, 100);
        assert_eq!(report.matches.len(), 3);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn empty_transcript_scores_zero_without_error() {
        let report = compare_texts(BISMILLAH, "", normalize_arabic).unwrap();
        assert_eq!(report.accuracy, 0);
        assert!(report.matches.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn empty_reference_is_invalid_input() {
        let result = compare_texts("   ", "بسم", normalize_arabic);
        assert!(matches!(result, Err(ScoringError::InvalidInput { .. })));
    }

    #[test]
    fn suggestion_is_nearest_reference_word() {
        // One dropped letter from الرحيم.
        let report = compare_texts(BISMILLAH, "الرحي", normalize_arabic).unwrap();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].suggestion, "الرحيم");
    }
}
