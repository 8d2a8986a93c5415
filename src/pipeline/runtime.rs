use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::pipeline::traits::{AccuracyScorer, FluencyScorer, Normalizer};
use crate::types::{ScoringInput, ScoringResult, WordTiming};

/// Stateless scoring engine. Holds only configuration and the three
/// pluggable stages, so a single instance can be shared across worker
/// threads and calls can run concurrently without coordination.
pub struct RecitationScorer {
    config: ScoringConfig,
    normalizer: Box<dyn Normalizer>,
    accuracy_scorer: Box<dyn AccuracyScorer>,
    fluency_scorer: Box<dyn FluencyScorer>,
}

pub(crate) struct RecitationScorerParts {
    pub config: ScoringConfig,
    pub normalizer: Box<dyn Normalizer>,
    pub accuracy_scorer: Box<dyn AccuracyScorer>,
    pub fluency_scorer: Box<dyn FluencyScorer>,
}

impl RecitationScorer {
    pub(crate) fn from_parts(parts: RecitationScorerParts) -> Self {
        Self {
            config: parts.config,
            normalizer: parts.normalizer,
            accuracy_scorer: parts.accuracy_scorer,
            fluency_scorer: parts.fluency_scorer,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, input: &ScoringInput) -> Result<ScoringResult, ScoringError> {
        validate_timings(&input.word_timings)?;

        let transcript_word_count = input.transcript.split_whitespace().count();
        if !input.word_timings.is_empty() && input.word_timings.len() != transcript_word_count {
            // Recognizers occasionally tokenize the transcript string
            // differently from the word stream; scoreable, but worth a
            // trace for debugging odd results.
            tracing::warn!(
                timing_count = input.word_timings.len(),
                transcript_word_count,
                "word timing count does not match transcript tokenization"
            );
        }

        let accuracy = self.accuracy_scorer.score(
            &input.reference_text,
            &input.transcript,
            self.normalizer.as_ref(),
        )?;
        let fluency = self.fluency_scorer.score(&input.word_timings, &self.config);

        Ok(ScoringResult {
            accuracy_score: accuracy.accuracy,
            fluency_score: fluency.fluency,
            matches: accuracy.matches,
            errors: accuracy.errors,
            timing: fluency.metrics,
        })
    }
}

/// Structural validation of the recognizer word stream. Entries must
/// carry finite, non-negative times, end no earlier than they start,
/// and appear in non-decreasing start order.
fn validate_timings(timings: &[WordTiming]) -> Result<(), ScoringError> {
    let mut previous_start = f64::NEG_INFINITY;
    for (i, timing) in timings.iter().enumerate() {
        if !timing.start_secs.is_finite() || !timing.end_secs.is_finite() {
            return Err(ScoringError::invalid_input(format!(
                "word timing {i} has non-finite timestamps"
            )));
        }
        if timing.start_secs < 0.0 {
            return Err(ScoringError::invalid_input(format!(
                "word timing {i} starts at negative time {}",
                timing.start_secs
            )));
        }
        if timing.end_secs < timing.start_secs {
            return Err(ScoringError::invalid_input(format!(
                "word timing {i} ends before it starts ({} > {})",
                timing.start_secs, timing.end_secs
            )));
        }
        if timing.start_secs < previous_start {
            return Err(ScoringError::invalid_input(format!(
                "word timings are not in time order at index {i}"
            )));
        }
        previous_start = timing.start_secs;
    }
    Ok(())
}
