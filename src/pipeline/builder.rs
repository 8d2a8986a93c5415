use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::pipeline::defaults::{ArabicNormalizer, FirstMatchAccuracyScorer, RateGapFluencyScorer};
use crate::pipeline::runtime::{RecitationScorer, RecitationScorerParts};
use crate::pipeline::traits::{AccuracyScorer, FluencyScorer, Normalizer};

pub struct RecitationScorerBuilder {
    config: ScoringConfig,
    normalizer: Option<Box<dyn Normalizer>>,
    accuracy_scorer: Option<Box<dyn AccuracyScorer>>,
    fluency_scorer: Option<Box<dyn FluencyScorer>>,
}

impl RecitationScorerBuilder {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            normalizer: None,
            accuracy_scorer: None,
            fluency_scorer: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn with_accuracy_scorer(mut self, accuracy_scorer: Box<dyn AccuracyScorer>) -> Self {
        self.accuracy_scorer = Some(accuracy_scorer);
        self
    }

    pub fn with_fluency_scorer(mut self, fluency_scorer: Box<dyn FluencyScorer>) -> Self {
        self.fluency_scorer = Some(fluency_scorer);
        self
    }

    pub fn build(self) -> Result<RecitationScorer, ScoringError> {
        if !self.config.optimal_wpm.is_finite() || self.config.optimal_wpm <= 0.0 {
            return Err(ScoringError::invalid_input(format!(
                "optimal_wpm must be positive, got {}",
                self.config.optimal_wpm
            )));
        }
        if !self.config.gap_threshold_secs.is_finite() || self.config.gap_threshold_secs < 0.0 {
            return Err(ScoringError::invalid_input(format!(
                "gap_threshold_secs must be non-negative, got {}",
                self.config.gap_threshold_secs
            )));
        }
        if self.config.max_score == 0 {
            return Err(ScoringError::invalid_input("max_score must be positive"));
        }

        Ok(RecitationScorer::from_parts(RecitationScorerParts {
            config: self.config,
            normalizer: self.normalizer.unwrap_or_else(|| Box::new(ArabicNormalizer)),
            accuracy_scorer: self
                .accuracy_scorer
                .unwrap_or_else(|| Box::new(FirstMatchAccuracyScorer)),
            fluency_scorer: self
                .fluency_scorer
                .unwrap_or_else(|| Box::new(RateGapFluencyScorer)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::types::ScoringInput;

    use super::*;

    struct PassthroughNormalizer;

    impl Normalizer for PassthroughNormalizer {
        fn normalize(&self, text: &str) -> String {
            text.to_string()
        }
    }

    #[test]
    fn build_succeeds_with_defaults() {
        let scorer = RecitationScorerBuilder::new(ScoringConfig::default())
            .build()
            .expect("build should succeed");
        assert_eq!(scorer.config().optimal_wpm, 150.0);
    }

    #[test]
    fn build_fails_on_zero_wpm() {
        let config = ScoringConfig {
            optimal_wpm: 0.0,
            ..ScoringConfig::default()
        };
        let result = RecitationScorerBuilder::new(config).build();
        assert!(matches!(result, Err(ScoringError::InvalidInput { .. })));
    }

    #[test]
    fn build_fails_on_negative_gap_threshold() {
        let config = ScoringConfig {
            gap_threshold_secs: -0.1,
            ..ScoringConfig::default()
        };
        let result = RecitationScorerBuilder::new(config).build();
        assert!(matches!(result, Err(ScoringError::InvalidInput { .. })));
    }

    #[test]
    fn injected_normalizer_is_used() {
        // Without Arabic folding, diacritics stay and nothing matches.
        let scorer = RecitationScorerBuilder::new(ScoringConfig::default())
            .with_normalizer(Box::new(PassthroughNormalizer))
            .build()
            .expect("build should succeed");
        let input = ScoringInput {
            reference_text: "بِسْمِ".to_string(),
            transcript: "بسم".to_string(),
            word_timings: Vec::new(),
        };
        let result = scorer.score(&input).unwrap();
        assert_eq!(result.accuracy_score, 0);
        assert_eq!(result.errors.len(), 1);
    }
}
