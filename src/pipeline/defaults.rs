use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::pipeline::traits::{AccuracyScorer, FluencyScorer, Normalizer};
use crate::scoring::accuracy::compare_texts;
use crate::scoring::fluency::analyze_timings;
use crate::scoring::normalize::normalize_arabic;
use crate::types::{AccuracyReport, FluencyReport, WordTiming};

pub struct ArabicNormalizer;

impl Normalizer for ArabicNormalizer {
    fn normalize(&self, text: &str) -> String {
        normalize_arabic(text)
    }
}

pub struct FirstMatchAccuracyScorer;

impl AccuracyScorer for FirstMatchAccuracyScorer {
    fn score(
        &self,
        reference: &str,
        transcript: &str,
        normalizer: &dyn Normalizer,
    ) -> Result<AccuracyReport, ScoringError> {
        compare_texts(reference, transcript, |word| normalizer.normalize(word))
    }
}

pub struct RateGapFluencyScorer;

impl FluencyScorer for RateGapFluencyScorer {
    fn score(&self, timings: &[WordTiming], config: &ScoringConfig) -> FluencyReport {
        analyze_timings(timings, config)
    }
}
