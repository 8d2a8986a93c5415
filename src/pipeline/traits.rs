use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::types::{AccuracyReport, FluencyReport, WordTiming};

pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

pub trait AccuracyScorer: Send + Sync {
    fn score(
        &self,
        reference: &str,
        transcript: &str,
        normalizer: &dyn Normalizer,
    ) -> Result<AccuracyReport, ScoringError>;
}

pub trait FluencyScorer: Send + Sync {
    fn score(&self, timings: &[WordTiming], config: &ScoringConfig) -> FluencyReport;
}
