pub mod config;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod types;

pub use config::ScoringConfig;
pub use error::ScoringError;
pub use pipeline::builder::RecitationScorerBuilder;
pub use pipeline::runtime::RecitationScorer;
pub use pipeline::traits::{AccuracyScorer, FluencyScorer, Normalizer};
pub use scoring::accuracy::compare_texts;
pub use scoring::edit_distance::levenshtein;
pub use scoring::fluency::analyze_timings;
pub use scoring::normalize::normalize_arabic;
pub use scoring::report::{
    aggregate_sessions, session_report, AggregateReport, MetricDistribution, SessionReport,
};
pub use types::{
    AccuracyReport, ErrorRecord, FluencyReport, Gap, MatchRecord, ScoringInput, ScoringResult,
    TimingMetrics, WordTiming,
};
