use std::path::Path;

use crate::error::ScoringError;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Words-per-minute rate that earns the full fluency base score.
    /// Faster recitation is not penalized.
    pub optimal_wpm: f64,
    /// Inter-word silences longer than this count as gaps.
    pub gap_threshold_secs: f64,
    /// Flat fluency deduction per recorded gap.
    pub gap_penalty_points: u32,
    pub max_score: u32,
}

impl ScoringConfig {
    pub const DEFAULT_OPTIMAL_WPM: f64 = 150.0;
    pub const DEFAULT_GAP_THRESHOLD_SECS: f64 = 0.5;
    pub const DEFAULT_GAP_PENALTY_POINTS: u32 = 2;
    pub const DEFAULT_MAX_SCORE: u32 = 100;

    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ScoringError::io("read scoring config", e))?;
        serde_json::from_str(&data).map_err(|e| ScoringError::json("parse scoring config", e))
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            optimal_wpm: Self::DEFAULT_OPTIMAL_WPM,
            gap_threshold_secs: Self::DEFAULT_GAP_THRESHOLD_SECS,
            gap_penalty_points: Self::DEFAULT_GAP_PENALTY_POINTS,
            max_score: Self::DEFAULT_MAX_SCORE,
        }
    }
}
