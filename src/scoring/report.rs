//! Per-recording summaries and score aggregation across a practice
//! session or a batch of recordings.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::ScoringError;
use crate::types::ScoringResult;

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub id: String,
    pub accuracy_score: u32,
    pub fluency_score: u32,
    pub match_count: u32,
    pub error_count: u32,
    pub gap_count: u32,
    pub words_per_minute: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    pub recording_count: u32,
    pub accuracy: Option<MetricDistribution>,
    pub fluency: Option<MetricDistribution>,
    pub words_per_minute: Option<MetricDistribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricDistribution {
    pub mean: f32,
    pub p50: f32,
    pub p90: f32,
}

pub fn session_report(id: &str, result: &ScoringResult) -> SessionReport {
    SessionReport {
        id: id.to_string(),
        accuracy_score: result.accuracy_score,
        fluency_score: result.fluency_score,
        match_count: to_u32(result.matches.len()),
        error_count: to_u32(result.errors.len()),
        gap_count: to_u32(result.timing.gaps.len()),
        words_per_minute: result.timing.words_per_minute as f32,
    }
}

pub fn aggregate_sessions(sessions: &[SessionReport]) -> Result<AggregateReport, ScoringError> {
    let accuracy: Vec<f64> = sessions.iter().map(|s| s.accuracy_score as f64).collect();
    let fluency: Vec<f64> = sessions.iter().map(|s| s.fluency_score as f64).collect();
    let wpm: Vec<f64> = sessions.iter().map(|s| s.words_per_minute as f64).collect();

    Ok(AggregateReport {
        recording_count: to_u32(sessions.len()),
        accuracy: distribution_or_none(&accuracy)?,
        fluency: distribution_or_none(&fluency)?,
        words_per_minute: distribution_or_none(&wpm)?,
    })
}

fn distribution_or_none(values: &[f64]) -> Result<Option<MetricDistribution>, ScoringError> {
    if values.is_empty() {
        return Ok(None);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(Some(MetricDistribution {
        mean: checked_f32(mean(&sorted), "aggregate.mean")?,
        p50: checked_f32(percentile_sorted(&sorted, 0.5), "aggregate.p50")?,
        p90: checked_f32(percentile_sorted(&sorted, 0.9), "aggregate.p90")?,
    }))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn percentile_sorted(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return 0.0;
    }
    if sorted_values.len() == 1 {
        return sorted_values[0];
    }

    let clamped = percentile.clamp(0.0, 1.0);
    let rank = clamped * (sorted_values.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted_values[lower]
    } else {
        let weight = rank - lower as f64;
        sorted_values[lower] * (1.0 - weight) + sorted_values[upper] * weight
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn checked_f32(value: f64, metric_name: &str) -> Result<f32, ScoringError> {
    if !value.is_finite() {
        return Err(ScoringError::invalid_input(format!(
            "metric '{metric_name}' produced non-finite value: {value}"
        )));
    }
    Ok(value as f32)
}

#[cfg(test)]
mod tests {
    use crate::types::{ErrorRecord, Gap, MatchRecord, TimingMetrics};

    use super::*;

    fn result(accuracy: u32, fluency: u32, wpm: f64) -> ScoringResult {
        ScoringResult {
            accuracy_score: accuracy,
            fluency_score: fluency,
            matches: vec![MatchRecord { transcript_pos: 0, reference_pos: 0 }],
            errors: vec![ErrorRecord {
                transcript_pos: 1,
                word: "كلمه".to_string(),
                suggestion: "كلمة".to_string(),
            }],
            timing: TimingMetrics {
                duration_secs: 2.0,
                effective_duration_secs: 2.0,
                words_per_minute: wpm,
                gaps: vec![Gap { position: 1, duration_secs: 0.8 }],
                total_gap_duration_secs: 0.8,
            },
        }
    }

    #[test]
    fn session_report_counts_records() {
        let report = session_report("rec-1", &result(80, 70, 120.0));
        assert_eq!(report.id, "rec-1");
        assert_eq!(report.match_count, 1);
        assert_eq!(report.error_count, 1);
        assert_eq!(report.gap_count, 1);
        assert!((report.words_per_minute - 120.0).abs() < 1e-6);
    }

    #[test]
    fn aggregate_of_nothing_has_no_distributions() {
        let aggregate = aggregate_sessions(&[]).unwrap();
        assert_eq!(aggregate.recording_count, 0);
        assert!(aggregate.accuracy.is_none());
        assert!(aggregate.fluency.is_none());
    }

    #[test]
    fn single_session_distribution_is_the_value() {
        let sessions = vec![session_report("a", &result(80, 60, 100.0))];
        let aggregate = aggregate_sessions(&sessions).unwrap();
        let accuracy = aggregate.accuracy.unwrap();
        assert_eq!(accuracy.mean, 80.0);
        assert_eq!(accuracy.p50, 80.0);
        assert_eq!(accuracy.p90, 80.0);
    }

    #[test]
    fn percentiles_interpolate_between_samples() {
        let sessions: Vec<SessionReport> = [60, 70, 80, 90, 100]
            .iter()
            .map(|&score| session_report("x", &result(score, score, 100.0)))
            .collect();
        let aggregate = aggregate_sessions(&sessions).unwrap();
        let accuracy = aggregate.accuracy.unwrap();
        assert_eq!(accuracy.mean, 80.0);
        assert_eq!(accuracy.p50, 80.0);
        // 0.9 * 4 = rank 3.6 between 90 and 100.
        assert!((accuracy.p90 - 96.0).abs() < 1e-4);
    }
}
