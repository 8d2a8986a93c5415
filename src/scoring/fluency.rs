//! Speech-rate and pause analysis over recognizer word timings.
//!
//! The score is deliberately linear with two free parameters (optimal
//! WPM and a flat per-gap penalty) so an instructor can explain any
//! number it produces.

use crate::config::ScoringConfig;
use crate::types::{FluencyReport, Gap, TimingMetrics, WordTiming};

pub fn analyze_timings(timings: &[WordTiming], config: &ScoringConfig) -> FluencyReport {
    if timings.is_empty() {
        // No recitation occurred; not an error.
        return FluencyReport {
            fluency: 0,
            metrics: TimingMetrics::default(),
        };
    }

    let mut gaps = Vec::new();
    let mut total_gap_duration = 0.0;
    for (i, pair) in timings.windows(2).enumerate() {
        let silence = pair[1].start_secs - pair[0].end_secs;
        if silence > config.gap_threshold_secs {
            gaps.push(Gap {
                position: i + 1,
                duration_secs: silence,
            });
            total_gap_duration += silence;
        }
    }

    let duration = timings[timings.len() - 1].end_secs - timings[0].start_secs;
    let effective_duration = duration - total_gap_duration;

    let words_per_minute = if effective_duration > 0.0 {
        timings.len() as f64 / effective_duration * 60.0
    } else {
        // Degenerate span (overlapping words, or gaps consuming the
        // whole recording). Recovered locally as a zero rate so the
        // learner still gets a score.
        tracing::warn!(
            duration_secs = duration,
            total_gap_duration_secs = total_gap_duration,
            "degenerate timing span, fluency rate defaults to 0"
        );
        0.0
    };

    let base = (words_per_minute / config.optimal_wpm * 100.0).min(config.max_score as f64);
    let penalty = gaps.len() as f64 * config.gap_penalty_points as f64;
    let fluency = (base - penalty).round().max(0.0) as u32;

    FluencyReport {
        fluency,
        metrics: TimingMetrics {
            duration_secs: duration,
            effective_duration_secs: effective_duration,
            words_per_minute,
            gaps,
            total_gap_duration_secs: total_gap_duration,
        },
    }
}
