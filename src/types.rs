use serde::{Deserialize, Serialize};

/// Everything a single scoring call consumes. The transcript and word
/// timings come from the speech recognizer; the reference text is the
/// canonical passage the learner was asked to recite.
#[derive(Debug, Clone)]
pub struct ScoringInput {
    pub reference_text: String,
    pub transcript: String,
    pub word_timings: Vec<WordTiming>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTiming {
    pub word: String,
    /// Seconds from the start of the recording.
    pub start_secs: f64,
    pub end_secs: f64,
    /// Recognizer word confidence in [0, 1]. `None` when the backend
    /// does not report one.
    #[serde(default)]
    pub confidence: Option<f32>,
}

/// Transcript word at `transcript_pos` matched the reference word at
/// `reference_pos` under normalized comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub transcript_pos: usize,
    pub reference_pos: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub transcript_pos: usize,
    pub word: String,
    /// Reference word with the smallest edit distance to the unmatched
    /// word. Empty only when the reference has no words to offer.
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gap {
    /// Index of the second word of the silent pair.
    pub position: usize,
    pub duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TimingMetrics {
    pub duration_secs: f64,
    /// Speaking time excluding gaps that crossed the silence threshold.
    /// Can go negative for degenerate (overlapping) timings.
    pub effective_duration_secs: f64,
    pub words_per_minute: f64,
    pub gaps: Vec<Gap>,
    pub total_gap_duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyReport {
    /// 0..=100 after clamping.
    pub accuracy: u32,
    pub matches: Vec<MatchRecord>,
    pub errors: Vec<ErrorRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluencyReport {
    /// 0..=100.
    pub fluency: u32,
    pub metrics: TimingMetrics,
}

/// Combined engine output. Built fresh per call and owned by the
/// caller; the engine holds no state between invocations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub accuracy_score: u32,
    pub fluency_score: u32,
    pub matches: Vec<MatchRecord>,
    pub errors: Vec<ErrorRecord>,
    pub timing: TimingMetrics,
}
