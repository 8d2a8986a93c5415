//! Batch scoring report over a set of recorded recitations.
//!
//! Input is a JSON array of cases, each carrying the recognizer output
//! (transcript plus word timings) and the reference passage. Output is
//! a JSON report with per-recording scores and aggregate distributions.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tarteel_rs::{
    aggregate_sessions, session_report, AggregateReport, RecitationScorerBuilder, ScoringConfig,
    ScoringError, ScoringInput, ScoringResult, SessionReport, WordTiming,
};

#[derive(Debug, Parser)]
#[command(
    name = "score_report",
    about = "Score recorded recitations against their reference passages"
)]
struct Args {
    /// JSON file with recitation cases: [{ id, reference, transcript, words }].
    cases: PathBuf,

    /// Optional scoring config JSON; defaults apply otherwise.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report destination; stdout when omitted.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Include full per-word match/error detail per recording.
    #[arg(long)]
    per_word: bool,
}

#[derive(Debug, Deserialize)]
struct RecitationCase {
    id: String,
    reference: String,
    transcript: String,
    words: Vec<WordTiming>,
}

#[derive(Debug, Serialize)]
struct Report {
    meta: Meta,
    recordings: Vec<RecordingReport>,
    aggregates: AggregateReport,
}

#[derive(Debug, Serialize)]
struct Meta {
    generated_at: String,
    case_count: usize,
    optimal_wpm: f64,
    gap_threshold_secs: f64,
}

#[derive(Debug, Serialize)]
struct RecordingReport {
    #[serde(flatten)]
    summary: SessionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<ScoringResult>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ScoringError> {
    let config = match &args.config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    let scorer = RecitationScorerBuilder::new(config.clone()).build()?;

    let data = fs::read_to_string(&args.cases)
        .map_err(|e| ScoringError::Io { context: "read cases file", source: e })?;
    let cases: Vec<RecitationCase> = serde_json::from_str(&data)
        .map_err(|e| ScoringError::Json { context: "parse cases file", source: e })?;

    let progress = ProgressBar::new(cases.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("static progress template"),
    );

    let mut recordings = Vec::with_capacity(cases.len());
    let mut sessions = Vec::with_capacity(cases.len());
    for case in &cases {
        progress.set_message(case.id.clone());
        let input = ScoringInput {
            reference_text: case.reference.clone(),
            transcript: case.transcript.clone(),
            word_timings: case.words.clone(),
        };
        let result = scorer.score(&input).map_err(|err| ScoringError::InvalidInput {
            message: format!("case '{}': {err}", case.id),
        })?;
        let summary = session_report(&case.id, &result);
        sessions.push(summary.clone());
        recordings.push(RecordingReport {
            summary,
            detail: args.per_word.then_some(result),
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    let report = Report {
        meta: Meta {
            generated_at: Utc::now().to_rfc3339(),
            case_count: cases.len(),
            optimal_wpm: config.optimal_wpm,
            gap_threshold_secs: config.gap_threshold_secs,
        },
        recordings,
        aggregates: aggregate_sessions(&sessions)?,
    };

    let rendered = serde_json::to_string_pretty(&report)
        .map_err(|e| ScoringError::Json { context: "render report", source: e })?;
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .map_err(|e| ScoringError::Io { context: "write report", source: e })?,
        None => println!("{rendered}"),
    }
    Ok(())
}
