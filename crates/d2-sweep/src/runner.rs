//! Sweep runner — brute-force the whole grid per input and keep the
//! best-scoring artifact.

use crate::error::{Result, SweepError};
use crate::grid::SweepGrid;
use crate::score;
use d2_encoder::{encode, EncodeOptions};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Best artifact found for one value, with the options that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct SweepOutcome {
    pub options: EncodeOptions,
    pub text: String,
    pub score: f64,
    pub ratio: f64,
    pub longest_line: usize,
    /// Byte length of the compact JSON rendering the artifact is compared
    /// against.
    pub baseline_len: usize,
}

/// Try every configuration in `grid` against `value` and keep the lowest
/// score. Earlier configurations win ties.
pub fn sweep_value(value: &Value, grid: &SweepGrid) -> Result<SweepOutcome> {
    let baseline_len = serde_json::to_string(value)?.len();
    let mut best: Option<SweepOutcome> = None;
    for options in grid.configurations() {
        let text = encode(value, &options)?;
        let candidate_score = score::score(&text, baseline_len);
        if best.as_ref().is_none_or(|b| candidate_score < b.score) {
            tracing::debug!(
                object = options.object_threshold,
                array = options.array_threshold,
                string = options.string_threshold,
                score = candidate_score,
                bytes = text.len(),
                "new best configuration"
            );
            best = Some(SweepOutcome {
                options,
                ratio: score::ratio(text.len(), baseline_len),
                longest_line: score::longest_line(&text),
                score: candidate_score,
                baseline_len,
                text,
            });
        }
    }
    best.ok_or(SweepError::EmptyGrid)
}

/// One swept input file and where its artifact landed.
#[derive(Debug, Clone, Serialize)]
pub struct FileSweep {
    pub input: PathBuf,
    pub output: PathBuf,
    pub outcome: SweepOutcome,
}

/// Sweep a JSON document from disk and write the winning artifact next to
/// it, swapping the extension for `d2.jsonl`.
pub fn sweep_file(path: &Path, grid: &SweepGrid) -> Result<FileSweep> {
    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    let outcome = sweep_value(&value, grid)?;
    let output = path.with_extension("d2.jsonl");
    fs::write(&output, &outcome.text)?;
    tracing::info!(
        input = %path.display(),
        output = %output.display(),
        ratio = outcome.ratio,
        longest_line = outcome.longest_line,
        "swept file"
    );
    Ok(FileSweep {
        input: path.to_path_buf(),
        output,
        outcome,
    })
}

/// Aggregate over a batch of swept files.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub files: Vec<FileSweep>,
    pub total_output: usize,
    pub total_baseline: usize,
}

impl SweepReport {
    /// Total artifact bytes over total baseline bytes.
    pub fn overall_ratio(&self) -> f64 {
        score::ratio(self.total_output, self.total_baseline)
    }
}

/// Sweep several files with one grid and accumulate the overall ratio.
pub fn sweep_files(paths: &[PathBuf], grid: &SweepGrid) -> Result<SweepReport> {
    let mut files = Vec::with_capacity(paths.len());
    let mut total_output = 0;
    let mut total_baseline = 0;
    for path in paths {
        let file = sweep_file(path, grid)?;
        total_output += file.outcome.text.len();
        total_baseline += file.outcome.baseline_len;
        files.push(file);
    }
    let report = SweepReport {
        files,
        total_output,
        total_baseline,
    };
    tracing::info!(
        files = report.files.len(),
        overall_ratio = report.overall_ratio(),
        "sweep complete"
    );
    Ok(report)
}
