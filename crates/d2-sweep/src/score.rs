//! Scoring — how candidate artifacts are ranked against each other.

/// Weight of the size ratio in the combined score.
pub const RATIO_WEIGHT: f64 = 100.0;
/// Weight of the longest line length in the combined score.
pub const LONGEST_LINE_WEIGHT: f64 = 0.01;

/// Byte length of the longest line.
pub fn longest_line(text: &str) -> usize {
    text.lines().map(str::len).max().unwrap_or(0)
}

/// Artifact bytes over baseline bytes. An empty baseline counts as ratio
/// 1.0 so the score stays finite.
pub fn ratio(output_len: usize, baseline_len: usize) -> f64 {
    if baseline_len == 0 {
        return 1.0;
    }
    output_len as f64 / baseline_len as f64
}

/// Combined score, lower is better: dominated by the size ratio, with a
/// small penalty for long lines.
pub fn score(text: &str, baseline_len: usize) -> f64 {
    ratio(text.len(), baseline_len) * RATIO_WEIGHT + longest_line(text) as f64 * LONGEST_LINE_WEIGHT
}
