//! Content-addressed line pool — append-only, deduplicated by exact text.

use std::collections::HashMap;

/// Ordered store of output lines with exact-text deduplication.
///
/// Positions are 1-based and assigned in first-encounter order. Once a text
/// has a position, interning the same text again returns that position; the
/// pool never shrinks or reorders.
#[derive(Debug, Clone, Default)]
pub struct LinePool {
    lines: Vec<String>,
    index: HashMap<String, usize>,
}

impl LinePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a line, returning its 1-based position.
    pub fn intern(&mut self, line: String) -> usize {
        if let Some(&pos) = self.index.get(&line) {
            return pos;
        }
        self.lines.push(line.clone());
        let pos = self.lines.len();
        self.index.insert(line, pos);
        pos
    }

    /// Position already assigned to `line`, if any.
    pub fn position(&self, line: &str) -> Option<usize> {
        self.index.get(line).copied()
    }

    /// Line text at a 1-based position.
    pub fn get(&self, pos: usize) -> Option<&str> {
        pos.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    /// All lines in position order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The final artifact: every line joined with `\n`, in position order.
    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }
}
