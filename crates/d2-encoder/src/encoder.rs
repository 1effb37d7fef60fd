//! Recursive threshold encoder — per node, inline the value or hoist it onto
//! its own pooled line and substitute the line's position.

use crate::analyzer::{self, Frequencies};
use crate::error::Result;
use crate::pool::LinePool;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key count at or above which an object moves to its own line.
pub const DEFAULT_OBJECT_THRESHOLD: usize = 4;
/// Length at or above which an array moves to its own line.
pub const DEFAULT_ARRAY_THRESHOLD: usize = 1;
/// Occurrence count at or above which a string moves to its own line.
pub const DEFAULT_STRING_THRESHOLD: usize = 2;
/// Nesting depth at which encoding fails instead of recursing further.
/// Matches serde_json's parse-time recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Encoder thresholds.
///
/// A threshold of 0 unconditionally forces the corresponding kind onto its
/// own line; a threshold larger than anything occurring in the input keeps
/// that kind inline everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    pub object_threshold: usize,
    pub array_threshold: usize,
    pub string_threshold: usize,
    pub max_depth: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            object_threshold: DEFAULT_OBJECT_THRESHOLD,
            array_threshold: DEFAULT_ARRAY_THRESHOLD,
            string_threshold: DEFAULT_STRING_THRESHOLD,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EncodeOptions {
    pub fn with_object_threshold(mut self, n: usize) -> Self {
        self.object_threshold = n;
        self
    }

    pub fn with_array_threshold(mut self, n: usize) -> Self {
        self.array_threshold = n;
        self
    }

    pub fn with_string_threshold(mut self, n: usize) -> Self {
        self.string_threshold = n;
        self
    }

    pub fn with_max_depth(mut self, n: usize) -> Self {
        self.max_depth = n;
        self
    }
}

/// Encode a value tree as D2 text: pooled lines joined with `\n`.
///
/// Output is byte-for-byte deterministic for a fixed input and options. The
/// root value is always interned, so the artifact has at least one line, and
/// the root's line is always the last one: children are interned before the
/// line that references them, and the root's text cannot collide with the
/// encoding of one of its own strict subtrees.
pub fn encode(value: &Value, options: &EncodeOptions) -> Result<String> {
    let freqs = analyzer::analyze(value, options.max_depth)?;
    let mut enc = Encoder {
        options,
        freqs,
        pool: LinePool::new(),
    };
    enc.write(value);
    let lines = enc.pool.len();
    let text = enc.pool.into_text();
    tracing::debug!(lines, bytes = text.len(), "encoded value tree");
    Ok(text)
}

/// Walk state threaded through the recursion: thresholds, the analyzer's
/// tables, and the output pool.
struct Encoder<'a> {
    options: &'a EncodeOptions,
    freqs: Frequencies,
    pool: LinePool,
}

impl Encoder<'_> {
    /// Intern `value`'s encoded text on its own line and return the position.
    fn write(&mut self, value: &Value) -> usize {
        let text = match value {
            Value::Array(items) => self.encode_array(items),
            Value::Object(map) => self.encode_object(map),
            scalar => scalar.to_string(),
        };
        self.pool.intern(text)
    }

    /// Encode a value occupying an element or member position inside a line:
    /// either its inline text or the position of its own line.
    fn encode_item(&mut self, item: &Value) -> String {
        match item {
            // A bare number inside a line is always a reference, so literal
            // numbers go on their own line and the position stands in here.
            Value::Number(_) => self.write(item).to_string(),
            Value::Array(items) if items.len() >= self.options.array_threshold => {
                self.write(item).to_string()
            }
            Value::Array(items) => self.encode_array(items),
            Value::Object(map) if map.len() >= self.options.object_threshold => {
                self.write(item).to_string()
            }
            Value::Object(map) => self.encode_object(map),
            Value::String(s) if self.is_shared_string(s) => self.write(item).to_string(),
            other => other.to_string(),
        }
    }

    /// Shared strings move to one line so every occurrence points at it.
    /// Only strings the analyzer saw as values qualify; key strings inside a
    /// key-list array stay inline unless they also occur as values.
    fn is_shared_string(&self, s: &str) -> bool {
        self.freqs
            .string_count(s)
            .is_some_and(|n| n >= self.options.string_threshold)
    }

    fn encode_array(&mut self, items: &[Value]) -> String {
        let parts: Vec<String> = items.iter().map(|item| self.encode_item(item)).collect();
        format!("[{}]", parts.join(","))
    }

    fn encode_object(&mut self, map: &Map<String, Value>) -> String {
        if self.freqs.shape_count(&analyzer::shape_of(map)) > 1 {
            // Repeated shape: the values in key order, prefixed with the
            // negated position of the shared key-list line.
            let values: Vec<String> = map.values().map(|value| self.encode_item(value)).collect();
            let keys = Value::Array(map.keys().map(|k| Value::String(k.clone())).collect());
            let keys_pos = self.write(&keys);
            let mut parts = Vec::with_capacity(values.len() + 1);
            parts.push(format!("-{keys_pos}"));
            parts.extend(values);
            format!("[{}]", parts.join(","))
        } else {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{}:{}", json_string(key), self.encode_item(value)))
                .collect();
            format!("{{{}}}", entries.join(","))
        }
    }
}

/// JSON string literal for `s`, quoted and escaped.
fn json_string(s: &str) -> String {
    Value::from(s).to_string()
}
