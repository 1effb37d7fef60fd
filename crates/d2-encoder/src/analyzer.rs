//! Frequency analysis — one pass counting object shapes and string values.

use crate::error::{EncodeError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Shape signature of an object: its keys joined with `,` in insertion order.
///
/// Two objects share a shape only when they have the same keys in the same
/// order. Recomputed per visit; it is just the key list.
pub fn shape_of(map: &Map<String, Value>) -> String {
    map.keys().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// Occurrence tables produced by [`analyze`].
#[derive(Debug, Clone, Default)]
pub struct Frequencies {
    shape_counts: HashMap<String, usize>,
    string_counts: HashMap<String, usize>,
}

impl Frequencies {
    /// Number of object nodes observed with this shape.
    pub fn shape_count(&self, shape: &str) -> usize {
        self.shape_counts.get(shape).copied().unwrap_or(0)
    }

    /// How often this exact string occurred as a value, if it occurred at
    /// all. Object keys are never counted.
    pub fn string_count(&self, s: &str) -> Option<usize> {
        self.string_counts.get(s).copied()
    }

    /// Total object nodes seen: the sum over all shape counts.
    pub fn total_objects(&self) -> usize {
        self.shape_counts.values().sum()
    }

    pub fn distinct_shapes(&self) -> usize {
        self.shape_counts.len()
    }

    pub fn distinct_strings(&self) -> usize {
        self.string_counts.len()
    }
}

/// Walk the whole tree depth-first, counting every string value and every
/// object shape. Array elements and object values are visited in order;
/// numbers, booleans and null contribute nothing.
pub fn analyze(root: &Value, max_depth: usize) -> Result<Frequencies> {
    let mut freqs = Frequencies::default();
    visit(root, 0, max_depth, &mut freqs)?;
    Ok(freqs)
}

fn visit(value: &Value, depth: usize, max_depth: usize, freqs: &mut Frequencies) -> Result<()> {
    if depth > max_depth {
        return Err(EncodeError::TooDeep { limit: max_depth });
    }
    match value {
        Value::String(s) => {
            *freqs.string_counts.entry(s.clone()).or_insert(0) += 1;
        }
        Value::Array(items) => {
            for item in items {
                visit(item, depth + 1, max_depth, freqs)?;
            }
        }
        Value::Object(map) => {
            *freqs.shape_counts.entry(shape_of(map)).or_insert(0) += 1;
            for child in map.values() {
                visit(child, depth + 1, max_depth, freqs)?;
            }
        }
        _ => {}
    }
    Ok(())
}
