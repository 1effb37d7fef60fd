//! Threshold search space — the candidate values tried on each axis.

use d2_encoder::EncodeOptions;
use serde::{Deserialize, Serialize};

/// Highest threshold tried by default; every axis sweeps `0..=DEFAULT_AXIS_MAX`.
pub const DEFAULT_AXIS_MAX: usize = 4;

/// Threshold combinations a sweep tries, one candidate list per axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepGrid {
    pub object_thresholds: Vec<usize>,
    pub array_thresholds: Vec<usize>,
    pub string_thresholds: Vec<usize>,
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            object_thresholds: (0..=DEFAULT_AXIS_MAX).collect(),
            array_thresholds: (0..=DEFAULT_AXIS_MAX).collect(),
            string_thresholds: (0..=DEFAULT_AXIS_MAX).collect(),
        }
    }
}

impl SweepGrid {
    /// Same candidate list on every axis.
    pub fn uniform(values: &[usize]) -> Self {
        Self {
            object_thresholds: values.to_vec(),
            array_thresholds: values.to_vec(),
            string_thresholds: values.to_vec(),
        }
    }

    /// Number of configurations the sweep will try.
    pub fn len(&self) -> usize {
        self.object_thresholds.len() * self.array_thresholds.len() * self.string_thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every configuration in sweep order: the object axis varies slowest,
    /// then array, then string.
    pub fn configurations(&self) -> impl Iterator<Item = EncodeOptions> + '_ {
        self.object_thresholds.iter().flat_map(move |&object| {
            self.array_thresholds.iter().flat_map(move |&array| {
                self.string_thresholds.iter().map(move |&string| {
                    EncodeOptions::default()
                        .with_object_threshold(object)
                        .with_array_threshold(array)
                        .with_string_threshold(string)
                })
            })
        })
    }
}
