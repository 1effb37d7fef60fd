//! D2 — one-way compacting encoder for JSON-like value trees.
//!
//! Two passes over the tree:
//! 1. Frequency analysis — count object key-shapes and value strings
//! 2. Threshold encoding — pool repeated structure on numbered lines and
//!    reference it by position
//!
//! The artifact is line-oriented text. Every line is a JSON value; a bare
//! number inside an array or object is a 1-based reference to another line,
//! and an array whose first element is negative carries the values of an
//! object whose key list lives on the referenced line.
//!
//! Inputs are [`serde_json::Value`] trees: owned values cannot form cycles,
//! and the `preserve_order` feature keeps object keys in insertion order,
//! which the shape signatures rely on.
//!
//! ```
//! use d2_encoder::{encode, EncodeOptions};
//! use serde_json::json;
//!
//! let value = json!([{"x": 1}, {"x": 2}]);
//! let text = encode(&value, &EncodeOptions::default())?;
//! assert_eq!(text, "1\n[\"x\"]\n2\n[[-2,1],[-2,3]]");
//! # Ok::<(), d2_encoder::EncodeError>(())
//! ```

pub mod analyzer;
pub mod encoder;
pub mod error;
pub mod pool;

pub use encoder::{encode, EncodeOptions};
pub use error::{EncodeError, Result};
