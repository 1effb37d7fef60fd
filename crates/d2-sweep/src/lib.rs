//! D2 sweep — brute-force threshold search for the D2 encoder.
//!
//! For each input the sweep encodes under every configuration in a
//! [`SweepGrid`], ranks the artifacts by size ratio plus a longest-line
//! penalty, and keeps the winner. File helpers read JSON documents from
//! disk and write the best artifact next to the input.

pub mod error;
pub mod grid;
pub mod runner;
pub mod score;

pub use error::{Result, SweepError};
pub use grid::SweepGrid;
pub use runner::{sweep_file, sweep_files, sweep_value, FileSweep, SweepOutcome, SweepReport};
