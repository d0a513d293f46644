//! Public types for the evensquare API and pipeline.

use crate::utils::config::{DISPLAY_THRESHOLD, MAX_CAPACITY};

/// Outcome of one pipeline run. Built once by the orchestrator, read by reporting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultRecord {
    /// Number of values handed to the pipeline.
    pub input_size: usize,
    /// Number of even values kept by the filter stage.
    pub filtered_size: usize,
    /// Exact mean of the squared values (not rounded; display rounds to 2 decimals).
    pub average: f64,
    /// Wall time spent in the three stages.
    pub elapsed_seconds: f64,
}

/// Effective run settings after defaults, `.evensquare.toml`, environment and CLI are merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Upper bound on every buffer. Input beyond this is truncated at ingestion.
    pub capacity: usize,
    /// Runs with at most this many inputs also print the three sequences.
    pub display_threshold: usize,
    /// Debug-level logging.
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: MAX_CAPACITY,
            display_threshold: DISPLAY_THRESHOLD,
            verbose: false,
        }
    }
}
