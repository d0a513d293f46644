//! Error types for the pipeline and ingestion layers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by buffers, stages and the orchestrator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Requested work does not fit in the pre-sized storage.
    #[error("input size {len} exceeds maximum allowed size ({capacity})")]
    CapacityExceeded { len: usize, capacity: usize },

    /// A buffer could not be acquired. Anything acquired before it has already been released.
    #[error("memory allocation failed for {buffer} buffer ({requested} elements)")]
    Allocation {
        buffer: &'static str,
        requested: usize,
    },
}

/// Errors raised while reading the input source.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("could not open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
