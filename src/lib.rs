//! evensquare: filter even values, square them without overflow, report the mean.

pub mod engine;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::{IngestError, PipelineError};
pub use types::*;
pub use utils::config::MAX_CAPACITY;

use log::debug;
use std::path::Path;

/// Result alias used by public evensquare API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: read `path` (at most `capacity` values) and run the pipeline over it.
///
/// Returns the [`ResultRecord`] along with the ingested values and the stage buffers, so a
/// caller can display or check the sequences. Truncation at `capacity` is logged, not an error.
///
/// ```ignore
/// let (record, _input, _workspace) = evensquare::process_file(path, evensquare::MAX_CAPACITY)?;
/// println!("{:.2}", record.average);
/// ```
pub fn process_file(
    path: &Path,
    capacity: usize,
) -> Result<(ResultRecord, ingest::Ingested, pipeline::Workspace)> {
    let ingested = ingest::read_numbers(path, capacity)?;
    debug!(
        "{}: {} values (truncated: {})",
        path.display(),
        ingested.len(),
        ingested.truncated
    );
    let (record, workspace) = pipeline::run_batch(ingested.as_slice(), capacity)?;
    Ok((record, ingested, workspace))
}
