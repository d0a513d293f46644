use log::{debug, error};
use std::time::Instant;

use crate::ResultRecord;
use crate::error::PipelineError;
use crate::pipeline::buffers::Workspace;
use crate::pipeline::stages::{average, filter_even_into, square_widen_into};

/// Reject input that does not fit in the workspace. Runs before any stage.
pub fn check_capacity(len: usize, capacity: usize) -> Result<(), PipelineError> {
    if len > capacity {
        error!(
            "Input size exceeds maximum allowed size ({}): got {}",
            capacity, len
        );
        return Err(PipelineError::CapacityExceeded { len, capacity });
    }
    Ok(())
}

/// Main orchestrator: filter → square → average over one input batch.
///
/// Stage outputs are written into `workspace` and stay readable there after the call
/// (`workspace.filtered()`, `workspace.squared()`). Either every stage completes and a
/// [`ResultRecord`] is returned, or the run is aborted before the first stage.
pub fn process_data(
    input: &[u32],
    workspace: &mut Workspace,
) -> Result<ResultRecord, PipelineError> {
    check_capacity(input.len(), workspace.capacity())?;

    let start = Instant::now();

    let (filtered, squared) = workspace.stage_buffers();
    let filtered_size = filter_even_into(input, filtered)?;
    debug!("filter: {} of {} values are even", filtered_size, input.len());

    square_widen_into(filtered.as_slice(), squared)?;
    let average = average(squared.as_slice());

    let elapsed_seconds = start.elapsed().as_secs_f64();
    debug!("pipeline finished in {:.6}s", elapsed_seconds);

    Ok(ResultRecord {
        input_size: input.len(),
        filtered_size,
        average,
        elapsed_seconds,
    })
}

/// Allocate a workspace sized for `input` (bounded by `capacity`) and run [`process_data`].
/// Returns the record along with the workspace so callers can inspect stage outputs.
pub fn run_batch(
    input: &[u32],
    capacity: usize,
) -> Result<(ResultRecord, Workspace), PipelineError> {
    check_capacity(input.len(), capacity)?;
    let mut workspace = Workspace::allocate(capacity, input.len())?;
    let record = process_data(input, &mut workspace)?;
    Ok((record, workspace))
}
