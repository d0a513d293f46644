//! Pure transformation stages: filter-even, square-widen, average-reduce.
//!
//! Each stage comes in two shapes: a pure function returning a fresh `Vec`, and an `_into`
//! variant that writes into a [`BoundedBuffer`] owned by the orchestrator.

use crate::error::PipelineError;
use crate::pipeline::buffers::BoundedBuffer;

pub fn is_even(value: u32) -> bool {
    value % 2 == 0
}

/// Widen before multiplying. `(u32::MAX)^2 = 2^64 - 2^33 + 1`, so the product always fits.
pub fn square(value: u32) -> u64 {
    let v = u64::from(value);
    v * v
}

fn evens(input: &[u32]) -> impl Iterator<Item = u32> + '_ {
    input.iter().copied().filter(|&v| is_even(v))
}

/// Every even element of `input`, in original order.
pub fn filter_even(input: &[u32]) -> Vec<u32> {
    evens(input).collect()
}

/// Filter into `output`, replacing its contents. Returns the filtered length.
pub fn filter_even_into(
    input: &[u32],
    output: &mut BoundedBuffer<u32>,
) -> Result<usize, PipelineError> {
    output.clear();
    output.extend_bounded(evens(input))
}

/// Square of each element, index for index.
pub fn square_widen(input: &[u32]) -> Vec<u64> {
    input.iter().map(|&v| square(v)).collect()
}

/// Square into `output`, replacing its contents. Output length equals input length.
pub fn square_widen_into(
    input: &[u32],
    output: &mut BoundedBuffer<u64>,
) -> Result<usize, PipelineError> {
    output.clear();
    output.extend_bounded(input.iter().map(|&v| square(v)))
}

/// Arithmetic mean. An empty slice averages to `0.0`.
///
/// The sum is kept in `u128`, which holds up to 2^64 elements of `u64::MAX` without wrapping.
pub fn average(input: &[u64]) -> f64 {
    if input.is_empty() {
        return 0.0;
    }
    let sum: u128 = input.iter().map(|&v| u128::from(v)).sum();
    sum as f64 / input.len() as f64
}
