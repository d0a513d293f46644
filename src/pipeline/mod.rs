//! Pipeline components: bounded buffers, stages, orchestrator.

pub mod buffers;
pub mod orchestrator;
pub mod stages;

pub use buffers::{BoundedBuffer, Workspace};
pub use orchestrator::{check_capacity, process_data, run_batch};
pub use stages::{
    average, filter_even, filter_even_into, is_even, square, square_widen, square_widen_into,
};
