//! Engine module: CLI surface and the command handler that drives one run.

pub mod arg_parser;
pub mod handlers;

pub use arg_parser::Cli;
pub use handlers::{handle_run, resolve_settings, run_file};
