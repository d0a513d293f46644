use clap::Parser;
use std::path::PathBuf;

use crate::utils::config::PackagePaths;

/// Filter even values from a file of unsigned integers, square them and report the mean.
#[derive(Clone, Debug, Parser)]
#[command(name = "evensquare", version)]
#[command(about = "Average of the squares of the even integers in INPUT_FILE.")]
pub struct Cli {
    /// Text file of whitespace-separated unsigned integers.
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Maximum number of values to read and process. Default: 750000000.
    #[arg(long, short = 'n', value_parser = clap::value_parser!(usize))]
    pub capacity: Option<usize>,

    /// Print the raw sequences when the input has at most this many values. Default: 20.
    #[arg(long, short = 't', value_parser = clap::value_parser!(usize))]
    pub display_threshold: Option<usize>,

    /// Settings file. Default: `.evensquare.toml` in the working directory.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

impl Cli {
    /// Get the settings file path, defaulting to the package config filename in the working directory.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(PackagePaths::get().config_filename()))
    }
}
