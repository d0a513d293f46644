//! CLI command handler: resolve settings, ingest, run the pipeline, report.

use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::path::Path;

use crate::Settings;
use crate::engine::arg_parser::Cli;
use crate::ingest::read_numbers;
use crate::pipeline::{Workspace, process_data};
use crate::report::{Sequences, banner, print_report};
use crate::utils::{
    apply_env_to_settings, apply_file_to_settings, load_dotenv, load_settings_toml, set_verbose,
    setup_logging,
};

/// Merge defaults < settings file < environment < CLI flags.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::default();

    if let Some(file) = load_settings_toml(&cli.config_path()) {
        apply_file_to_settings(&file, &mut settings);
    } else if cli.config.is_some() {
        bail!(
            "settings file {} not found or invalid",
            cli.config_path().display()
        );
    }

    load_dotenv(Path::new("."));
    apply_env_to_settings(&mut settings)?;

    if let Some(v) = cli.capacity {
        settings.capacity = v;
    }
    if let Some(v) = cli.display_threshold {
        settings.display_threshold = v;
    }
    if let Some(v) = cli.verbose {
        settings.verbose = v;
    }

    if settings.capacity == 0 {
        bail!("capacity must be at least 1");
    }
    Ok(settings)
}

/// Read `input`, run the pipeline over it and print the report.
pub fn run_file(input: &Path, settings: &Settings) -> Result<()> {
    println!("{}", banner("Starting file reading and processing"));

    let ingested = read_numbers(input, settings.capacity)?;
    if ingested.truncated {
        info!("Processing the first {} values only", ingested.len());
    }

    println!(
        "{}",
        banner(&format!("Processing Array ({} elements)", ingested.len()))
    );
    let mut workspace = Workspace::allocate(settings.capacity, ingested.len())
        .context("initialize pipeline buffers")?;
    let record = process_data(ingested.as_slice(), &mut workspace)?;

    let sequences = Sequences {
        input: ingested.as_slice(),
        filtered: workspace.filtered(),
        squared: workspace.squared(),
    };
    print_report(&record, Some(&sequences), settings.display_threshold)
        .context("write report")?;
    Ok(())
}

/// Entry point for the CLI.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose.unwrap_or(false));
    let settings = resolve_settings(cli)?;
    set_verbose(settings.verbose);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        settings
    );
    run_file(&cli.input, &settings)
}
