//! evensquare CLI: average of the squares of the even integers in a file.

use anyhow::Result;
use clap::Parser;
use evensquare::engine::arg_parser::Cli;
use evensquare::engine::handle_run;
use evensquare::report::print_total_time;
use std::process::ExitCode;
use std::time::Instant;

fn run(cli: &Cli) -> Result<()> {
    let start_time = Instant::now();
    handle_run(cli)?;
    print_total_time(start_time.elapsed().as_secs_f64());
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help / --version print to stdout and are not failures.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
