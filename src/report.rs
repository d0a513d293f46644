//! Console report for a finished run.

use std::fmt::Display;
use std::io::{self, Write};

use crate::ResultRecord;
use crate::utils::Colors;

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sequences shown alongside the record for small runs.
pub struct Sequences<'a> {
    pub input: &'a [u32],
    pub filtered: &'a [u32],
    pub squared: &'a [u64],
}

/// Write the run report. `sequences` is printed only when the input has at most
/// `display_threshold` values.
pub fn write_report<W: Write>(
    out: &mut W,
    record: &ResultRecord,
    sequences: Option<&Sequences<'_>>,
    display_threshold: usize,
) -> io::Result<()> {
    writeln!(out, "Array size: {}", record.input_size)?;
    writeln!(out, "Number of even values: {}", record.filtered_size)?;

    if let Some(seq) = sequences
        && record.input_size <= display_threshold
    {
        writeln!(out, "Original array: {}", join(seq.input))?;
        writeln!(out, "Filtered array (even numbers): {}", join(seq.filtered))?;
        writeln!(out, "Squared values: {}", join(seq.squared))?;
    }

    writeln!(out, "Average of squared values: {:.2}", record.average)?;
    writeln!(out, "Execution time: {:.6} seconds", record.elapsed_seconds)?;
    Ok(())
}

/// Section banner, e.g. `--- Processing Array (6 elements) ---`.
pub fn banner(text: &str) -> String {
    Colors::colorize(Colors::HEADER, &format!("--- {} ---", text))
}

/// Print the run report to stdout.
pub fn print_report(
    record: &ResultRecord,
    sequences: Option<&Sequences<'_>>,
    display_threshold: usize,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, record, sequences, display_threshold)
}

/// Final line with wall time covering ingestion and processing.
pub fn print_total_time(seconds: f64) {
    println!(
        "\n{} {}",
        Colors::colorize(
            Colors::LABEL,
            "Total execution time (including file reading):"
        ),
        Colors::colorize(Colors::VALUE, &format!("{:.6} seconds", seconds))
    );
}
