use colored::{Color, Colorize};
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Colors used for console labels.
pub struct Colors;

impl Colors {
    pub const HEADER: Color = Color::Cyan;
    pub const LABEL: Color = Color::White;
    pub const VALUE: Color = Color::Green;

    pub fn colorize(color: Color, s: &str) -> String {
        s.color(color).to_string()
    }
}

/// Raise or lower this crate's log level after the logger is installed.
pub fn set_verbose(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    log::set_max_level(level);
}

/// Install the logger. Safe to call more than once; later calls only adjust the level.
pub fn setup_logging(verbose: bool) {
    let _ = Builder::from_default_env()
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Debug) // Our crate: capped by set_verbose
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        Level::Error => "ERROR".red(),
                        _ => unreachable!(),
                    };
                    let path = record.target().to_string().white();
                    format!("[{} {} {}] {}", name.cyan(), level_str, path, record.args())
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .try_init();
    set_verbose(verbose);
}
