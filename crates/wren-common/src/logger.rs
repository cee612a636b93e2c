//! A small `log` backend for terminal use.
//!
//! Library crates only emit records through the `log` facade; binaries decide
//! whether anything is printed by calling [`init`].

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use owo_colors::OwoColorize;

/// Writes every enabled record to stderr as `[level target] message`.
///
/// Filtering is driven by [`log::max_level`], which [`init`] sets.
#[derive(Debug, Default)]
pub struct TerminalLogger;

static LOGGER: TerminalLogger = TerminalLogger;

impl TerminalLogger {
    /// Render a record the way it is printed, without the trailing newline.
    #[must_use]
    pub fn format(record: &Record<'_>) -> String {
        let level = match record.level() {
            Level::Error => "error".red().bold().to_string(),
            Level::Warn => "warn".yellow().to_string(),
            Level::Info => "info".green().to_string(),
            Level::Debug => "debug".blue().to_string(),
            Level::Trace => "trace".dimmed().to_string(),
        };
        format!("[{level} {}] {}", record.target(), record.args())
    }
}

impl Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}

/// Install [`TerminalLogger`] as the global logger with the given level.
///
/// # Errors
///
/// Returns an error if another logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Map the CLI's `-v` / `-q` counts onto a level filter.
///
/// Zero of each gives `Warn`; every `-v` raises verbosity one step and every
/// `-q` lowers it, saturating at `Off` and `Trace`.
#[must_use]
pub fn level_from_verbosity(verbose: u8, quiet: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let index = (2 + i16::from(verbose) - i16::from(quiet)).clamp(0, 5);
    LEVELS[usize::try_from(index).unwrap_or(0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_defaults_to_warn() {
        assert_eq!(level_from_verbosity(0, 0), LevelFilter::Warn);
    }

    #[test]
    fn verbosity_saturates() {
        assert_eq!(level_from_verbosity(10, 0), LevelFilter::Trace);
        assert_eq!(level_from_verbosity(0, 10), LevelFilter::Off);
        assert_eq!(level_from_verbosity(2, 1), LevelFilter::Info);
    }

    #[test]
    fn format_includes_target_and_message() {
        let line = TerminalLogger::format(
            &Record::builder()
                .level(Level::Info)
                .target("wren::html")
                .args(format_args!("opened <p>"))
                .build(),
        );
        assert!(line.contains("wren::html"));
        assert!(line.ends_with("opened <p>"));
    }
}
