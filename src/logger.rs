use std::io::Write;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

use crate::messages::Palette;

struct RunnerLogger {
    file: Option<Mutex<std::fs::File>>,
    filter: LevelFilter,
    palette: Palette,
    start: Instant,
}

/// Render a record the way it is shown on the console
fn format_console_line(palette: Palette, level: Level, target: &str, message: &str) -> String {
    match level {
        Level::Error => format!("{} {message}", palette.error()),
        Level::Warn => format!("{} {message}", palette.warning()),
        Level::Info => message.to_string(),
        Level::Debug | Level::Trace => palette.dim(&format!("[{target}] {message}")),
    }
}

/// Level filter from a `RUST_LOG` value. Errors are never filtered out, failures must
/// always reach the console.
fn level_filter(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|s| s.parse().ok())
        .unwrap_or(LevelFilter::Info)
        .max(LevelFilter::Error)
}

impl Log for RunnerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("{}", record.args());
        let _ = writeln!(
            std::io::stderr().lock(),
            "{}",
            format_console_line(self.palette, record.level(), record.target(), &message)
        );

        // Also write to file if configured
        if let Some(ref file) = self.file {
            let elapsed = Instant::now().duration_since(self.start).as_secs_f64();
            let _ = writeln!(
                file.lock(),
                "[{elapsed:.3}s] [{}] {} - {message}",
                record.level(),
                record.target(),
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
        if let Some(ref file) = self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Initialize the global logger. Must be called once before any logging.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init(log_file: Option<std::fs::File>) {
    let filter = level_filter(std::env::var("RUST_LOG").ok().as_deref());

    let logger = RunnerLogger {
        file: log_file.map(Mutex::new),
        filter,
        palette: Palette::detect(),
        start: Instant::now(),
    };

    log::set_boxed_logger(Box::new(logger)).expect("logger already initialized");
    log::set_max_level(filter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_is_printed_verbatim() {
        assert_eq!(
            format_console_line(Palette::colored(), Level::Info, "lazy_runner", "Command completed."),
            "Command completed."
        );
    }

    #[test]
    fn test_errors_and_warnings_are_marked() {
        let line = format_console_line(
            Palette::colored(),
            Level::Error,
            "lazy_runner",
            "Invalid selection.",
        );
        assert!(line.contains('✘'));
        assert!(line.ends_with(" Invalid selection."));
        assert!(
            format_console_line(Palette::colored(), Level::Warn, "lazy_runner", "careful")
                .ends_with(" careful")
        );
    }

    #[test]
    fn test_plain_lines_when_not_a_terminal() {
        assert_eq!(
            format_console_line(Palette::plain(), Level::Error, "lazy_runner", "boom"),
            "✘ boom"
        );
        assert_eq!(
            format_console_line(Palette::plain(), Level::Debug, "lazy_runner::runner", "Spawning 'ls'"),
            "[lazy_runner::runner] Spawning 'ls'"
        );
    }

    #[test]
    fn test_debug_includes_target() {
        let line = format_console_line(
            Palette::colored(),
            Level::Debug,
            "lazy_runner::runner",
            "Spawning 'ls'",
        );
        assert!(line.contains("[lazy_runner::runner] Spawning 'ls'"));
    }

    #[test]
    fn test_level_filter_never_hides_errors() {
        assert_eq!(level_filter(Some("off")), LevelFilter::Error);
        assert_eq!(level_filter(Some("error")), LevelFilter::Error);
        assert_eq!(level_filter(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_filter(Some("nonsense")), LevelFilter::Info);
        assert_eq!(level_filter(None), LevelFilter::Info);
    }
}
