//! Minimal stderr backend for the `log` facade.

use crossterm::style::Stylize;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = record.args().to_string();
        match record.level() {
            Level::Error => eprintln!("{}", msg.red()),
            Level::Warn => eprintln!("{}", msg.yellow()),
            Level::Info => eprintln!("{msg}"),
            Level::Debug | Level::Trace => eprintln!("{}", msg.dark_grey()),
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Safe to call more than once; later calls only adjust
/// the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Level for the given flags: quiet wins over verbose.
pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Off,
        (false, true) => LevelFilter::Debug,
        (false, false) => LevelFilter::Warn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_silences_everything() {
        assert_eq!(level_for(true, true), LevelFilter::Off);
        assert_eq!(level_for(false, true), LevelFilter::Debug);
        assert_eq!(level_for(false, false), LevelFilter::Warn);
    }
}
