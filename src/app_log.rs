use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};
use std::io::Write;

/// Initialize logging. `RUST_LOG` still overrides the level picked here.
pub fn log_env_init(verbose: bool) {
    env_logger::builder()
        .format(log_formatter)
        .filter_level(level(verbose))
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .init();
}

fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Bare messages, errors and warnings get an icon instead of a level name
pub fn log_formatter(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(buf, "{}{}", prefix(record.level()), record.args())
}

fn prefix(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "⛔ ",
        log::Level::Warn => "⚠️ ",
        _ => "",
    }
}
