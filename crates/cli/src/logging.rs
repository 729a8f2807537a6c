//! Console log format for the wizards.
//!
//! Messages from [`org_wizard_core::report::LogReporter`] carry their notice
//! kind as the log target; that kind picks the label and color. Records from
//! anywhere else fall back to their log level.

use std::io::Write;

use crossterm::style::{StyledContent, Stylize};
use log::{Level, Record};
use org_wizard_core::report::Notice;

/// Label shown in the level column for a record.
#[must_use]
pub fn label_for(target: &str, level: Level) -> String {
    match Notice::from_target(target) {
        Some(notice) => notice.to_string(),
        None => level.to_string(),
    }
}

/// Colors `text` the way records of this kind are shown.
#[must_use]
pub fn paint(target: &str, level: Level, text: String) -> StyledContent<String> {
    match Notice::from_target(target) {
        Some(Notice::Header) => text.magenta().bold(),
        Some(Notice::Step) => text.cyan(),
        Some(Notice::Success) => text.green(),
        Some(Notice::Warning) => text.yellow(),
        Some(Notice::Error) => text.red(),
        Some(Notice::Info | Notice::Status) => text.stylize(),
        None => match level {
            Level::Error => text.red(),
            Level::Warn => text.yellow(),
            _ => text.dark_grey(),
        },
    }
}

fn write_record(buf: &mut env_logger::fmt::Formatter, record: &Record) -> std::io::Result<()> {
    let target = record.target();
    let label = format!("{:<7}", label_for(target, record.level()));

    writeln!(
        buf,
        "{} | {} | {}",
        buf.timestamp_seconds().to_string().green(),
        paint(target, record.level(), label),
        paint(target, record.level(), record.args().to_string()),
    )
}

/// Installs the console logger. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(write_record)
        .init();
}
