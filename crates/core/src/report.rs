//! Leveled operator-facing messages.
//!
//! Workflows never print status text directly. They go through a [`Reporter`]
//! so the rendering (and, in tests, the recording) of messages stays
//! swappable.

use std::fmt::{Display, Formatter};

use log::{error, info, warn};

/// The kind of a reported message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notice {
    Header,
    Step,
    Info,
    Status,
    Success,
    Warning,
    Error,
}

impl Notice {
    /// The log target used for this kind of notice.
    #[must_use]
    pub fn target(self) -> &'static str {
        match self {
            Notice::Header => "header",
            Notice::Step => "step",
            Notice::Info => "info",
            Notice::Status => "status",
            Notice::Success => "success",
            Notice::Warning => "warning",
            Notice::Error => "error",
        }
    }

    /// Maps a log target back to its notice kind.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        match target {
            "header" => Some(Notice::Header),
            "step" => Some(Notice::Step),
            "info" => Some(Notice::Info),
            "status" => Some(Notice::Status),
            "success" => Some(Notice::Success),
            "warning" => Some(Notice::Warning),
            "error" => Some(Notice::Error),
            _ => None,
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.target().to_uppercase())
    }
}

/// Sink for leveled messages.
///
/// Only [`Reporter::report`] is required; the named helpers forward to it.
pub trait Reporter {
    fn report(&self, notice: Notice, message: &str);

    fn header(&self, message: &str) {
        self.report(Notice::Header, message);
    }

    /// Steps are framed so they stand out between command output.
    fn step(&self, message: &str) {
        self.report(Notice::Step, &format!("************ {message} ************"));
    }

    fn info(&self, message: &str) {
        self.report(Notice::Info, message);
    }

    fn status(&self, message: &str) {
        self.report(Notice::Status, message);
    }

    fn success(&self, message: &str) {
        self.report(Notice::Success, message);
    }

    fn warning(&self, message: &str) {
        self.report(Notice::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Notice::Error, message);
    }
}

/// Reporter backed by the `log` facade, one target per [`Notice`].
#[derive(Default, Clone, Copy, Debug)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, notice: Notice, message: &str) {
        match notice {
            Notice::Warning => warn!(target: "warning", "{message}"),
            Notice::Error => error!(target: "error", "{message}"),
            Notice::Header => info!(target: "header", "{message}"),
            Notice::Step => info!(target: "step", "{message}"),
            Notice::Info => info!(target: "info", "{message}"),
            Notice::Status => info!(target: "status", "{message}"),
            Notice::Success => info!(target: "success", "{message}"),
        }
    }
}
