//! Leveled logger whose messages are format templates.
//!
//! Lines look like `[2024-05-01T12:00:00.000Z][info]: Ayla rolls 17`. A
//! template that fails to format is written unformatted instead of being
//! dropped.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::core::value::Value;
use crate::format::{FormatOptions, format_with};

/// Severity of a log line, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown log level: {}. Expected one of: trace, debug, info, warn, error, fatal",
                    s
                )
            })
    }
}

/// Writes formatted, leveled lines to a sink.
pub struct Logger<W: Write> {
    sink: W,
    min_level: LogLevel,
    timestamps: bool,
    options: FormatOptions,
    depth: usize,
}

impl<W: Write> Logger<W> {
    /// A logger at `info` level with timestamps enabled.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            min_level: LogLevel::default(),
            timestamps: true,
            options: FormatOptions::default(),
            depth: 0,
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Writes one line if `level` passes the minimum level.
    pub fn log(&mut self, level: LogLevel, template: &str, args: &[Value]) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        let message = self.render(template, args);
        let indent = "  ".repeat(self.depth);
        if self.timestamps {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            writeln!(self.sink, "{}[{}][{}]: {}", indent, now, level, message)
        } else {
            writeln!(self.sink, "{}[{}]: {}", indent, level, message)
        }
    }

    pub fn trace(&mut self, template: &str, args: &[Value]) -> io::Result<()> {
        self.log(LogLevel::Trace, template, args)
    }

    pub fn debug(&mut self, template: &str, args: &[Value]) -> io::Result<()> {
        self.log(LogLevel::Debug, template, args)
    }

    pub fn info(&mut self, template: &str, args: &[Value]) -> io::Result<()> {
        self.log(LogLevel::Info, template, args)
    }

    pub fn warn(&mut self, template: &str, args: &[Value]) -> io::Result<()> {
        self.log(LogLevel::Warn, template, args)
    }

    pub fn error(&mut self, template: &str, args: &[Value]) -> io::Result<()> {
        self.log(LogLevel::Error, template, args)
    }

    pub fn fatal(&mut self, template: &str, args: &[Value]) -> io::Result<()> {
        self.log(LogLevel::Fatal, template, args)
    }

    /// Writes a group title and indents following lines by two more spaces.
    pub fn group(&mut self, template: &str, args: &[Value]) -> io::Result<()> {
        let title = self.render(template, args);
        writeln!(self.sink, "{}{}", "  ".repeat(self.depth), title)?;
        self.depth += 1;
        Ok(())
    }

    /// Closes the innermost group. No-op when no group is open.
    pub fn group_end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn render(&self, template: &str, args: &[Value]) -> String {
        match format_with(template, args, &self.options) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(template, error = ?e, "log template failed to format, writing it verbatim");
                template.to_string()
            }
        }
    }
}
