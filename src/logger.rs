//! Levelled, timestamped logging to stderr.
//!
//! Stdout is reserved for command output, so every level writes to stderr.
//! `debug!` lines are only emitted when `AEROCALC_LOG=debug` is set.

use chrono::Utc;
use std::fmt;

/// Environment variable that enables debug output.
pub const LOG_ENV: &str = "AEROCALC_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Self::Debug => "\x1b[36m[DEBUG]",
            Self::Info => "\x1b[32m[INFO] ",
            Self::Warn => "\x1b[35m[WARN] ",
            Self::Error => "\x1b[31m[ERROR]",
        }
    }
}

/// Whether debug output was requested through the environment.
pub fn debug_enabled() -> bool {
    std::env::var(LOG_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("debug"))
}

/// Format a log line without emitting it.
pub fn format_line(level: Level, timestamp: &str, args: fmt::Arguments<'_>) -> String {
    format!("{}[{}]\x1b[0m {}", level.tag(), timestamp, args)
}

#[doc(hidden)]
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
    if level == Level::Debug && !debug_enabled() {
        return;
    }
    let now = Utc::now().format("%H:%M:%S").to_string();
    eprintln!("{}", format_line(level, &now, args));
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Error, format_args!($($arg)*))
    };
}
