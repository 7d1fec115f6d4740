//! Process-wide leveled logger for best-effort diagnostics.
//!
//! Every call site shares one instance (`Logger::global()`); all mutable
//! settings sit behind a single mutex so that level/sink/color changes and
//! line emission serialize — concurrent unsynchronized writes would
//! interleave partial lines. Plain `Logger::new()` stays available so tests
//! and embedders can capture output without touching process state.

mod builder;

pub use builder::LoggerBuilder;

use crate::fmt;
use crate::level::Level;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Tri-state so that an explicit override can be undone again — `Auto` is not
/// reconstructible from a plain on/off flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colorize only when the sink is stderr and stderr is an interactive terminal.
    #[default]
    Auto,
    /// Force ANSI escapes on, regardless of where the sink points.
    Enabled,
    /// Force plain text.
    Disabled,
}

/// Stderr is tracked as its own variant rather than a boxed handle: the
/// automatic color rule needs to know "is this the process error stream",
/// and a capability flag beats comparing stream identities.
pub(crate) enum Sink {
    Stderr,
    Custom(Box<dyn Write + Send>),
}

pub(crate) struct Inner {
    pub(crate) min_level: Level,
    pub(crate) sink: Sink,
    pub(crate) color_mode: ColorMode,
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Leveled, line-oriented logger writing to stderr by default.
pub struct Logger {
    inner: Mutex<Inner>,
}

impl Logger {
    /// Starts silent (`Level::None`): a dump tool must not chat on stderr
    /// unless the operator raised verbosity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                min_level: Level::None,
                sink: Sink::Stderr,
                color_mode: ColorMode::Auto,
            }),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The shared process-wide instance, created on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    pub(crate) fn from_inner(inner: Inner) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    // A poisoned lock only means some caller panicked mid-emission; the
    // settings themselves are always valid, so recover the guard.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sets the minimum severity that will be emitted.
    pub fn set_level(&self, level: Level) {
        self.lock().min_level = level;
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.lock().min_level
    }

    /// Redirects output; `None` resets to the process standard error stream.
    /// The sink is owned by the logger from then on but never closed early.
    pub fn set_sink(&self, sink: Option<Box<dyn Write + Send>>) {
        self.lock().sink = sink.map_or(Sink::Stderr, Sink::Custom);
    }

    /// Whether output currently goes to the process standard error stream.
    #[must_use]
    pub fn writes_to_stderr(&self) -> bool {
        matches!(self.lock().sink, Sink::Stderr)
    }

    /// Forces color on/off or restores automatic detection.
    pub fn set_color_mode(&self, mode: ColorMode) {
        self.lock().color_mode = mode;
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.lock().color_mode
    }

    /// Whether the next emitted message would carry ANSI escapes.
    #[must_use]
    pub fn color_active(&self) -> bool {
        Self::resolve_color(&self.lock())
    }

    /// True iff the current threshold lets at least one message level through.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.lock().min_level < Level::None
    }

    /// Lets the logging macros skip formatting work for filtered messages.
    #[must_use]
    pub fn enabled_at(&self, level: Level) -> bool {
        level >= self.lock().min_level
    }

    /// High-volume instrumentation, hidden unless verbosity is raised twice.
    pub fn trace(&self, msg: &str) {
        self.log(Level::Trace, msg);
    }

    /// Diagnostics for a failed run — what was probed, what was skipped.
    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    /// Operational milestones.
    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    /// Plain-string entry point; see [`Logger::log_args`] for the formatting one.
    pub fn log(&self, level: Level, msg: &str) {
        self.log_args(level, format_args!("{msg}"));
    }

    /// Formats and conditionally emits one line.
    ///
    /// Line shape: optional color-start, level label, message, optional color
    /// reset, and a trailing newline unless the message already ends in one.
    /// The line is written and flushed in one go — the tool may crash or exec
    /// into another process at any moment, so nothing may linger in a buffer.
    /// Write failures are swallowed: losing a diagnostic line must never
    /// abort the operation it reports on.
    ///
    /// `Level::None` names a threshold, not a message severity; calls with it
    /// are discarded.
    pub fn log_args(&self, level: Level, args: std::fmt::Arguments<'_>) {
        if !level.is_message_level() {
            return;
        }
        let mut inner = self.lock();
        if level < inner.min_level {
            return;
        }

        let mut line = String::new();
        line.push_str(level.label());
        let _ = line.write_fmt(args);
        if Self::resolve_color(&inner) {
            if let Some(start) = fmt::level_color(level) {
                line = fmt::colorize(&line, start);
            }
        }
        if !line.ends_with('\n') {
            line.push('\n');
        }

        match &mut inner.sink {
            Sink::Stderr => {
                let mut err = io::stderr().lock();
                let _ = err.write_all(line.as_bytes());
                let _ = err.flush();
            }
            Sink::Custom(w) => {
                let _ = w.write_all(line.as_bytes());
                let _ = w.flush();
            }
        }
    }

    fn resolve_color(inner: &Inner) -> bool {
        match inner.color_mode {
            ColorMode::Enabled => true,
            ColorMode::Disabled => false,
            ColorMode::Auto => {
                matches!(inner.sink, Sink::Stderr) && atty::is(atty::Stream::Stderr)
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs through the process-wide logger at trace level, formatting only when
/// the level passes the filter.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {{
        let logger = $crate::Logger::global();
        if logger.enabled_at($crate::Level::Trace) {
            logger.log_args($crate::Level::Trace, format_args!($($arg)*));
        }
    }};
}

/// Logs through the process-wide logger at debug level, formatting only when
/// the level passes the filter.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{
        let logger = $crate::Logger::global();
        if logger.enabled_at($crate::Level::Debug) {
            logger.log_args($crate::Level::Debug, format_args!($($arg)*));
        }
    }};
}

/// Logs through the process-wide logger at info level, formatting only when
/// the level passes the filter.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        let logger = $crate::Logger::global();
        if logger.enabled_at($crate::Level::Info) {
            logger.log_args($crate::Level::Info, format_args!($($arg)*));
        }
    }};
}
