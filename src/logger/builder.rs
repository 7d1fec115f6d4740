//! Builds a fully configured logger in one expression — mostly for tests and
//! embedders that want a captured writer instead of process-wide state.

use super::{ColorMode, Inner, Logger, Sink};
use crate::level::Level;
use std::io::Write;

#[must_use]
pub struct LoggerBuilder {
    min_level: Level,
    color_mode: ColorMode,
    sink: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// Same silent default as [`Logger::new`].
    pub fn new() -> Self {
        Self {
            min_level: Level::None,
            color_mode: ColorMode::Auto,
            sink: None,
        }
    }

    /// Minimum severity that will be emitted.
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Shorthand for forcing color on or off; use [`LoggerBuilder::color_mode`]
    /// to keep automatic detection.
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.color_mode = if enabled {
            ColorMode::Enabled
        } else {
            ColorMode::Disabled
        };
        self
    }

    pub const fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Replaces the default stderr sink. Automatic color detection treats a
    /// custom writer as non-interactive.
    pub fn writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.sink = Some(writer);
        self
    }

    pub fn build(self) -> Logger {
        Logger::from_inner(Inner {
            min_level: self.min_level,
            sink: self.sink.map_or(Sink::Stderr, Sink::Custom),
            color_mode: self.color_mode,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
