//! Severity levels that gate which messages reach the diagnostic sink.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a message's level against the configured minimum.
///
/// `None` is a threshold-only sentinel: setting it as the minimum suppresses every
/// message, and no message is ever logged at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation — function entry/exit, per-block copy chatter.
    Trace = 0,
    /// State-change details useful when diagnosing a failed dump run.
    Debug = 1,
    /// Operational milestones — target mounted, transfer finished.
    Info = 2,
    /// Suppress-everything threshold. Never a message's own level.
    #[default]
    None = 3,
}

impl Level {
    /// Lowercase because CLI args and config values use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::None => "none",
        }
    }

    /// Prefix prepended to every emitted line. The sentinel has no label — a message
    /// logged at `None` comes out bare, which is also why the CLI never offers it.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE: ",
            Self::Debug => "DEBUG: ",
            Self::Info => "INFO: ",
            Self::None => "",
        }
    }

    /// True for levels a message can carry; false only for the `None` sentinel.
    #[must_use]
    pub const fn is_message_level(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Convenience for iteration — used by help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Trace, Self::Debug, Self::Info, Self::None]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(pub(crate) String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "none" => Ok(Self::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
