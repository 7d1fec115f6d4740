//! Unified error type for all dumplog operations.

use crate::config::OptionKind;
use crate::level::ParseLevelError;

/// Error type for dumplog operations.
///
/// Diagnostic emission itself never surfaces errors (a lost log line must not
/// abort the operation it reports on), so every variant here comes from the
/// configuration layer or the CLI.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Option name not present in the schema.
    UnknownOption(String),
    /// Option value does not match the declared kind.
    InvalidValue {
        option: &'static str,
        expected: OptionKind,
    },
    /// Invalid log level string.
    InvalidLevel(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::UnknownOption(name) => write!(f, "unknown option: {name}"),
            Self::InvalidValue { option, expected } => {
                write!(f, "option {option} expects a {expected} value")
            }
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<ParseLevelError> for Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}
