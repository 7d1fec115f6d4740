//! The four basic SGR escapes the wire format allows. Anything fancier (truecolor,
//! backgrounds) would break consumers that grep the colored output of older builds.

use crate::level::Level;

/// Terminates any active SGR styling so subsequent text returns to the terminal default.
pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Color-start escape for a message level, `None` for levels that render plain.
///
/// The mapping is byte-compatible with the historical tool: green for the most
/// verbose level, red for the least verbose.
#[must_use]
pub const fn level_color(level: Level) -> Option<&'static str> {
    match level {
        Level::Trace => Some(GREEN),
        Level::Debug => Some(YELLOW),
        Level::Info => Some(RED),
        Level::None => None,
    }
}

/// Convenience wrapper — callers shouldn't manage reset sequences by hand.
#[must_use]
pub fn colorize(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}
