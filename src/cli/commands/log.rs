//! Emit a single line — the scriptable entry point for shell hooks that want
//! their messages interleaved with the tool's own diagnostics.

use crate::{Error, Level, Logger};

/// Whether the line actually appears depends on the active threshold, same as
/// for in-process call sites.
///
/// # Errors
/// Unknown level string, or `none` — that one names a threshold and cannot
/// carry a message.
pub fn log(level: &str, message: &[String]) -> Result<(), Error> {
    let level: Level = level.parse()?;
    if !level.is_message_level() {
        return Err(Error::InvalidLevel(level.to_string()));
    }
    Logger::global().log(level, &message.join(" "));
    Ok(())
}
