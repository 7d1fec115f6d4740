//! ANSI SGR escapes for the diagnostic stream.

mod color;

pub use color::{GREEN, RED, RESET, YELLOW, colorize, level_color};
