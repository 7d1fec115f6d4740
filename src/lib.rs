#![forbid(unsafe_code)]

//! `dumplog` - Leveled diagnostics and terminal progress reporting for
//! crash-dump CLI tooling.
//!
//! Three independent pieces:
//! - A process-wide leveled [`Logger`] writing color-aware lines to stderr
//! - A terminal-width [`ProgressIndicator`] with rate-limited in-place redraw
//! - The declarative dump [`config`] option schema plus a TOML override loader
//!
//! # Example
//!
//! ```
//! use dumplog::{Level, Logger};
//!
//! let logger = Logger::builder()
//!     .level(Level::Debug)
//!     .colors(false)
//!     .build();
//!
//! logger.info("dump target mounted");
//! logger.debug("probing /proc/vmcore");
//! logger.trace("filtered out at this threshold");
//! ```
//!
//! The progress indicator draws on stdout and keeps one line live until
//! stopped:
//!
//! ```no_run
//! use dumplog::ProgressIndicator;
//!
//! let mut bar = ProgressIndicator::new("Copying");
//! bar.start();
//! for block in 1..=512u64 {
//!     bar.progressed(block, 512);
//! }
//! bar.stop(true);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `dumplog` command-line binary

// Core modules (always available)
pub mod config;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod progress;
pub mod term;

mod error;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::{Config, OPTIONS, OptionDef, OptionKind, OptionValue, Usage};
pub use error::Error;
pub use level::{Level, ParseLevelError};
pub use logger::{ColorMode, Logger, LoggerBuilder};
pub use progress::{Clock, ProgressBuilder, ProgressIndicator, SystemClock};
pub use term::{Size, Terminal};
