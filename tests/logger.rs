//! Tests for logger filtering, line shape, and color resolution.

use dumplog::{ColorMode, Level, Logger};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Cloneable handle onto the bytes the logger wrote — the logger owns its
/// boxed writer, so the test keeps a second handle to inspect.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured(level: Level, colors: bool) -> (Logger, SharedBuf) {
    let buf = SharedBuf::default();
    let logger = Logger::builder()
        .level(level)
        .colors(colors)
        .writer(Box::new(buf.clone()))
        .build();
    (logger, buf)
}

#[test]
fn filtered_levels_produce_no_output() {
    let (logger, buf) = captured(Level::Info, false);
    for _ in 0..10 {
        logger.trace("dropped");
        logger.debug("dropped");
    }
    assert!(buf.is_empty());
}

#[test]
fn default_threshold_suppresses_everything() {
    let buf = SharedBuf::default();
    let logger = Logger::builder()
        .colors(false)
        .writer(Box::new(buf.clone()))
        .build();
    assert!(!logger.is_enabled());
    logger.trace("dropped");
    logger.debug("dropped");
    logger.info("dropped");
    assert!(buf.is_empty());
}

#[test]
fn passing_levels_emit_one_labeled_line_each() {
    let (logger, buf) = captured(Level::Trace, false);
    logger.trace("first");
    logger.debug("second");
    logger.info("third");
    assert_eq!(
        buf.contents(),
        "TRACE: first\nDEBUG: second\nINFO: third\n"
    );
}

#[test]
fn newline_is_appended_exactly_once() {
    let (logger, buf) = captured(Level::Info, false);
    logger.info("no trailing newline");
    logger.info("already terminated\n");
    assert_eq!(
        buf.contents(),
        "INFO: no trailing newline\nINFO: already terminated\n"
    );
}

#[test]
fn sentinel_level_never_carries_a_message() {
    // "none" parses fine as a threshold, but a message logged at it must be
    // discarded, not emitted as a bare unlabeled line.
    let level: Level = "none".parse().unwrap();
    assert!(!level.is_message_level());

    let (logger, buf) = captured(Level::Info, false);
    logger.log(level, "leaked through the sentinel");
    logger.log_args(level, format_args!("leaked through the sentinel"));
    assert!(buf.is_empty());
}

#[test]
fn format_args_entry_point() {
    let (logger, buf) = captured(Level::Debug, false);
    logger.log_args(Level::Debug, format_args!("copied {} of {} blocks", 7, 512));
    assert_eq!(buf.contents(), "DEBUG: copied 7 of 512 blocks\n");
}

#[test]
fn forced_color_wraps_the_line_per_level() {
    let (logger, buf) = captured(Level::Trace, true);
    logger.trace("t");
    logger.debug("d");
    logger.info("i");
    assert_eq!(
        buf.contents(),
        "\x1b[32mTRACE: t\x1b[0m\n\x1b[33mDEBUG: d\x1b[0m\n\x1b[31mINFO: i\x1b[0m\n"
    );
}

#[test]
fn disabled_color_emits_no_escapes() {
    let (logger, buf) = captured(Level::Trace, false);
    logger.trace("plain");
    assert!(!buf.contents().contains('\x1b'));
}

#[test]
fn auto_mode_treats_a_custom_writer_as_non_interactive() {
    let buf = SharedBuf::default();
    let logger = Logger::builder()
        .level(Level::Info)
        .color_mode(ColorMode::Auto)
        .writer(Box::new(buf.clone()))
        .build();
    assert!(!logger.color_active());
    logger.info("plain");
    assert!(!buf.contents().contains('\x1b'));
}

#[test]
fn resetting_to_auto_restores_detection() {
    let (logger, _buf) = captured(Level::Info, false);
    logger.set_color_mode(ColorMode::Enabled);
    assert!(logger.color_active());
    // Back to auto: the sink is a captured buffer, not stderr, so detection
    // must resolve to plain output again.
    logger.set_color_mode(ColorMode::Auto);
    assert_eq!(logger.color_mode(), ColorMode::Auto);
    assert!(!logger.color_active());
}

#[test]
fn threshold_is_mutable_at_runtime() {
    let (logger, buf) = captured(Level::None, false);
    logger.info("dropped");
    assert!(buf.is_empty());

    logger.set_level(Level::Info);
    assert_eq!(logger.level(), Level::Info);
    assert!(logger.is_enabled());
    logger.info("kept");
    assert_eq!(buf.contents(), "INFO: kept\n");
}

#[test]
fn enabled_at_matches_the_threshold() {
    let (logger, _buf) = captured(Level::Debug, false);
    assert!(!logger.enabled_at(Level::Trace));
    assert!(logger.enabled_at(Level::Debug));
    assert!(logger.enabled_at(Level::Info));
}

#[test]
fn resetting_the_sink_detaches_the_old_writer() {
    let buf = SharedBuf::default();
    let logger = Logger::builder()
        .level(Level::Info)
        .colors(false)
        .writer(Box::new(buf.clone()))
        .build();
    assert!(!logger.writes_to_stderr());

    logger.set_sink(None);
    assert!(logger.writes_to_stderr());
    logger.info("after reset");
    assert!(!buf.contents().contains("after reset"));
}

// The one test that touches process-wide state; everything global-related
// stays in this single function so parallel tests can't race on it.
#[test]
fn global_logger_is_shared_and_macros_short_circuit() {
    let first: *const Logger = Logger::global();
    let second: *const Logger = Logger::global();
    assert_eq!(first, second);

    // Default threshold is the sentinel: the macros must filter everything
    // without panicking or writing.
    assert!(!Logger::global().is_enabled());
    dumplog::trace!("dropped {}", 1);
    dumplog::debug!("dropped {}", 2);
    dumplog::info!("dropped {}", 3);
}
