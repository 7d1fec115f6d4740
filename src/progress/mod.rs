//! Single-line terminal progress bar for long-running dump operations.
//!
//! One indicator tracks one operation: `start()` opens a live line,
//! `progressed()` redraws it in place at most once per wall-clock second,
//! `stop()` closes it with a verdict and a newline. The line layout is
//! byte-compatible with the historical tool:
//!
//! ```text
//! label (30 cols, left)          |####----------|  28%
//! ```

use crate::term::Terminal;
use std::io::{self, Write};

const LABEL_WIDTH: usize = 30;
const FALLBACK_WIDTH: usize = 80;
// Label field, the space before the bar, both '|' delimiters, one spare
// column, and 4 columns for "...%".
const FIELD_OVERHEAD: usize = LABEL_WIDTH + 8;

/// Seam for the once-per-second redraw limit — tests drive time by hand.
pub trait Clock: Send {
    /// Wall-clock time in whole seconds.
    fn now_secs(&self) -> i64;
}

/// Production clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Created,
    Started,
    Stopped,
}

/// Transient, one instance per tracked operation. Construct with
/// [`ProgressIndicator::new`] for real terminal output, or through
/// [`ProgressIndicator::builder`] to inject width, writer, and clock.
pub struct ProgressIndicator {
    label: String,
    line_width: usize,
    bar_width: usize,
    last_update: i64,
    state: State,
    out: Box<dyn Write + Send>,
    clock: Box<dyn Clock>,
}

impl ProgressIndicator {
    /// Terminal-width indicator writing to stdout. The width is sampled once,
    /// here; resizing the terminal mid-operation keeps the old layout.
    pub fn new(label: impl Into<String>) -> Self {
        Self::builder(label).build()
    }

    pub fn builder(label: impl Into<String>) -> ProgressBuilder {
        ProgressBuilder {
            label: label.into(),
            line_width: None,
            out: None,
            clock: None,
        }
    }

    /// Label as rendered, already truncated to the 30-column field.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn line_width(&self) -> usize {
        self.line_width
    }

    #[must_use]
    pub const fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Opens the live line: `<label> Starting.` with no trailing newline so
    /// later redraws can overwrite it in place.
    pub fn start(&mut self) {
        debug_assert!(
            self.state == State::Created,
            "progress indicator started twice"
        );
        self.clear_line();
        let _ = write!(self.out, "\r{:<width$} Starting.", self.label, width = LABEL_WIDTH);
        let _ = self.out.flush();
        self.state = State::Started;
    }

    /// Redraws the bar for `current` of `max` units done.
    ///
    /// Skipped when the wall-clock second has not advanced since the last
    /// redraw (tight copy loops would otherwise melt the terminal), and when
    /// `max == 0` — an ambiguous fraction is logged as a debug diagnostic
    /// instead of rendered. `current > max` pegs the bar and the percentage
    /// at 100.
    ///
    /// Calling this before `start()` or after `stop()` is a precondition
    /// violation: it panics in debug builds and is a no-op in release.
    pub fn progressed(&mut self, current: u64, max: u64) {
        debug_assert!(
            self.state == State::Started,
            "progressed() outside start()/stop()"
        );
        if self.state != State::Started {
            return;
        }

        let now = self.clock.now_secs();
        if now <= self.last_update {
            return;
        }
        if max == 0 {
            if current == 0 {
                crate::debug!("progressed: current == 0 and max == 0");
            } else {
                crate::debug!("progressed: max == 0 with current == {current}");
            }
            return;
        }

        let bar = self.bar_width as u64;
        let percent = (current.saturating_mul(100) / max).min(100);
        let filled = ((current.saturating_mul(bar) / max).min(bar)) as usize;
        let empty = self.bar_width - filled;

        let _ = write!(
            self.out,
            "\r{:<width$} |{}{}|{percent:>3}%",
            self.label,
            "#".repeat(filled),
            "-".repeat(empty),
            width = LABEL_WIDTH,
        );
        let _ = self.out.flush();

        self.last_update = now;
    }

    /// Closes the live line with `Finished.` or `Failed.` and a newline.
    /// Terminal state: the indicator cannot be restarted.
    ///
    /// Same precondition as [`ProgressIndicator::progressed`].
    pub fn stop(&mut self, success: bool) {
        debug_assert!(
            self.state == State::Started,
            "stop() on an indicator that was never started"
        );
        if self.state != State::Started {
            return;
        }

        let verdict = if success { "Finished." } else { "Failed." };
        self.clear_line();
        let _ = writeln!(self.out, "\r{:<width$} {verdict}", self.label, width = LABEL_WIDTH);
        let _ = self.out.flush();
        self.state = State::Stopped;
    }

    // Overwrite the whole live line with spaces and return to column 0.
    fn clear_line(&mut self) {
        let _ = write!(self.out, "\r{:width$}", "", width = self.line_width);
    }
}

#[must_use]
pub struct ProgressBuilder {
    label: String,
    line_width: Option<usize>,
    out: Option<Box<dyn Write + Send>>,
    clock: Option<Box<dyn Clock>>,
}

impl ProgressBuilder {
    /// Overrides the sampled terminal width — tests need a fixed geometry.
    pub const fn line_width(mut self, width: usize) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn writer(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = Some(out);
        self
    }

    pub fn clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> ProgressIndicator {
        let mut label = self.label;
        if label.chars().count() > LABEL_WIDTH {
            label = label.chars().take(LABEL_WIDTH).collect();
        }

        let line_width = self.line_width.unwrap_or_else(|| {
            match usize::from(Terminal.size().width) {
                0 => FALLBACK_WIDTH,
                w => w,
            }
        });

        ProgressIndicator {
            label,
            line_width,
            bar_width: line_width.saturating_sub(FIELD_OVERHEAD),
            last_update: 0,
            state: State::Created,
            out: self.out.unwrap_or_else(|| Box::new(io::stdout())),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        }
    }
}
