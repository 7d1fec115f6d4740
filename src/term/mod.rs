//! Terminal geometry queries. Callers must treat a 0×0 size as "unknown" and
//! apply their own fallback — a CLI that dies because it was piped into a file
//! would be worse than a misdrawn rule.

use std::io::Write;

/// Column/row count reported by the controlling terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

/// Stateless query object — nothing to cache, nothing to tear down.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal;

impl Terminal {
    /// Current terminal size, or 0×0 when stdout is not a terminal or the
    /// query fails. Never panics.
    #[must_use]
    pub fn size(&self) -> Size {
        crossterm::terminal::size()
            .map_or_else(|_| Size::default(), |(width, height)| Size { width, height })
    }

    /// Writes a horizontal rule of dashes spanning `width - 1` columns (one
    /// column reserved so the terminal doesn't auto-wrap), then a newline.
    /// With an unknown width this degrades to a bare newline; write errors
    /// are swallowed like everywhere else on the diagnostic path.
    pub fn print_line(&self, out: &mut dyn Write) {
        let width = usize::from(self.size().width).saturating_sub(1);
        let _ = writeln!(out, "{:-<width$}", "");
    }
}
