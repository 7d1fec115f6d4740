//! Print the option schema, or effective values when a config file is given.

use crate::Error;
use crate::config::{Config, OPTIONS, Usage};
use crate::term::Terminal;
use std::io::{self, Write};
use std::path::Path;

pub fn options(usage: Option<Usage>, config: Option<&Path>) -> Result<(), Error> {
    let config = match config {
        Some(path) => Some(Config::load(path)?),
        None => None,
    };

    let term = Terminal;
    let mut out = io::stdout().lock();

    term.print_line(&mut out);
    writeln!(out, "{:<26} {:<8} {:<20} value", "name", "type", "contexts")?;
    term.print_line(&mut out);

    for def in OPTIONS {
        if usage.is_some_and(|u| !def.usage.contains(u)) {
            continue;
        }
        // Without a config file the schema default is the effective value.
        let value = config
            .as_ref()
            .and_then(|c| c.get(def.name))
            .map_or_else(|| def.default.to_string(), ToString::to_string);
        writeln!(out, "{:<26} {:<8} {:<20} {}", def.name, def.kind, def.usage, value)?;
    }

    term.print_line(&mut out);
    Ok(())
}
