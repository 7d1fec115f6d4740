//! Typed configuration store on top of the static option schema.
//!
//! Values start from the schema defaults; a TOML file with an `[options]`
//! table overrides them. Every override is validated against the schema —
//! unknown names and kind mismatches are hard errors, because a silently
//! ignored `KDUMP_SAVEDIR` typo means a dump lands in the wrong place.

mod schema;

pub use schema::{OPTIONS, OptionDef, OptionKind, Usage, find, for_usage};

use crate::error::Error;
use crate::level::Level;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A typed option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl OptionValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// On-disk shape. Everything lives under `[options]` so the file format can
/// grow unrelated sections later without touching existing files.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    options: toml::Table,
}

/// Effective configuration: schema defaults plus any file overrides.
#[derive(Debug, Clone)]
pub struct Config {
    values: HashMap<&'static str, OptionValue>,
}

impl Config {
    /// Pure schema defaults, no file involved.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            values: OPTIONS
                .iter()
                .map(|def| (def.name, default_value(def)))
                .collect(),
        }
    }

    /// Reads and validates a TOML config file.
    ///
    /// # Errors
    /// I/O errors, TOML syntax errors, unknown option names, kind mismatches.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parses and validates config text.
    ///
    /// # Errors
    /// TOML syntax errors, unknown option names, kind mismatches.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let file: ConfigFile = toml::from_str(text)?;
        let mut config = Self::defaults();
        for (name, raw) in &file.options {
            let def = find(name).ok_or_else(|| Error::UnknownOption(name.clone()))?;
            config.values.insert(def.name, coerce(def, raw)?);
        }
        Ok(config)
    }

    /// Loads the per-user config file, or plain defaults when none exists.
    ///
    /// # Errors
    /// No resolvable config directory, or any [`Config::load`] error.
    pub fn load_default() -> Result<Self, Error> {
        let path = Self::default_path().ok_or(Error::ConfigDirNotFound)?;
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::defaults())
        }
    }

    /// Platform config location (`~/.config/dumplog/config.toml` on Linux).
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "dumplog")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(OptionValue::as_str)
    }

    #[must_use]
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.values.get(name).and_then(OptionValue::as_int)
    }

    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(OptionValue::as_bool)
    }

    /// Maps `KDUMP_VERBOSE` to a logger threshold: 0 silent, 1 info, 2 debug,
    /// 3 and up trace.
    #[must_use]
    pub fn verbosity_level(&self) -> Level {
        match self.get_int("KDUMP_VERBOSE").unwrap_or(0) {
            i64::MIN..=0 => Level::None,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

// Defaults in the schema are plain strings; type them per declared kind.
// Unparseable declarations fall back to zero values rather than panicking at
// startup — the table is static, so tests pin the real defaults anyway.
fn default_value(def: &OptionDef) -> OptionValue {
    match def.kind {
        OptionKind::Str => OptionValue::Str(def.default.to_string()),
        OptionKind::Int => OptionValue::Int(def.default.parse().unwrap_or(0)),
        OptionKind::Bool => OptionValue::Bool(matches!(def.default, "true" | "yes" | "1")),
    }
}

fn coerce(def: &OptionDef, raw: &toml::Value) -> Result<OptionValue, Error> {
    match (def.kind, raw) {
        (OptionKind::Str, toml::Value::String(s)) => Ok(OptionValue::Str(s.clone())),
        (OptionKind::Int, toml::Value::Integer(i)) => Ok(OptionValue::Int(*i)),
        (OptionKind::Bool, toml::Value::Boolean(b)) => Ok(OptionValue::Bool(*b)),
        _ => Err(Error::InvalidValue {
            option: def.name,
            expected: def.kind,
        }),
    }
}
