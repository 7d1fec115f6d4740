//! Command-line interface for the `dumplog` binary.

pub mod commands;

use crate::config::Usage;
use crate::{ColorMode, Level, Logger};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

/// When to colorize diagnostic output.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ColorArg {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Enabled,
            ColorArg::Never => Self::Disabled,
        }
    }
}

/// Context filter for the `options` subcommand.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UsageArg {
    Mkinitrd,
    Kexec,
    Dump,
}

impl From<UsageArg> for Usage {
    fn from(arg: UsageArg) -> Self {
        match arg {
            UsageArg::Mkinitrd => Self::MKINITRD,
            UsageArg::Kexec => Self::KEXEC,
            UsageArg::Dump => Self::DUMP,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "dumplog",
    version,
    about = "Leveled diagnostics and progress reporting for crash-dump tooling"
)]
pub struct Cli {
    /// Raise diagnostic verbosity (-D for debug, -DD for trace)
    #[arg(short = 'D', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// When to colorize diagnostics
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Emit one message through the process-wide logger
    Log {
        /// Message level (trace, debug, info)
        level: String,
        /// Message text
        message: Vec<String>,
    },
    /// Show the configuration option schema or effective values
    Options {
        /// Only options meaningful in this context
        #[arg(long, value_enum)]
        usage: Option<UsageArg>,
        /// Merge overrides from a TOML config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Drive a demo progress indicator
    Progress {
        /// Operation label shown in the 30-column field
        #[arg(long, default_value = "Copying")]
        label: String,
        /// Number of steps to simulate
        #[arg(long, default_value_t = 50)]
        steps: u64,
        /// Delay between steps in milliseconds
        #[arg(long, default_value_t = 100)]
        delay_ms: u64,
    },
}

/// Parses arguments, configures the global logger, and dispatches.
#[must_use]
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let logger = Logger::global();
    // The library default is silent; a CLI whose `log` subcommand exists to
    // emit starts at info and -D raises from there.
    logger.set_level(match cli.debug {
        0 => Level::Info,
        1 => Level::Debug,
        _ => Level::Trace,
    });
    logger.set_color_mode(cli.color.into());

    let result = match cli.command {
        Command::Log { level, message } => commands::log(&level, &message),
        Command::Options { usage, config } => {
            commands::options(usage.map(Usage::from), config.as_deref())
        }
        Command::Progress {
            label,
            steps,
            delay_ms,
        } => {
            commands::progress(&label, steps, delay_ms);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dumplog: {e}");
            ExitCode::FAILURE
        }
    }
}
