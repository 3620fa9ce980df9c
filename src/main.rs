// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::{Config, LogLevel};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod bibliography;
mod cleaner;
mod converter;
mod document;
mod errors;
mod file_utils;
mod resolver;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Expand abbreviated bibliography references in annotations
    Expand {
        /// Input annotation document (JSON)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output document path
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,

        /// Write the resolution report to this path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Remove repeated speaker prefixes from consecutive dialogue lines
    Clean {
        /// Input annotation document (JSON)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output document path
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Convert structured play text to the JSON document format
    Convert {
        /// A *_structured.txt file, or a directory to scan for them
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Generate shell completions for variorum
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// variorum - reference expansion and clean-up for annotated Shakespeare editions
///
/// Processes line-indexed JSON editions of Shakespeare plays: expands
/// abbreviated bibliography references in footnotes into full citations,
/// de-duplicates repeated speaker labels, and converts structured play text
/// into the JSON document format.
#[derive(Parser, Debug)]
#[command(name = "variorum")]
#[command(version = "0.3.0")]
#[command(about = "Reference expansion and clean-up for annotated Shakespeare editions")]
#[command(long_about = "variorum post-processes annotated Shakespeare editions stored as JSON.

EXAMPLES:
    variorum expand macbeth_notes.json -o macbeth_expanded.json
    variorum expand macbeth_notes.json -o out.json -r report.json
    variorum clean macbeth_expanded.json -o macbeth_cleaned.json
    variorum convert plays/                     # Convert every *_structured.txt
    variorum --log-level debug expand in.json -o out.json
    variorum completions bash > variorum.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. Missing files fall back to defaults.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "variorum", &mut std::io::stdout());
        return Ok(());
    }

    // Load configuration and apply CLI overrides
    let mut config = Config::load_or_default(&cli.config_path)?;
    if let Some(cmd_log_level) = &cli.log_level {
        config.log_level = cmd_log_level.clone().into();
    }
    log::set_max_level(level_filter(&config.log_level));

    match cli.command {
        Commands::Expand {
            input,
            output,
            report,
        } => {
            if let Some(report_path) = report {
                config.report_path = Some(report_path.to_string_lossy().to_string());
            }
            let controller = Controller::with_config(config)?;
            controller.run_expand(&input, &output)?;
        }
        Commands::Clean { input, output } => {
            let controller = Controller::with_config(config)?;
            controller.run_clean(&input, &output)?;
        }
        Commands::Convert { input } => {
            let controller = Controller::with_config(config)?;
            controller.run_convert(&input)?;
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
