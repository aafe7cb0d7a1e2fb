// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use semtag::app_config::{Config, LogLevel};
use semtag::app_controller::Controller;

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Annotate a plain-text announcement file or directory
    #[command(alias = "tag")]
    Annotate {
        /// Input file or directory to process
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Force overwrite of existing output files
        #[arg(short, long)]
        force_overwrite: bool,
    },

    /// Score the annotator against a directory of hand-tagged documents
    Evaluate {
        /// Directory of hand-tagged test documents
        #[arg(value_name = "TEST_DIR")]
        test_dir: PathBuf,
    },

    /// Generate shell completions for semtag
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// semtag - Seminar Announcement Tagger
///
/// Annotates plain-text seminar announcements with inline markers for
/// start/end times, locations, speakers, sentences and paragraphs,
/// training its segmentation thresholds and location gazetteer on a
/// hand-tagged corpus.
#[derive(Parser, Debug)]
#[command(name = "semtag")]
#[command(version = "1.0.0")]
#[command(about = "Seminar announcement annotation tool")]
#[command(long_about = "semtag annotates plain-text seminar announcements with inline markers.

EXAMPLES:
    semtag annotate announcement.txt           # Annotate one file
    semtag annotate -f announcements/          # Annotate a directory, overwriting
    semtag evaluate test/tagged                # Score against hand-tagged files
    semtag --log-level debug annotate mail.txt # Annotate with debug logging
    semtag completions bash > semtag.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't
    exist, defaults are used: training data is read from train/tagged
    and annotated output is written to tagged/.")]
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
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "semtag", &mut std::io::stdout());
        return Ok(());
    }

    // Load or default configuration, then let the CLI override its level
    let mut config = Config::load_or_default(&cli.config_path)
        .with_context(|| format!("Failed to load config: {}", cli.config_path))?;
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    config.validate().context("Configuration validation failed")?;

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Annotate {
            input_path,
            force_overwrite,
        } => controller.run_annotate(input_path, force_overwrite).await,
        Commands::Evaluate { test_dir } => controller.run_evaluate(test_dir).await,
        Commands::Completions { .. } => Ok(()),
    }
}
