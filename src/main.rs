// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::{CaptionFormat, Config};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod color;
mod cue;
mod encoders;
mod errors;
mod file_utils;
mod lyric_processor;
mod timecode;
mod timing;

/// CLI Wrapper for CaptionFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliCaptionFormat {
    Srt,
    WebVtt,
    Itt,
    Ass,
    Fcpxml,
}

impl From<CliCaptionFormat> for CaptionFormat {
    fn from(cli_format: CliCaptionFormat) -> Self {
        match cli_format {
            CliCaptionFormat::Srt => CaptionFormat::Srt,
            CliCaptionFormat::WebVtt => CaptionFormat::WebVtt,
            CliCaptionFormat::Itt => CaptionFormat::Itt,
            CliCaptionFormat::Ass => CaptionFormat::Ass,
            CliCaptionFormat::Fcpxml => CaptionFormat::Fcpxml,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export a timing document to caption files
    Export(ExportArgs),

    /// Clean up a lyric text file with the tidy pipeline
    Tidy(TidyArgs),

    /// Import an existing .srt file into a timing document
    Import(ImportArgs),

    /// Generate shell completions for lyrcap
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Timing document (JSON) to export
    #[arg(value_name = "TIMINGS_JSON")]
    input_path: PathBuf,

    /// Formats to export (defaults to every format the document supports)
    #[arg(short = 'F', long, value_enum)]
    format: Vec<CliCaptionFormat>,

    /// Directory for the exported files (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct TidyArgs {
    /// Lyric text file to clean up
    #[arg(value_name = "LYRICS_FILE")]
    input_path: PathBuf,

    /// Write the cleaned text here instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct ImportArgs {
    /// SRT file to import
    #[arg(value_name = "SRT_FILE")]
    input_path: PathBuf,

    /// Output path for the timing document (defaults to <base>.timings.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// lyrcap - Lyric timing to caption files
///
/// Turns externally captured lyric timestamps into caption/subtitle files
/// in five formats: SRT, WebVTT, ITT, ASS, and FCPXML editor projects.
#[derive(Parser, Debug)]
#[command(name = "lyrcap")]
#[command(version = "1.0.0")]
#[command(about = "Lyric timing to caption file exporter")]
#[command(long_about = "lyrcap turns per-line or per-word lyric timestamps into caption files.

EXAMPLES:
    lyrcap export song.timings.json                 # Export every compatible format
    lyrcap export -F srt -F fcpxml song.timings.json
    lyrcap export -o out/ song.timings.json         # Export into a directory
    lyrcap tidy lyrics.txt                          # Print cleaned lyrics
    lyrcap tidy -o clean.txt lyrics.txt             # Write cleaned lyrics
    lyrcap import 'song Titles.srt'                 # Seed a timing document from SRT
    lyrcap completions bash > lyrcap.bash           # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.

FORMATS:
    srt     - SubRip; one cue per line (line documents) or per word group (word documents)
    webvtt  - WebVTT with per-word highlight cues (word documents)
    itt     - iTunes Timed Text / TTML with highlight spans (word documents)
    ass     - Advanced SubStation Alpha with override tags (word documents)
    fcpxml  - Video editor project with wrapped titles (line documents)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
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

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lyrcap", &mut std::io::stdout());
            Ok(())
        }
        Commands::Export(args) => run_export(args),
        Commands::Tidy(args) => run_tidy(args),
        Commands::Import(args) => run_import(args),
    }
}

fn run_export(args: ExportArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level)?;
    let controller = Controller::new(config);

    let formats: Vec<CaptionFormat> = if args.format.is_empty() {
        CaptionFormat::all().to_vec()
    } else {
        args.format.into_iter().map(CaptionFormat::from).collect()
    };

    let written =
        controller.run_export(&args.input_path, &formats, args.output_dir.as_deref())?;

    if written.is_empty() {
        error!("No files were written");
    } else {
        info!("Export complete: {} file(s)", written.len());
    }
    Ok(())
}

fn run_tidy(args: TidyArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level)?;
    let controller = Controller::new(config);

    let cleaned = controller.run_tidy(&args.input_path, args.output.as_deref())?;
    if args.output.is_none() {
        println!("{}", cleaned);
    }
    Ok(())
}

fn run_import(args: ImportArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level)?;
    let controller = Controller::new(config);

    let path = controller.run_import(&args.input_path, args.output.as_deref())?;
    info!("Timing document ready: {}", path.display());
    Ok(())
}

/// Load configuration and apply any CLI log-level override
fn load_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = Config::from_file_or_default(config_path)?;
    if let Some(level) = log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());
    Ok(config)
}
