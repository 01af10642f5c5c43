// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_arguments)]

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod markup;
mod media_probe;
mod segmenter;
mod subtitle;
mod text_processing;
mod timing;

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
    /// Generate an SRT subtitle file from a script (default command)
    #[command(alias = "subtitles")]
    Srt(SrtArgs),

    /// Build a speech-markup (SSML) document from a script
    Ssml(SsmlArgs),

    /// Generate shell completions for scriptcue
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SrtArgs {
    /// Input script file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Rendered audio file; its measured duration rescales the timing model
    #[arg(short, long)]
    audio: Option<PathBuf>,

    /// Output directory (defaults to the script's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Script language code (e.g., 'ko', 'ja', 'en')
    #[arg(short, long)]
    language: Option<String>,

    /// Reading rate override in characters per second
    #[arg(long)]
    chars_per_second: Option<f64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct SsmlArgs {
    /// Input script file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output directory (defaults to the script's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Synthesis voice identifier (e.g., 'ko-KR-SunHiNeural')
    #[arg(short, long)]
    voice: Option<String>,

    /// Speaking style applied to the whole script
    #[arg(short, long)]
    style: Option<String>,

    /// Style intensity (emitted only when different from 1.0)
    #[arg(long)]
    style_degree: Option<f64>,

    /// Speaking rate offset (e.g., '+10%')
    #[arg(long)]
    rate: Option<String>,

    /// Pitch offset (e.g., '-5Hz')
    #[arg(long)]
    pitch: Option<String>,

    /// Volume offset (e.g., '+20%')
    #[arg(long)]
    volume: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// scriptcue - script-to-subtitle and speech-markup preparation tool
///
/// Prepares spoken-word scripts for synthesis and subtitling: estimates
/// subtitle timestamps from the script text alone and builds SSML documents
/// for an external synthesis service.
#[derive(Parser, Debug)]
#[command(name = "scriptcue")]
#[command(author = "scriptcue team")]
#[command(version = "1.0.0")]
#[command(about = "Script-to-subtitle and speech-markup preparation tool")]
#[command(long_about = "scriptcue turns narration scripts into SRT subtitle files and SSML documents.

EXAMPLES:
    scriptcue script.txt                         # Generate subtitles using default config
    scriptcue -f script.txt                      # Force overwrite existing files
    scriptcue -a narration.mp3 script.txt        # Rescale timing to the rendered audio
    scriptcue -l ja script.txt                   # Use the Japanese reading rate
    scriptcue srt /scripts/                      # Process an entire directory
    scriptcue ssml script.txt                    # Build a speech-markup document
    scriptcue ssml -s cheerful script.txt        # Apply a speaking style
    scriptcue completions bash > scriptcue.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

SUBTITLE TIMING:
    Without audio, timestamps come from a per-language reading rate
    (characters per second). With -a, the measured audio duration rescales
    the rate so the estimate matches the real narration length.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input script file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Rendered audio file; its measured duration rescales the timing model
    #[arg(short, long)]
    audio: Option<PathBuf>,

    /// Output directory (defaults to the script's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Script language code (e.g., 'ko', 'ja', 'en')
    #[arg(short, long)]
    language: Option<String>,

    /// Reading rate override in characters per second
    #[arg(long)]
    chars_per_second: Option<f64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
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

            let mut stderr = std::io::stderr();
            let emoji = Self::get_emoji_for_level(record.level());
            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "scriptcue", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Srt(args)) => run_srt(args).await,
        Some(Commands::Ssml(args)) => run_ssml(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let srt_args = SrtArgs {
                input_path,
                audio: cli.audio,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                language: cli.language,
                chars_per_second: cli.chars_per_second,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_srt(srt_args).await
        }
    }
}

/// Load the configuration file, creating a default one when missing
fn load_config(config_path: &str, cli_log_level: Option<&CliLogLevel>) -> Result<Config> {
    if let Some(cmd_log_level) = cli_log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        if let Some(log_level) = cli_log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        if let Some(log_level) = cli_log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // If log level was not set via command line, update it from config now
    if cli_log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    Ok(config)
}

async fn run_srt(options: SrtArgs) -> Result<()> {
    let mut config = load_config(&options.config_path, options.log_level.as_ref())?;

    // Override config with CLI options if provided
    if let Some(language) = &options.language {
        config.language = language.clone();
    }
    if let Some(cps) = options.chars_per_second {
        config.timing.chars_per_second = Some(cps);
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    let controller = Controller::with_config(config)?;
    controller
        .run_srt(
            options.input_path,
            options.audio,
            options.output_dir,
            options.force_overwrite,
        )
        .await
}

async fn run_ssml(options: SsmlArgs) -> Result<()> {
    let mut config = load_config(&options.config_path, options.log_level.as_ref())?;

    // Override config with CLI options if provided
    if let Some(voice) = &options.voice {
        config.voice = voice.clone();
    }
    if let Some(style) = &options.style {
        config.markup.style = Some(style.clone());
    }
    if let Some(degree) = options.style_degree {
        config.markup.style_degree = degree;
    }
    if let Some(rate) = &options.rate {
        config.markup.rate = rate.clone();
    }
    if let Some(pitch) = &options.pitch {
        config.markup.pitch = pitch.clone();
    }
    if let Some(volume) = &options.volume {
        config.markup.volume = volume.clone();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    let controller = Controller::with_config(config)?;
    controller
        .run_ssml(options.input_path, options.output_dir, options.force_overwrite)
        .await
}
