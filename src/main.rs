// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use ytsubtrans::app_config::{self, Config};
use ytsubtrans::app_controller::Controller;
use ytsubtrans::errors::AppError;
use ytsubtrans::file_utils::FileManager;
use ytsubtrans::language_utils::Language;
use ytsubtrans::web::{self, AppState};

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
    /// Serve the translator web form (default command)
    Serve(ServeArgs),

    /// Translate the subtitles of one video in the terminal
    Translate(TranslateArgs),

    /// Generate shell completions for ytsubtrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Default)]
struct ServeArgs {
    /// Address to listen on (e.g., '127.0.0.1:8501')
    #[arg(short, long)]
    bind: Option<String>,
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// YouTube video URL
    #[arg(value_name = "URL")]
    url: String,

    /// Source language code (ml, ta, te, hi, en)
    #[arg(short, long)]
    source_language: Option<Language>,

    /// Target language code (ml, ta, te, hi, en)
    #[arg(short, long)]
    target_language: Option<Language>,

    /// Directory the subtitle files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

/// ytsubtrans - YouTube auto-subtitle translator
#[derive(Parser, Debug)]
#[command(name = "ytsubtrans")]
#[command(version)]
#[command(about = "Fetch and translate YouTube auto-generated subtitles")]
#[command(long_about = "ytsubtrans fetches the auto-generated subtitles of a YouTube video and translates them.

EXAMPLES:
    ytsubtrans                                         # Serve the web form on the configured address
    ytsubtrans serve --bind 0.0.0.0:8080               # Serve on another address
    ytsubtrans translate 'https://youtu.be/VIDEO_ID'   # Translate Malayalam to English
    ytsubtrans translate -s ta -t hi -o out/ URL       # Tamil to Hindi, files written to out/
    ytsubtrans completions bash > ytsubtrans.bash      # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json by default. You can specify a different
    file with --config-path. If the file doesn't exist, defaults are used.

SUPPORTED LANGUAGES:
    ml (Malayalam), ta (Tamil), te (Telugu), hi (Hindi), en (English)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
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
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Accept everything here; the effective level is applied once the config is read
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ytsubtrans", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => {
            let config = load_config(&cli.config_path, cli.log_level)?;
            if let Err(e) = run_translate(config, args).await {
                error!("{}", e);
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Serve(args)) => run_serve(load_config(&cli.config_path, cli.log_level)?, args).await,
        None => run_serve(load_config(&cli.config_path, cli.log_level)?, ServeArgs::default()).await,
    }
}

/// Load the configuration file and apply the log level
fn load_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = Config::load_or_default(config_path)?;

    // Command line log level wins over the configured one
    if let Some(log_level) = log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

async fn run_serve(mut config: Config, args: ServeArgs) -> Result<()> {
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }
    let bind_address = config.server.bind_address.clone();

    let controller = Controller::with_config(config)?;
    web::serve(&bind_address, AppState::new(controller)).await
}

async fn run_translate(mut config: Config, args: TranslateArgs) -> Result<(), AppError> {
    if let Some(source) = args.source_language {
        config.source_language = source;
    }
    if let Some(target) = args.target_language {
        config.target_language = target;
    }
    let (source, target) = (config.source_language, config.target_language);

    let controller = Controller::with_config(config)?;

    let progress_bar = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    progress_bar.set_style(style);
    progress_bar.enable_steady_tick(Duration::from_millis(120));
    progress_bar.set_message(format!("Translating {} -> {}, please wait…", source, target));

    let pb = progress_bar.clone();
    let report = controller
        .run_with_progress(&args.url, source, target, move |done, total| {
            pb.set_message(format!("Translated {}/{} chunks", done, total));
        })
        .await;
    progress_bar.finish_and_clear();

    if let Some(duration) = report.duration {
        println!("Video Duration: {}", duration);
    }
    if let Some(original) = &report.original_text {
        println!("\nOriginal Subtitles:\n{}", original);
    }
    if let Some(translated) = &report.translated_text {
        println!("\nTranslated Subtitles:\n{}", translated);
    }

    if let Some(failure) = report.failure {
        return Err(failure.into());
    }

    let written = FileManager::write_downloads(&args.output_dir, &report.downloads(), args.force_overwrite)?;
    for path in written {
        info!("Success: {:?}", path);
    }
    Ok(())
}
