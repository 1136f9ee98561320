// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use yt2pdf::app_config::{self, Config, SummaryProvider};
use yt2pdf::errors::AppError;
use yt2pdf::pipeline::{Pipeline, PipelineOutput};
use yt2pdf::summary::Summarizer;
use yt2pdf::transcript::YouTubeTranscripts;
use yt2pdf::web::{self, AppState};

/// CLI Wrapper for SummaryProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSummaryProvider {
    OpenAI,
    Anthropic,
    LMStudio,
}

impl From<CliSummaryProvider> for SummaryProvider {
    fn from(cli_provider: CliSummaryProvider) -> Self {
        match cli_provider {
            CliSummaryProvider::OpenAI => SummaryProvider::OpenAI,
            CliSummaryProvider::Anthropic => SummaryProvider::Anthropic,
            CliSummaryProvider::LMStudio => SummaryProvider::LMStudio,
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
    /// Run the web form (default command)
    Serve {
        /// Address to listen on, overrides server.listen_addr
        #[arg(short = 'L', long)]
        listen: Option<String>,
    },

    /// Generate the PDFs for one video and exit
    Fetch {
        /// YouTube link
        #[arg(value_name = "URL")]
        url: String,

        /// Directory receiving transcript.pdf and summary.pdf
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Only produce the transcript
        #[arg(long)]
        no_summary: bool,
    },

    /// Generate shell completions for yt2pdf
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// yt2pdf - YouTube transcripts and summaries as PDF
#[derive(Parser, Debug)]
#[command(name = "yt2pdf")]
#[command(version)]
#[command(about = "Turn a YouTube video into a transcript PDF and an AI summary PDF")]
#[command(long_about = "yt2pdf fetches the transcript of a YouTube video, renders it to a PDF and
summarizes it with an AI provider into a second PDF.

EXAMPLES:
    yt2pdf                                             # Serve the web form on 127.0.0.1:8501
    yt2pdf serve --listen 0.0.0.0:8080                 # Serve on another address
    yt2pdf fetch https://youtu.be/dQw4w9WgXcQ           # Write both PDFs to the current directory
    yt2pdf fetch -o out --no-summary <URL>              # Transcript only
    yt2pdf -p anthropic fetch <URL>                     # Summarize with Anthropic
    yt2pdf completions bash > yt2pdf.bash              # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically. API keys may also come from OPENAI_API_KEY
    or ANTHROPIC_API_KEY.

SUPPORTED PROVIDERS:
    openai    - OpenAI API (default: gpt-4)
    anthropic - Anthropic Claude API
    lmstudio  - LM Studio local server (OpenAI-compatible on http://localhost:1234/v1)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Summary provider to use
    #[arg(short, long, global = true, value_enum)]
    provider: Option<CliSummaryProvider>,

    /// Model name to use for summaries
    #[arg(short, long, global = true)]
    model: Option<String>,
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
        // The max level is lowered or raised later, so accept everything here
        log::set_boxed_logger(Box::new(CustomLogger::new(LevelFilter::Trace)))?;
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

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
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
    // Info until the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "yt2pdf", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Fetch { url, output_dir, no_summary }) => {
            run_fetch(&config, &url, &output_dir, no_summary).await
        }
        Some(Commands::Serve { listen }) => run_serve(config, listen).await,
        None => run_serve(config, None).await,
        Some(Commands::Completions { .. }) => Ok(()),
    }
}

/// Load the config file and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    if let Some(cmd_log_level) = &cli.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config)?;

    if let Some(provider) = &cli.provider {
        config.summary.provider = provider.clone().into();
    }

    if let Some(model) = &cli.model {
        config.summary.active_provider_config_mut().model = model.clone();
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}

fn build_pipeline(config: &Config, summarize: bool) -> Result<Pipeline> {
    let transcripts = YouTubeTranscripts::new(&config.transcript)
        .context("Failed to create transcript client")?;
    let summarizer = if summarize {
        Summarizer::from_config(&config.summary)
    } else {
        Summarizer::Disabled
    };
    Ok(Pipeline::new(Arc::new(transcripts), summarizer))
}

async fn run_serve(mut config: Config, listen: Option<String>) -> Result<()> {
    if let Some(listen) = listen {
        config.server.listen_addr = listen;
    }
    let addr: SocketAddr = config.server.listen_addr.parse()
        .with_context(|| format!("Invalid listen address: {}", config.server.listen_addr))?;

    let pipeline = build_pipeline(&config, true)?;
    info!("🚀 yt2pdf {} starting", env!("CARGO_PKG_VERSION"));
    web::serve(addr, AppState::new(pipeline)).await
}

async fn run_fetch(config: &Config, url: &str, output_dir: &Path, no_summary: bool) -> Result<()> {
    let pipeline = build_pipeline(config, !no_summary)?;

    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message("Fetching transcript and summary");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = pipeline.run(url).await;
    spinner.finish_and_clear();

    let output = match result {
        Ok(output) => output,
        Err(AppError::Url(e)) => return Err(anyhow!("{}", e)),
        Err(e) => return Err(anyhow!(e).context("Failed to generate documents")),
    };

    write_outputs(&output, output_dir)?;

    if let Some(summary) = output.summary_text() {
        println!("{}", summary);
    }
    Ok(())
}

fn write_outputs(output: &PipelineOutput, output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let transcript_path = output_dir.join(output.transcript_pdf.file_name());
    output.transcript_pdf.save(&transcript_path)
        .with_context(|| format!("Failed to write {}", transcript_path.display()))?;
    info!("Success: {}", transcript_path.display());

    if let Err(e) = &output.transcript {
        warn!("Transcript PDF contains the error only: {}", e);
    }

    if let Some(doc) = &output.summary_pdf {
        let summary_path = output_dir.join(doc.file_name());
        doc.save(&summary_path)
            .with_context(|| format!("Failed to write {}", summary_path.display()))?;
        info!("Success: {}", summary_path.display());
    }
    Ok(())
}
