use clap::{Parser, Subcommand};
use quizcycle::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quizcycle", about = "Timed, topic-grouped question viewer")]
struct Args {
    /// Question JSON: file path or http(s) URL
    #[arg(short, long)]
    source: Option<String>,

    /// Seconds each question stays on screen
    #[arg(short, long)]
    period: Option<u32>,

    /// Keep the file's order instead of shuffling
    #[arg(long)]
    no_shuffle: bool,

    /// Seed for a repeatable shuffle
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build a question file from an HTML document
    Extract {
        /// HTML file to read
        input: PathBuf,

        /// Where to write the question JSON
        #[arg(short, long, default_value = "questions.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to quizcycle.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("quizcycle.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if let Some(Command::Extract { input, output }) = args.command {
        let set = quizcycle::extract::run_extract(&input, &output).map_err(std::io::Error::other)?;
        println!(
            "Wrote {} questions in {} topics to {}",
            set.question_count(),
            set.len(),
            output.display()
        );
        return Ok(());
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::QuizConfig::default()
    });
    let cli = CliOverrides {
        source: args.source,
        period_secs: args.period,
        no_shuffle: args.no_shuffle,
        seed: args.seed,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Quizcycle starting up: source={}, period={}s, shuffle={:?}",
        resolved.source,
        resolved.period_secs,
        resolved.shuffle
    );

    quizcycle::tui::run(resolved)
}
