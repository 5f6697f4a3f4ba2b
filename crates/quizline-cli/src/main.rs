//! quizline CLI — a single-session trivia quiz in the terminal.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizline", version, about = "Terminal trivia quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz session
    Play {
        /// Question file (PROMPT|ANSWER per line)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Maximum number of questions to load
        #[arg(long)]
        max: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for a reproducible question order
        #[arg(long)]
        seed: Option<u64>,

        /// Summary format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Check a question file for malformed lines
    Validate {
        /// Question file (PROMPT|ANSWER per line)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Maximum number of questions to load
        #[arg(long)]
        max: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and question file
    Init,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizline_core=info".parse().unwrap())
                .add_directive("quizline_cli=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            questions,
            max,
            config,
            seed,
            format,
        } => commands::play::execute(questions, max, config, seed, format).await,
        Commands::Validate {
            questions,
            max,
            config,
        } => commands::validate::execute(questions, max, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
