//! mathdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::QuizArgs;

#[derive(Parser)]
#[command(name = "mathdrill", version, about = "Mental arithmetic practice in the terminal")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz on the terminal
    Play {
        #[command(flatten)]
        quiz: QuizArgs,

        /// Seed for a reproducible question list
        #[arg(long)]
        seed: Option<u64>,

        /// Save the session report as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Summary format: text, markdown, html, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print a list of questions without running a quiz
    Generate {
        #[command(flatten)]
        quiz: QuizArgs,

        /// Seed for a reproducible question list
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,

        /// Include the answers
        #[arg(long)]
        answers: bool,
    },

    /// Grade a single answer (exit code 1 if incorrect)
    Check {
        /// The answer as typed
        #[arg(long, allow_hyphen_values = true)]
        answer: String,

        /// The correct answer
        #[arg(long, allow_hyphen_values = true)]
        expected: f64,
    },

    /// Show or change the stored quiz settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Render a saved session report
    Report {
        /// Session report JSON
        #[arg(long)]
        input: PathBuf,

        /// Output format: text, markdown, html, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create a starter mathdrill.toml
    Init,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the stored settings (or the defaults)
    Show,
    /// Change the stored settings
    Set {
        #[command(flatten)]
        quiz: QuizArgs,
    },
    /// Forget the stored settings
    Reset,
}

#[tokio::main]
async fn main() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "mathdrill=info".parse::<tracing_subscriber::filter::Directive>() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Play {
            quiz,
            seed,
            report,
            format,
        } => commands::play::execute(quiz, seed, report, format, config_path).await,
        Commands::Generate {
            quiz,
            seed,
            json,
            answers,
        } => commands::generate::execute(quiz, seed, json, answers, config_path),
        Commands::Check { answer, expected } => commands::check::execute(answer, expected),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(config_path),
            ConfigAction::Set { quiz } => commands::config::set(quiz, config_path),
            ConfigAction::Reset => commands::config::reset(config_path),
        },
        Commands::Report {
            input,
            format,
            output,
        } => commands::report::execute(input, format, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
