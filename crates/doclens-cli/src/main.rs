//! doclens CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "doclens", version, about = "Document summaries, quizzes, and Q&A")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a document
    Summarize {
        /// Path to the document (txt, md, html)
        file: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the most frequent terms of a document
    Terms {
        /// Path to the document
        file: PathBuf,

        /// How many terms to show
        #[arg(long, default_value = "15")]
        top: usize,
    },

    /// Generate a quiz from a document
    Quiz {
        /// Path to the document
        file: PathBuf,

        /// Write the quiz TOML here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Grade a filled-in quiz file
    Grade {
        /// Path to the quiz TOML with answers
        #[arg(long)]
        quiz: PathBuf,

        /// Write a JSON report here
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Ask a question about a document
    Ask {
        /// Path to the document
        file: PathBuf,

        /// The question to answer
        question: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate a quiz TOML file
    Validate {
        /// Path to the quiz file
        #[arg(long)]
        quiz: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("doclens=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summarize { file, format } => commands::summarize::execute(file, format),
        Commands::Terms { file, top } => commands::terms::execute(file, top),
        Commands::Quiz { file, output } => commands::quiz::execute(file, output),
        Commands::Grade {
            quiz,
            output,
            format,
        } => commands::grade::execute(quiz, output, format),
        Commands::Ask {
            file,
            question,
            format,
        } => commands::ask::execute(file, question, format),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
