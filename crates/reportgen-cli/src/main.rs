//! reportgen CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "reportgen",
    version,
    about = "Generate Diagnostic, Progress, or Feedback report for a student"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report for one student
    Generate {
        /// Student ID (prompted for when omitted)
        #[arg(long)]
        student: Option<String>,

        /// Report type: diagnostic, progress, feedback (prompted for when omitted)
        #[arg(long)]
        report: Option<String>,

        /// Directory holding the JSON data files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List available report types
    Types,

    /// Create starter config and sample data files
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reportgen_core=info".parse().unwrap())
                .add_directive("reportgen_data=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            student,
            report,
            data_dir,
            config,
        } => commands::generate::execute(student, report, data_dir, config),
        Commands::Types => commands::types::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
