//! gradebook CLI - enter scores, grade them, and summarise the class.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Student scores, letter grades and class statistics"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Record file to use instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for commands that print data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Create starter config and an empty record file
    Init,

    /// Add a student row (graded on the next `calculate`)
    Add {
        /// Student name
        #[arg(long)]
        name: String,

        /// Score as entered, 0-100
        #[arg(long, allow_hyphen_values = true)]
        score: String,
    },

    /// Show stored rows
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate and grade all rows, save the valid ones, and show statistics
    Calculate {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write an HTML report with the grade distribution chart
        /// (default FILE: <report_dir>/grades-<timestamp>.html)
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        chart: Option<Option<PathBuf>>,

        /// Also save the report as JSON for `gradebook report`
        #[arg(long, value_name = "PATH")]
        save_report: Option<PathBuf>,
    },

    /// Show a report saved with `calculate --save-report`
    Report {
        /// Saved JSON report
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write an HTML report with the grade distribution chart
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        chart: Option<Option<PathBuf>>,
    },

    /// Show statistics for the stored rows without saving anything
    Stats {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Remove every stored row
    Clear,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gradebook=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = commands::Settings::resolve(cli.config, cli.data_file).and_then(|settings| {
        match cli.command {
            Commands::Init => commands::init::execute(&settings),
            Commands::Add { name, score } => commands::add::execute(&settings, name, score),
            Commands::List { format } => commands::list::execute(&settings, format),
            Commands::Calculate {
                format,
                chart,
                save_report,
            } => commands::calculate::execute(&settings, format, chart, save_report),
            Commands::Report {
                input,
                format,
                chart,
            } => commands::report::execute(&settings, &input, format, chart),
            Commands::Stats { format } => commands::stats::execute(&settings, format),
            Commands::Clear => commands::clear::execute(&settings),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
