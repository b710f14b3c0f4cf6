use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use surveyscope_core::config::Config;
use surveyscope_core::{AppError, AppResult};

mod analyze;
mod input;
mod logging;
mod poster;
mod report;

#[derive(Parser)]
#[command(name = "surveyscope")]
#[command(
    about = "Survey sentiment tally, reason word frequencies, and HTML word cloud / poster reports."
)]
struct Cli {
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    #[arg(long, value_name = "FORMAT", default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Analyze {
        #[arg(value_name = "CSV")]
        csv: Option<PathBuf>,
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        #[arg(long, value_name = "N")]
        top: Option<usize>,
        #[arg(long)]
        overwrite: bool,
    },
    Report {
        #[arg(value_name = "CSV")]
        csv: Option<PathBuf>,
        #[arg(long, value_name = "PATH", conflicts_with = "csv")]
        analysis: Option<PathBuf>,
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },
    Poster {
        #[arg(value_name = "CSV")]
        csv: Option<PathBuf>,
        #[arg(long, value_name = "PATH", conflicts_with = "csv")]
        analysis: Option<PathBuf>,
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        #[arg(long, value_name = "URL")]
        repo_url: Option<String>,
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{}", err.message());
        process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> AppResult<()> {
    validate_log_level(&cli.log_level)?;
    validate_log_format(&cli.log_format)?;
    logging::init(&cli.log_level, &cli.log_format)?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            csv,
            out,
            top,
            overwrite,
        } => analyze::analyze_command(csv, out, top, overwrite, &config),
        Commands::Report {
            csv,
            analysis,
            out,
            top,
        } => report::report_command(csv, analysis, out, top, &config),
        Commands::Poster {
            csv,
            analysis,
            out,
            repo_url,
            top,
        } => poster::poster_command(csv, analysis, out, repo_url, top, &config),
    }
}

fn validate_log_level(value: &str) -> AppResult<()> {
    match value {
        "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
        _ => Err(AppError::usage(format!(
            "invalid --log-level '{value}'; expected error|warn|info|debug|trace"
        ))),
    }
}

fn validate_log_format(value: &str) -> AppResult<()> {
    match value {
        "text" | "json" => Ok(()),
        _ => Err(AppError::usage(format!(
            "invalid --log-format '{value}'; expected text|json"
        ))),
    }
}
