//! CLI entry point for the student grade report tool.
//!
//! Reads a CSV of subject scores, writes a graded CSV and a short summary report.

use std::ffi::OsStr;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use grade_report::pipeline::{RunConfig, run};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "grade_report", version)]
#[command(about = "Process student grades from a CSV file", long_about = None)]
struct Cli {
    /// Path to the input CSV file
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Path to the output CSV file
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: PathBuf,

    /// Path to the summary report file
    #[arg(value_name = "REPORT_FILE")]
    report_file: PathBuf,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            input: cli.input_file,
            output: cli.output_file,
            report: cli.report_file,
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = match init_tracing() {
        Ok(guard) => guard,
        Err(e) => {
            println!("Error: failed to initialise logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let config = RunConfig::from(Cli::parse());

    match run(&config) {
        Ok(summary) => {
            info!(
                rows_written = summary.rows_written,
                total_students = summary.report.total_students,
                "Processing complete. Goodbye!"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Logging setup: stdout console layer, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set.
fn init_tracing() -> Result<Option<WorkerGuard>> {
    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("logs"));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("grade_report.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(json_layer)
        .try_init()?;

    Ok(guard)
}
