// ongap CLI - Ontario community service gap analysis

mod analyze;
mod check;
mod exit_codes;
mod sample;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use ongap_config::{DataLayout, Settings};
use ongap_gap::GapError;

use exit_codes::{gap_exit_code, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "ongap")]
#[command(about = "Ontario community service gap analysis (batch CLI)")]
#[command(version)]
struct Cli {
    /// Project root holding the data directories (default from settings)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which expected raw data files are present
    Check,

    /// Write sample demographics and services data under data_clean
    Sample,

    /// Join demographics with services and write the gap results table
    #[command(after_help = "\
Examples:
  ongap analyze
  ongap analyze --json
  ongap analyze --demographics demo.csv --services services.csv -o results.csv")]
    Analyze {
        /// Demographics CSV (default: <root>/data_clean/sample_demographics.csv)
        #[arg(long)]
        demographics: Option<PathBuf>,

        /// Services CSV (default: <root>/data_clean/sample_services.csv)
        #[arg(long)]
        services: Option<PathBuf>,

        /// Results CSV (default: <root>/outputs/gap_analysis_results.csv)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the full report as JSON to stdout
        #[arg(long)]
        json: bool,

        /// Suppress the stderr summary
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Full pipeline: check, sample, analyze
    #[command(after_help = "\
A failed analysis degrades to a warning here; the pipeline still exits 0.
Use `ongap analyze` directly for scriptable exit codes.")]
    Run,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::load();
    let root = cli
        .root
        .unwrap_or_else(|| PathBuf::from(&settings.default_root));
    let layout = settings.layout;

    let result = match cli.command {
        None => {
            // No subcommand is a usage error, like any bad invocation
            eprintln!("Usage: ongap <command> [options]");
            eprintln!("       ongap --help for more information");
            Err(CliError { code: EXIT_USAGE, message: String::new(), hint: None })
        }
        Some(Commands::Check) => check::cmd_check(&layout, &root),
        Some(Commands::Sample) => sample::cmd_sample(&layout, &root),
        Some(Commands::Analyze { demographics, services, output, json, quiet }) => {
            analyze::cmd_analyze(&layout, &root, demographics, services, output, json, quiet)
        }
        Some(Commands::Run) => run_pipeline(&layout, &root),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// The original workflow in one shot: check raw data, write the sample
/// fixtures, then analyze. Load failures here are reported and skipped
/// rather than failing the whole run.
fn run_pipeline(layout: &DataLayout, root: &Path) -> Result<(), CliError> {
    check::cmd_check(layout, root)?;
    sample::cmd_sample(layout, root)?;

    if let Err(e) = analyze::cmd_analyze(layout, root, None, None, None, false, false) {
        eprintln!("warning: {}", e.message);
        eprintln!("skipping analysis for this run; fix inputs and re-run");
    }

    Ok(())
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn error(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Create error from an engine error with proper exit code.
    pub fn gap(err: GapError) -> Self {
        let code = gap_exit_code(&err);
        let hint = match &err {
            GapError::DataUnavailable { .. } => {
                Some("run `ongap sample` to generate sample inputs".to_string())
            }
            GapError::SchemaMismatch { .. } => {
                Some("check the input header row against the expected columns".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }
}
