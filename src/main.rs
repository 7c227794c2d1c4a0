// LogLedger - main.rs
//
// Command-line harness. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Ingesting `CATEGORY,message` lines into an in-memory ledger
// 4. Exporting one category to stdout or a file

use clap::{Parser, ValueEnum};
use logledger::app::ingest;
use logledger::app::service::{ExportFormat, LogService};
use logledger::core::model::Category;
use logledger::platform::config::{self, PlatformPaths};
use logledger::util::{self, error::LedgerError};
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

/// LogLedger - in-process categorised log store.
///
/// Reads `CATEGORY,message` lines, stores each one (mirroring every
/// non-SYSTEM write into SYSTEM), then exports one category.
#[derive(Parser, Debug)]
#[command(name = "logledger", version, about)]
struct Cli {
    /// Input file of `CATEGORY,message` lines ("-" for stdin).
    input: PathBuf,

    /// Category to export after ingesting.
    #[arg(short = 'c', long = "category", default_value = "SYSTEM")]
    category: Category,

    /// Export format (defaults to `[export] format` from config.toml, else csv).
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<FormatArg>,

    /// Write the export to this file instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print per-category counts to stderr after ingesting.
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Alternate config.toml location.
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (app_config, config_warnings) = config::load_config(&config_path);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogLedger starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let format = match cli.format {
        Some(FormatArg::Csv) => ExportFormat::Csv,
        Some(FormatArg::Json) => app_config.json_format(),
        None => app_config.export_format,
    };

    match run(&cli, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "LogLedger failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, format: ExportFormat) -> util::error::Result<()> {
    let service = LogService::new();

    let summary = if cli.input.as_os_str() == "-" {
        ingest::ingest(&service, io::stdin().lock())?
    } else {
        let file = std::fs::File::open(&cli.input).map_err(|e| LedgerError::Io {
            path: cli.input.clone(),
            operation: "open input",
            source: e,
        })?;
        ingest::ingest(&service, BufReader::new(file))?
    };

    for err in &summary.errors {
        eprintln!("warning: {err}");
    }

    if cli.summary {
        eprintln!(
            "{} written, {} rejected, {} lines",
            summary.written, summary.rejected, summary.lines_processed
        );
        for (category, count) in service.counts() {
            eprintln!("  {:<10} {count}", category.label());
        }
    }

    match &cli.output {
        Some(path) => {
            service.export_to_path(cli.category, format, path)?;
        }
        None => {
            service.export(cli.category, format, io::stdout().lock())?;
        }
    }
    Ok(())
}
