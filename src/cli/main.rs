use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use smartsheet_sdk::cli::commands::sheet::{ExportArgs, ShowArgs, handle_export, handle_show};
use smartsheet_sdk::cli::commands::snapshot::{
    CompareArgs, SnapshotArgs, handle_compare, handle_snapshot,
};
use smartsheet_sdk::cli::commands::connect;
use smartsheet_sdk::models::ExportFormat;

#[derive(Parser)]
#[command(name = "smartsheet-cli")]
#[command(about = "Inspect, export and snapshot Smartsheet sheets")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "TOML configuration file (default: SMARTSHEET_* environment variables)")]
    config: Option<PathBuf>,
    #[arg(long, short, global = true, help = "Log debug output to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print a sheet's columns and rows")]
    Show {
        sheet_id: i64,
        #[arg(long, default_value_t = 20, help = "Maximum number of rows to print")]
        rows: usize,
        #[arg(long, value_name = "MINUTES", help = "Only rows modified in the last N minutes")]
        modified_within: Option<u32>,
    },
    #[command(about = "Download a sheet as CSV, Excel or PDF")]
    Export {
        sheet_id: i64,
        #[arg(long, short, value_enum, default_value = "csv")]
        format: FormatArg,
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
        #[arg(long, help = "PDF paper size (LETTER, LEGAL, WIDE, ARCHD, A4, A3, A2, A1, A0)")]
        paper_size: Option<String>,
        #[arg(long, help = "Overwrite an existing output file")]
        force: bool,
    },
    #[command(about = "Store a sheet to a snapshot file")]
    Snapshot {
        sheet_id: i64,
        #[arg(long, short, value_name = "PATH")]
        output: PathBuf,
        #[arg(long, help = "Store column definitions only")]
        columns_only: bool,
        #[arg(long, help = "Overwrite an existing output file")]
        force: bool,
    },
    #[command(about = "Check that a sheet still matches a snapshot's columns")]
    Compare {
        sheet_id: i64,
        #[arg(long, short, value_name = "PATH")]
        baseline: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Excel,
    Pdf,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Excel => ExportFormat::Excel,
            FormatArg::Pdf => ExportFormat::Pdf,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let client = connect(cli.config.as_deref()).context("Failed to set up Smartsheet client")?;

    match cli.command {
        Commands::Show {
            sheet_id,
            rows,
            modified_within,
        } => handle_show(
            &client,
            &ShowArgs {
                sheet_id,
                rows,
                modified_within,
            },
        )?,
        Commands::Export {
            sheet_id,
            format,
            output,
            paper_size,
            force,
        } => handle_export(
            &client,
            &ExportArgs {
                sheet_id,
                format: format.into(),
                output,
                paper_size,
                force,
            },
        )?,
        Commands::Snapshot {
            sheet_id,
            output,
            columns_only,
            force,
        } => handle_snapshot(
            &client,
            &SnapshotArgs {
                sheet_id,
                output,
                columns_only,
                force,
            },
        )?,
        Commands::Compare { sheet_id, baseline } => {
            handle_compare(&client, &CompareArgs { sheet_id, baseline })?
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
