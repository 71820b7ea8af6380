//! CLI error type

use std::path::PathBuf;

use thiserror::Error;

use crate::error::SmartsheetError;
use crate::sheet_info::SheetMismatch;

/// Errors reported by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Smartsheet(#[from] SmartsheetError),

    #[error("Output file already exists: {0} (use --force to overwrite)")]
    OutputExists(PathBuf),

    #[error("Sheet {sheet_id} does not match {baseline}: {mismatch}")]
    Mismatch {
        sheet_id: i64,
        baseline: PathBuf,
        mismatch: SheetMismatch,
    },
}
