//! CLI commands for snapshot files: `snapshot` and `compare`

use std::path::PathBuf;

use super::check_output;
use crate::cli::CliError;
use crate::client::SmartsheetClient;
use crate::models::GetSheetOptions;
use crate::sheet_info::SheetInfo;

/// Arguments for the `snapshot` command
pub struct SnapshotArgs {
    pub sheet_id: i64,
    /// Snapshot file (.json, .yaml or .yml)
    pub output: PathBuf,
    /// Store column definitions only
    pub columns_only: bool,
    pub force: bool,
}

/// Arguments for the `compare` command
pub struct CompareArgs {
    pub sheet_id: i64,
    /// Snapshot to compare the live sheet against
    pub baseline: PathBuf,
}

/// Handle the `snapshot` command
pub fn handle_snapshot(client: &SmartsheetClient, args: &SnapshotArgs) -> Result<(), CliError> {
    check_output(&args.output, args.force)?;

    let options = if args.columns_only {
        GetSheetOptions::no_rows()
    } else {
        GetSheetOptions::default()
    };
    let mut sheet = SheetInfo::new();
    sheet.load(client, args.sheet_id, Some(&options))?;
    sheet.store(&args.output)?;

    println!(
        "Stored sheet {} ({} columns, {} rows) to {}",
        sheet.sheet_name,
        sheet.columns.len(),
        sheet.rows.len(),
        args.output.display()
    );
    Ok(())
}

/// Handle the `compare` command
///
/// Only the column list is fetched; rows are not compared.
pub fn handle_compare(client: &SmartsheetClient, args: &CompareArgs) -> Result<(), CliError> {
    let baseline = SheetInfo::from_snapshot(&args.baseline)?;

    let mut live = SheetInfo::new();
    live.load(client, args.sheet_id, Some(&GetSheetOptions::no_rows()))?;

    if let Some(mismatch) = live.find_mismatch(&baseline) {
        return Err(CliError::Mismatch {
            sheet_id: args.sheet_id,
            baseline: args.baseline.clone(),
            mismatch,
        });
    }
    println!(
        "Sheet {} matches {} ({} columns)",
        args.sheet_id,
        args.baseline.display(),
        live.columns.len()
    );
    Ok(())
}
