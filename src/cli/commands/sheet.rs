//! CLI commands that read a sheet: `show` and `export`

use std::path::PathBuf;

use super::check_output;
use crate::cli::CliError;
use crate::client::SmartsheetClient;
use crate::models::{ExportFormat, GetSheetOptions};
use crate::sheet_info::SheetInfo;

/// Arguments for the `show` command
pub struct ShowArgs {
    pub sheet_id: i64,
    /// Maximum number of rows to print
    pub rows: usize,
    /// Only rows modified in the last N minutes
    pub modified_within: Option<u32>,
}

/// Arguments for the `export` command
pub struct ExportArgs {
    pub sheet_id: i64,
    pub format: ExportFormat,
    /// Destination file; `<sheet-id>.<ext>` in the current directory when not given
    pub output: Option<PathBuf>,
    /// PDF paper size, e.g. LETTER, LEGAL, WIDE, A4
    pub paper_size: Option<String>,
    pub force: bool,
}

/// Handle the `show` command
pub fn handle_show(client: &SmartsheetClient, args: &ShowArgs) -> Result<(), CliError> {
    let options = match args.modified_within {
        Some(minutes) => GetSheetOptions::default().modified_within_mins(minutes),
        None => GetSheetOptions::default(),
    };

    let mut sheet = SheetInfo::new();
    sheet.load(client, args.sheet_id, Some(&options))?;
    print!("{}", sheet.summary(args.rows));
    Ok(())
}

/// Handle the `export` command
pub fn handle_export(client: &SmartsheetClient, args: &ExportArgs) -> Result<(), CliError> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.{}", args.sheet_id, args.format.extension())));
    check_output(&output, args.force)?;

    let bytes = client.get_sheet_as(
        args.sheet_id,
        &output,
        args.format,
        args.paper_size.as_deref(),
    )?;
    println!("Exported sheet {} to {} ({} bytes)", args.sheet_id, output.display(), bytes);
    Ok(())
}
