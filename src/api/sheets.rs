//! Sheet retrieval and export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::client::SmartsheetClient;
use crate::error::{SmartsheetError, SmartsheetResult};
use crate::models::{ExportFormat, GetSheetOptions, Sheet};
use crate::transport::ApiRequest;

impl SmartsheetClient {
    /// Download a sheet
    ///
    /// With no options all rows and columns are returned. Cells that never held a value
    /// are always excluded. `column_names` cannot be resolved here (there is no column
    /// directory); use [`crate::SheetInfo::load`] for that.
    pub fn get_sheet(&self, sheet_id: i64, options: Option<&GetSheetOptions>) -> SmartsheetResult<Sheet> {
        let default_options = GetSheetOptions::default();
        let options = options.unwrap_or(&default_options);
        if !options.column_names.is_empty() {
            tracing::debug!(
                "get_sheet ignores {} column names, resolve them through SheetInfo::load",
                options.column_names.len()
            );
        }
        self.fetch_sheet(sheet_id, options, &options.column_ids)
    }

    pub(crate) fn fetch_sheet(
        &self,
        sheet_id: i64,
        options: &GetSheetOptions,
        column_ids: &[i64],
    ) -> SmartsheetResult<Sheet> {
        let mut request = ApiRequest::get(format!("/sheets/{}", sheet_id));
        request.query = options.query_params(column_ids, chrono::Utc::now());

        let response = self.execute(request)?;
        let sheet: Sheet = response.json("get sheet")?;
        tracing::debug!(
            "Fetched sheet {} ({}): {} columns, {} rows",
            sheet.name,
            sheet.id,
            sheet.columns.len(),
            sheet.rows.len()
        );
        Ok(sheet)
    }

    /// Export a sheet to a local file
    ///
    /// The format is chosen through the Accept header. `paper_size` (e.g. "LETTER",
    /// "WIDE", "A4") is only accepted for PDF.
    pub fn get_sheet_as(
        &self,
        sheet_id: i64,
        path: &Path,
        format: ExportFormat,
        paper_size: Option<&str>,
    ) -> SmartsheetResult<u64> {
        let mut request =
            ApiRequest::get(format!("/sheets/{}", sheet_id)).accept(format.accept_header());
        if let Some(size) = paper_size {
            if format != ExportFormat::Pdf {
                return Err(SmartsheetError::InvalidArgument(format!(
                    "Paper size can only be used with PDF export, not {:?}",
                    format
                )));
            }
            request = request.query("paperSize", size);
        }

        let written = self.export_to_file(request, path)?;
        tracing::info!(
            "Exported sheet {} as {:?} to {} ({} bytes)",
            sheet_id,
            format,
            path.display(),
            written
        );
        Ok(written)
    }

    /// Stream the response body into `path`; a partial file is removed on failure
    fn export_to_file(&self, request: ApiRequest, path: &Path) -> SmartsheetResult<u64> {
        let file = File::create(path).map_err(|e| {
            tracing::error!("Failed creating export file {}: {}", path.display(), e);
            SmartsheetError::Io(e)
        })?;
        let mut writer = BufWriter::new(file);

        let outcome = self
            .download(request, &mut writer)
            .and_then(|written| writer.flush().map(|_| written).map_err(SmartsheetError::Io));
        if outcome.is_err() {
            drop(writer);
            if let Err(e) = std::fs::remove_file(path) {
                tracing::warn!("Could not remove partial export {}: {}", path.display(), e);
            }
        }
        outcome
    }
}
