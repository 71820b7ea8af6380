//! Row operations not handled by SheetInfo batches
//!
//! - `get_row`: one row from a sheet
//! - `add_row` / `update_row`: one row at a time (use SheetInfo queues for several)
//! - `delete_rows`, `copy_rows`, `move_rows`, `set_parent_id`

use serde::Serialize;

use crate::client::SmartsheetClient;
use crate::error::{SmartsheetError, SmartsheetResult};
use crate::models::options::join_ids;
use crate::models::response::{ResultEnvelope, StatusEnvelope};
use crate::models::{BatchResult, CopyOptions, MoveOptions, Row, RowLocation, SingleRowResult};
use crate::sheet_info::SheetInfo;
use crate::sheet_info::upload::RowBatchItem;
use crate::transport::ApiRequest;

/// Body item of a set-parent call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ParentLinkItem {
    id: i64,
    parent_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_bottom: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RowTransfer<'a> {
    row_ids: &'a [i64],
    to: TransferTarget,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferTarget {
    sheet_id: i64,
}

impl SmartsheetClient {
    /// Fetch a single row
    pub fn get_row(&self, sheet_id: i64, row_id: i64) -> SmartsheetResult<Row> {
        let request = ApiRequest::get(format!("/sheets/{}/rows/{}", sheet_id, row_id))
            .query("exclude", "nonexistentCells");
        self.execute(request)?.json("get row")
    }

    /// Add one row; cells name their columns by title
    ///
    /// Lands at the bottom of the sheet when `location` is `None` or empty.
    pub fn add_row(
        &self,
        sheet: &SheetInfo,
        row: Row,
        location: Option<&RowLocation>,
    ) -> SmartsheetResult<SingleRowResult> {
        let row = sheet.resolve_row(row)?;
        let location = match location {
            Some(location) if !location.is_empty() => *location,
            _ => RowLocation::bottom(),
        };

        let item = RowBatchItem::insert(&row, location);
        let request = ApiRequest::post(format!("/sheets/{}/rows", sheet.sheet_id)).json(&item, "add row")?;

        // single row insert answers with an object, not a list
        let envelope: ResultEnvelope<Row> = self.execute(request)?.json("add row")?;
        Ok(SingleRowResult::from(envelope))
    }

    /// Update one row; `location` of `None` leaves the row where it is
    pub fn update_row(
        &self,
        sheet: &SheetInfo,
        row: Row,
        location: Option<&RowLocation>,
    ) -> SmartsheetResult<BatchResult> {
        let row = sheet.resolve_update_row(row)?;
        let item = RowBatchItem::update(&row, location.copied().unwrap_or_default());
        let request = ApiRequest::put(format!("/sheets/{}/rows", sheet.sheet_id)).json(&item, "update row")?;

        let envelope: ResultEnvelope<Vec<Row>> = self.execute(request)?.json("update row")?;
        Ok(BatchResult::from(envelope))
    }

    /// Delete rows by id
    pub fn delete_rows(&self, sheet_id: i64, row_ids: &[i64]) -> SmartsheetResult<()> {
        if row_ids.is_empty() {
            return Err(SmartsheetError::InvalidArgument(
                "No row ids given to delete".to_string(),
            ));
        }
        let request = ApiRequest::delete(format!("/sheets/{}/rows", sheet_id)).query("ids", join_ids(row_ids));
        let response = self.execute(request)?;
        tracing::debug!("delete_rows response: {}", response.text());
        Ok(())
    }

    /// Copy rows to the bottom of another sheet
    pub fn copy_rows(
        &self,
        from_sheet_id: i64,
        row_ids: &[i64],
        to_sheet_id: i64,
        options: &CopyOptions,
    ) -> SmartsheetResult<()> {
        self.transfer_rows("copy", from_sheet_id, row_ids, to_sheet_id, options.include_param())
    }

    /// Move rows to another sheet; child rows always move with their parent
    pub fn move_rows(
        &self,
        from_sheet_id: i64,
        row_ids: &[i64],
        to_sheet_id: i64,
        options: &MoveOptions,
    ) -> SmartsheetResult<()> {
        self.transfer_rows("move", from_sheet_id, row_ids, to_sheet_id, options.include_param())
    }

    fn transfer_rows(
        &self,
        action: &str,
        from_sheet_id: i64,
        row_ids: &[i64],
        to_sheet_id: i64,
        include: Option<String>,
    ) -> SmartsheetResult<()> {
        let body = RowTransfer {
            row_ids,
            to: TransferTarget {
                sheet_id: to_sheet_id,
            },
        };
        let mut request = ApiRequest::post(format!("/sheets/{}/rows/{}", from_sheet_id, action))
            .json(&body, &format!("{} rows", action))?;
        if let Some(include) = include {
            request = request.query("include", include);
        }
        let envelope: StatusEnvelope = self.execute(request)?.json(&format!("{} rows", action))?;
        tracing::debug!("{} rows: {} ({})", action, envelope.message, envelope.result_code);
        Ok(())
    }

    /// Make `child_ids` children of `parent_id`
    ///
    /// With several children their order is kept. With a single child, `to_bottom`
    /// places it last under the parent instead of first.
    pub fn set_parent_id(
        &self,
        sheet_id: i64,
        parent_id: i64,
        child_ids: &[i64],
        to_bottom: bool,
    ) -> SmartsheetResult<()> {
        if sheet_id == 0 {
            return Err(SmartsheetError::InvalidArgument(
                "Sheet id is not set".to_string(),
            ));
        }
        if child_ids.is_empty() {
            tracing::debug!("set_parent_id: no child ids for parent {}", parent_id);
            return Ok(());
        }

        let single = child_ids.len() == 1;
        let items: Vec<ParentLinkItem> = child_ids
            .iter()
            .map(|&id| ParentLinkItem {
                id,
                parent_id,
                to_bottom: (single && to_bottom).then_some(true),
            })
            .collect();

        let request = ApiRequest::put(format!("/sheets/{}/rows", sheet_id)).json(&items, "set parent")?;
        self.execute(request)?;
        tracing::debug!("Set parent {} on {} rows", parent_id, child_ids.len());
        Ok(())
    }
}
