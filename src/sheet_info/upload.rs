//! Batch upload of queued rows
//!
//! Inserts go out as one `POST /sheets/{id}/rows`, updates as one
//! `PUT /sheets/{id}/rows`. The queue is emptied before the call is made, so a
//! failed upload is not retried by a second call.
//!
//! Inserts can build a hierarchy in a second pass: a level column holds "0" on parent
//! rows and "1" on child rows. Once the rows exist, each parent gets one set-parent
//! call listing the children that follow it, in row order.

use serde::Serialize;

use super::SheetInfo;
use crate::client::SmartsheetClient;
use crate::error::{SmartsheetError, SmartsheetResult};
use crate::models::response::{OneOrMany, ResultEnvelope};
use crate::models::{BatchResult, Cell, Row, RowLocation};
use crate::transport::ApiRequest;

/// Wire shape of one row in an insert or update batch
///
/// The location is flattened into the item; the service applies one location to
/// the whole batch, so every item carries the same fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RowBatchItem<'a> {
    /// Row id as a decimal string, updates only
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cells: Option<&'a [Cell]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locked: Option<bool>,
    #[serde(flatten)]
    location: RowLocation,
}

impl<'a> RowBatchItem<'a> {
    pub(crate) fn insert(row: &'a Row, location: RowLocation) -> Self {
        Self {
            id: None,
            cells: Some(&row.cells),
            locked: row.locked.as_bool(),
            location,
        }
    }

    /// Cells are left out when empty so a row can be locked or moved on its own
    pub(crate) fn update(row: &'a Row, location: RowLocation) -> Self {
        Self {
            id: Some(row.id.to_string()),
            cells: (!row.cells.is_empty()).then_some(row.cells.as_slice()),
            locked: row.locked.as_bool(),
            location,
        }
    }
}

/// Role of a created row in the parent-linking pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LevelMarker {
    Parent,
    Child,
}

impl LevelMarker {
    fn of(row: &Row, level_column_id: i64) -> Option<Self> {
        let value = row.cell(level_column_id)?.value.as_ref()?;
        match value.to_display_string().trim() {
            "0" => Some(LevelMarker::Parent),
            "1" => Some(LevelMarker::Child),
            _ => None,
        }
    }
}

impl SheetInfo {
    /// Insert every queued new row in one call
    ///
    /// `location` applies to the whole batch; rows go to the bottom of the sheet when
    /// it is `None` or empty. With `level_column`, created rows are then linked to
    /// their parents (see module docs). If a set-parent call fails the error is
    /// [`SmartsheetError::ParentLinkFailed`], which still carries the created rows.
    ///
    /// An empty queue returns an empty result without a call.
    pub fn upload_new_rows(
        &mut self,
        client: &SmartsheetClient,
        location: Option<&RowLocation>,
        level_column: Option<&str>,
    ) -> SmartsheetResult<BatchResult> {
        if self.new_rows.is_empty() {
            tracing::debug!("upload_new_rows: nothing queued for sheet {}", self.sheet_id);
            return Ok(BatchResult::default());
        }
        self.ensure_sheet_id()?;
        let level_column_id = level_column
            .map(|title| self.columns.column_id(title))
            .transpose()?;
        let location = match location {
            Some(location) if !location.is_empty() => *location,
            _ => RowLocation::bottom(),
        };

        let rows = std::mem::take(&mut self.new_rows);
        let items: Vec<RowBatchItem> = rows
            .iter()
            .map(|row| RowBatchItem::insert(row, location))
            .collect();

        let request = ApiRequest::post(format!("/sheets/{}/rows", self.sheet_id)).json(&items, "add rows")?;
        let envelope: ResultEnvelope<OneOrMany<Row>> = client.execute(request)?.json("add rows")?;
        let result = BatchResult::from(envelope);
        tracing::info!(
            "Added {} rows to sheet {} ({})",
            result.len(),
            self.sheet_id,
            result.message
        );

        if let Some(level_column_id) = level_column_id
            && let Err(source) = self.link_parents(client, &result.rows, level_column_id)
        {
            return Err(SmartsheetError::ParentLinkFailed {
                result: Box::new(result),
                source: Box::new(source),
            });
        }
        Ok(result)
    }

    /// Update every queued row in one call
    ///
    /// Rows stay where they are unless `location` is given. An empty queue returns an
    /// empty result without a call.
    pub fn upload_update_rows(
        &mut self,
        client: &SmartsheetClient,
        location: Option<&RowLocation>,
    ) -> SmartsheetResult<BatchResult> {
        if self.update_rows.is_empty() {
            tracing::debug!("upload_update_rows: nothing queued for sheet {}", self.sheet_id);
            return Ok(BatchResult::default());
        }
        self.ensure_sheet_id()?;
        let location = location.copied().unwrap_or_default();

        let rows = std::mem::take(&mut self.update_rows);
        let items: Vec<RowBatchItem> = rows
            .iter()
            .map(|row| RowBatchItem::update(row, location))
            .collect();

        let request =
            ApiRequest::put(format!("/sheets/{}/rows", self.sheet_id)).json(&items, "update rows")?;
        // always a list, even for a single row
        let envelope: ResultEnvelope<Vec<Row>> = client.execute(request)?.json("update rows")?;
        let result = BatchResult::from(envelope);
        tracing::info!(
            "Updated {} rows in sheet {} ({})",
            result.len(),
            self.sheet_id,
            result.message
        );
        Ok(result)
    }

    /// Walk created rows in order and issue one set-parent call per parent group
    ///
    /// Returns the number of set-parent calls made.
    fn link_parents(
        &self,
        client: &SmartsheetClient,
        rows: &[Row],
        level_column_id: i64,
    ) -> SmartsheetResult<usize> {
        let mut parent_id: Option<i64> = None;
        let mut children: Vec<i64> = Vec::new();
        let mut calls = 0;

        for row in rows {
            match LevelMarker::of(row, level_column_id) {
                Some(LevelMarker::Parent) => {
                    if let Some(previous) = parent_id
                        && !children.is_empty()
                    {
                        client.set_parent_id(self.sheet_id, previous, &children, false)?;
                        calls += 1;
                    }
                    children.clear();
                    parent_id = Some(row.id);
                }
                Some(LevelMarker::Child) => match parent_id {
                    Some(_) => children.push(row.id),
                    None => tracing::warn!(
                        "Row {} is marked as a child but no parent row precedes it, left at top level",
                        row.id
                    ),
                },
                None => tracing::warn!(
                    "Row {} has no level marker (expected \"0\" or \"1\"), skipped",
                    row.id
                ),
            }
        }

        if let Some(parent) = parent_id
            && !children.is_empty()
        {
            client.set_parent_id(self.sheet_id, parent, &children, false)?;
            calls += 1;
        }

        tracing::debug!("Linked {} parent groups in sheet {}", calls, self.sheet_id);
        Ok(calls)
    }

    fn ensure_sheet_id(&self) -> SmartsheetResult<()> {
        if self.sheet_id == 0 {
            return Err(SmartsheetError::InvalidArgument(
                "Sheet id is not set, load the sheet first".to_string(),
            ));
        }
        Ok(())
    }
}
