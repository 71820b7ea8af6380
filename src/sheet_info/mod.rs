//! Sheet info
//!
//! `SheetInfo` mirrors one sheet: its identity, its columns (see [`ColumnDirectory`])
//! and the rows returned by the last load. Callers address cells by column title and
//! queue rows for insertion or update; queued rows are sent in one batch call by
//! `upload_new_rows` / `upload_update_rows`.
//!
//! # Example
//!
//! ```rust,no_run
//! use smartsheet_sdk::models::{Cell, Row};
//! use smartsheet_sdk::{SheetInfo, SmartsheetClient};
//!
//! let client = SmartsheetClient::from_env().unwrap();
//! let mut sheet = SheetInfo::new();
//! sheet.load(&client, 1849449510135684, None).unwrap();
//!
//! sheet.add_row(Row::new(vec![Cell::new("Address", "400 Ringo"), Cell::new("Level", "0")])).unwrap();
//! sheet.add_row(Row::new(vec![Cell::new("Address", "Unit 1"), Cell::new("Level", "1")])).unwrap();
//! let created = sheet.upload_new_rows(&client, None, Some("Level")).unwrap();
//! println!("{} rows added", created.len());
//! ```

pub mod compare;
pub mod directory;
pub mod snapshot;
pub mod upload;
pub mod values;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use compare::SheetMismatch;
pub use directory::ColumnDirectory;

use crate::client::SmartsheetClient;
use crate::error::{SmartsheetError, SmartsheetResult};
use crate::models::{Column, GetSheetOptions, Row, Sheet};

/// Local mirror of one sheet plus pending row mutations
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SheetInfo {
    pub sheet_id: i64,
    pub sheet_name: String,
    #[serde(default)]
    pub workspace_id: i64,
    #[serde(default)]
    pub workspace_name: String,
    pub columns: ColumnDirectory,
    /// Rows returned by the last load
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    new_rows: Vec<Row>,
    #[serde(default)]
    update_rows: Vec<Row>,
}

impl SheetInfo {
    /// Empty sheet info, populated by [`SheetInfo::load`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheet info built from a known column list, without contacting the service
    pub fn with_columns(sheet_id: i64, sheet_name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            sheet_id,
            sheet_name: sheet_name.into(),
            columns: ColumnDirectory::from_columns(columns),
            ..Self::default()
        }
    }

    /// Sheet info mirroring a downloaded sheet
    pub fn from_sheet(sheet: Sheet) -> Self {
        let mut info = Self::new();
        info.replace_contents(sheet);
        info
    }

    /// Fetch a sheet and replace identity, columns and loaded rows
    ///
    /// Column titles in `options` are resolved through the columns already loaded, so
    /// restricting columns by title needs an earlier load (or `GetSheetOptions::no_rows`).
    /// Queued rows are kept. On error nothing changes.
    pub fn load(
        &mut self,
        client: &SmartsheetClient,
        sheet_id: i64,
        options: Option<&GetSheetOptions>,
    ) -> SmartsheetResult<()> {
        let default_options = GetSheetOptions::default();
        let options = options.unwrap_or(&default_options);

        let mut column_ids = options.column_ids.clone();
        for title in &options.column_names {
            column_ids.push(self.columns.column_id(title)?);
        }

        let sheet = client.fetch_sheet(sheet_id, options, &column_ids)?;
        self.replace_contents(sheet);
        tracing::info!(
            "Loaded sheet {} ({}): {} columns, {} rows",
            self.sheet_name,
            self.sheet_id,
            self.columns.len(),
            self.rows.len()
        );
        Ok(())
    }

    fn replace_contents(&mut self, sheet: Sheet) {
        let workspace = sheet.workspace.unwrap_or_default();
        self.sheet_id = sheet.id;
        self.sheet_name = sheet.name;
        self.workspace_id = workspace.id;
        self.workspace_name = workspace.name;
        self.columns = ColumnDirectory::from_columns(sheet.columns);
        self.rows = sheet.rows;
    }

    /// Queue a row for insertion
    ///
    /// Every cell title must name a loaded column, otherwise nothing is queued.
    pub fn add_row(&mut self, row: Row) -> SmartsheetResult<()> {
        let row = self.resolve_row(row)?;
        self.new_rows.push(row);
        Ok(())
    }

    /// Queue an existing row for update
    pub fn update_row(&mut self, row: Row) -> SmartsheetResult<()> {
        let row = self.resolve_update_row(row)?;
        self.update_rows.push(row);
        Ok(())
    }

    /// Rows waiting for `upload_new_rows`
    pub fn pending_new_rows(&self) -> &[Row] {
        &self.new_rows
    }

    /// Rows waiting for `upload_update_rows`
    pub fn pending_update_rows(&self) -> &[Row] {
        &self.update_rows
    }

    /// Copy of `row` with every cell title replaced by its column id
    pub(crate) fn resolve_row(&self, mut row: Row) -> SmartsheetResult<Row> {
        for cell in &mut row.cells {
            if cell.formula.is_some() && cell.value.is_some() {
                return Err(SmartsheetError::InvalidCell {
                    column: cell.column_label(),
                    reason: "a cell cannot carry both a formula and a value".to_string(),
                });
            }
            match cell.column_name.take() {
                Some(title) => cell.column_id = self.columns.column_id(&title)?,
                None if cell.column_id == 0 => {
                    return Err(SmartsheetError::InvalidCell {
                        column: String::new(),
                        reason: "cell has neither a column title nor a column id".to_string(),
                    });
                }
                None => {}
            }
        }
        Ok(row)
    }

    pub(crate) fn resolve_update_row(&self, row: Row) -> SmartsheetResult<Row> {
        if row.id == 0 {
            return Err(SmartsheetError::InvalidArgument(
                "Rows to update need a row id".to_string(),
            ));
        }
        self.resolve_row(row)
    }

    /// Readable summary: identity, columns in order, and up to `row_limit` rows
    pub fn render(&self, row_limit: usize) -> String {
        self.summary(row_limit).to_string()
    }

    /// Same text as [`SheetInfo::render`], written straight to a formatter
    pub fn summary(&self, row_limit: usize) -> SheetSummary<'_> {
        SheetSummary {
            info: self,
            row_limit,
        }
    }
}

/// Display adapter returned by [`SheetInfo::summary`]
#[derive(Debug, Clone, Copy)]
pub struct SheetSummary<'a> {
    info: &'a SheetInfo,
    row_limit: usize,
}

impl fmt::Display for SheetSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info;
        writeln!(f, "Sheet: {} ({})", info.sheet_name, info.sheet_id)?;
        if info.workspace_id != 0 {
            writeln!(f, "Workspace: {} ({})", info.workspace_name, info.workspace_id)?;
        }

        writeln!(f, "Columns:")?;
        for column in info.columns.iter() {
            writeln!(
                f,
                "  {:>3}  {:<30} {:<14} {}",
                column.index, column.title, column.column_type, column.id
            )?;
        }

        let shown = info.rows.len().min(self.row_limit);
        writeln!(f, "Rows: {} of {}", shown, info.rows.len())?;
        for (position, row) in info.rows.iter().take(self.row_limit).enumerate() {
            let values = info.row_values(row);
            let line = info
                .columns
                .titles()
                .map(|title| {
                    let value = values.get(title).map(String::as_str).unwrap_or_default();
                    format!("{}={}", title, value)
                })
                .collect::<Vec<_>>()
                .join(", ");
            let number = row.row_number.map(|n| n as usize).unwrap_or(position + 1);
            writeln!(f, "  {:>4}: {}", number, line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, LockState, WorkspaceRef};
    use crate::transport::mock::MockTransport;

    fn columns() -> Vec<Column> {
        vec![
            Column::new(100, 0, "Address", "TEXT_NUMBER").primary(),
            Column::new(101, 1, "Level", "TEXT_NUMBER"),
            Column::new(102, 2, "Total", "TEXT_NUMBER"),
        ]
    }

    fn sheet_json() -> serde_json::Value {
        serde_json::json!({
            "id": 7,
            "name": "Sites",
            "workspace": {"id": 3, "name": "Ops"},
            "columns": [
                {"id": 100, "index": 0, "title": "Address", "type": "TEXT_NUMBER", "primary": true},
                {"id": 101, "index": 1, "title": "Level", "type": "TEXT_NUMBER"}
            ],
            "rows": [
                {"id": 900, "rowNumber": 1, "cells": [{"columnId": 100, "value": "400 Ringo"}, {"columnId": 101, "value": "0"}]}
            ]
        })
    }

    #[test]
    fn test_add_row_resolves_titles() {
        let mut info = SheetInfo::with_columns(7, "Sites", columns());
        info.add_row(Row::new(vec![
            Cell::new("Address", "400 Ringo"),
            Cell::formula("Total", "=SUM([Level]:[Level])"),
        ]))
        .unwrap();

        let queued = &info.pending_new_rows()[0];
        assert_eq!(queued.cells[0].column_id, 100);
        assert_eq!(queued.cells[1].column_id, 102);
        assert!(queued.cells.iter().all(|c| c.column_name.is_none()));
    }

    #[test]
    fn test_unknown_title_queues_nothing() {
        let mut info = SheetInfo::with_columns(7, "Sites", columns());
        let result = info.add_row(Row::new(vec![
            Cell::new("Address", "400 Ringo"),
            Cell::new("Colour", "Red"),
        ]));
        assert!(matches!(result, Err(SmartsheetError::UnknownColumn(_))));
        assert!(info.pending_new_rows().is_empty());
    }

    #[test]
    fn test_formula_and_value_rejected() {
        let mut info = SheetInfo::with_columns(7, "Sites", columns());
        let mut cell = Cell::new("Total", 5);
        cell.formula = Some("=1+1".to_string());
        let result = info.add_row(Row::new(vec![cell]));
        assert!(matches!(result, Err(SmartsheetError::InvalidCell { .. })));
    }

    #[test]
    fn test_cell_by_id_accepted() {
        let mut info = SheetInfo::with_columns(7, "Sites", columns());
        info.add_row(Row::new(vec![Cell::by_id(555, "kept")])).unwrap();
        assert_eq!(info.pending_new_rows()[0].cells[0].column_id, 555);
    }

    #[test]
    fn test_update_row_needs_id() {
        let mut info = SheetInfo::with_columns(7, "Sites", columns());
        let result = info.update_row(Row::new(vec![Cell::new("Level", "1")]));
        assert!(matches!(result, Err(SmartsheetError::InvalidArgument(_))));

        info.update_row(Row::existing(900).with_lock(LockState::Locked))
            .unwrap();
        assert_eq!(info.pending_update_rows().len(), 1);
    }

    #[test]
    fn test_load_replaces_contents_and_keeps_queues() {
        let transport = MockTransport::new();
        transport.push_json(sheet_json());
        let client = transport.client();

        let mut info = SheetInfo::with_columns(7, "Old", columns());
        info.add_row(Row::new(vec![Cell::new("Address", "queued")])).unwrap();
        info.load(&client, 7, None).unwrap();

        assert_eq!(info.sheet_name, "Sites");
        assert_eq!(info.workspace_name, "Ops");
        assert_eq!(info.workspace_id, 3);
        assert_eq!(info.columns.len(), 2);
        assert!(info.columns.by_title("Total").is_none());
        assert_eq!(info.rows.len(), 1);
        assert_eq!(info.pending_new_rows().len(), 1);
    }

    #[test]
    fn test_load_resolves_column_names() {
        let transport = MockTransport::new();
        transport.push_json(sheet_json());
        let client = transport.client();

        let mut info = SheetInfo::with_columns(7, "Sites", columns());
        let options = GetSheetOptions::default().with_column_names(["Level", "Address"]);
        info.load(&client, 7, Some(&options)).unwrap();
        assert_eq!(transport.requests()[0].query_value("columnIds"), Some("101,100"));
    }

    #[test]
    fn test_load_unknown_column_name_makes_no_call() {
        let transport = MockTransport::new();
        let client = transport.client();

        let mut info = SheetInfo::new();
        let options = GetSheetOptions::default().with_column_names(["Level"]);
        let result = info.load(&client, 7, Some(&options));
        assert!(matches!(result, Err(SmartsheetError::UnknownColumn(_))));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_load_failure_leaves_state() {
        let transport = MockTransport::new();
        transport.push_error(crate::error::TransportError::Status {
            status: 404,
            body: "{\"errorCode\": 1006}".to_string(),
        });
        let client = transport.client();

        let before = SheetInfo::with_columns(7, "Sites", columns());
        let mut info = before.clone();
        assert!(info.load(&client, 7, None).is_err());
        assert_eq!(info, before);
    }

    #[test]
    fn test_from_sheet_without_workspace() {
        let info = SheetInfo::from_sheet(Sheet {
            id: 1,
            name: "Loose".to_string(),
            workspace: None,
            columns: columns(),
            ..Sheet::default()
        });
        assert_eq!(info.workspace_id, 0);
        assert_eq!(info.columns.len(), 3);

        let with_workspace = SheetInfo::from_sheet(Sheet {
            workspace: Some(WorkspaceRef {
                id: 9,
                name: "Ops".to_string(),
            }),
            ..Sheet::default()
        });
        assert_eq!(with_workspace.workspace_name, "Ops");
    }

    #[test]
    fn test_render() {
        let info = SheetInfo::from_sheet(serde_json::from_value(sheet_json()).unwrap());
        let text = info.render(10);
        assert!(text.starts_with("Sheet: Sites (7)\nWorkspace: Ops (3)\nColumns:\n"));
        assert!(text.contains("Address"));
        assert!(text.contains("Rows: 1 of 1"));
        assert!(text.contains("1: Address=400 Ringo, Level=0"));

        let text = info.render(0);
        assert!(text.contains("Rows: 0 of 1"));
        assert!(!text.contains("400 Ringo"));
    }

    #[test]
    fn test_summary_matches_render() {
        let info = SheetInfo::from_sheet(serde_json::from_value(sheet_json()).unwrap());
        assert_eq!(format!("{}", info.summary(5)), info.render(5));
        assert!(format!("{}", SheetInfo::new().summary(5)).ends_with("Columns:\nRows: 0 of 0\n"));
    }
}
