//! Sheet-level models

use serde::{Deserialize, Serialize};

use super::column::Column;
use super::row::Row;

/// Workspace a sheet belongs to
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Sheet as returned by `GET /sheets/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub total_row_count: u32,
    #[serde(default)]
    pub workspace: Option<WorkspaceRef>,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub modified_at: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// Named reference to a range in another sheet, required by cross-sheet formulas
///
/// Leaving both row ids unset references all rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CrossSheetReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub source_sheet_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_row_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_row_id: Option<i64>,
    pub start_column_id: i64,
    pub end_column_id: i64,
    /// Reported by the service, e.g. "OK", "BROKEN"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CrossSheetReference {
    /// Reference every row between two columns of `source_sheet_id`
    pub fn columns(
        name: impl Into<String>,
        source_sheet_id: i64,
        start_column_id: i64,
        end_column_id: i64,
    ) -> Self {
        Self {
            name: name.into(),
            source_sheet_id,
            start_column_id,
            end_column_id,
            ..Self::default()
        }
    }

    pub fn with_rows(mut self, start_row_id: i64, end_row_id: i64) -> Self {
        self.start_row_id = Some(start_row_id);
        self.end_row_id = Some(end_row_id);
        self
    }
}
