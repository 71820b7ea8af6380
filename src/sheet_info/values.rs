//! Reading cell values by column title

use std::collections::BTreeMap;

use super::SheetInfo;
use crate::error::{SmartsheetError, SmartsheetResult};
use crate::models::{Cell, Row};

impl SheetInfo {
    /// Every column title mapped to the row's value as text
    ///
    /// A hyperlink URL takes the place of the displayed value. Columns without a cell
    /// in the row map to an empty string.
    pub fn row_values(&self, row: &Row) -> BTreeMap<String, String> {
        self.columns
            .iter()
            .map(|column| {
                let text = row.cell(column.id).map(cell_text).unwrap_or_default();
                (column.title.clone(), text)
            })
            .collect()
    }

    /// The row's cell for a column title, or an empty cell when the row has none
    pub fn cell_info(&self, row: &Row, title: &str) -> SmartsheetResult<Cell> {
        let column = self
            .columns
            .by_title(title)
            .ok_or_else(|| SmartsheetError::UnknownColumn(title.to_string()))?;
        Ok(row.cell(column.id).cloned().unwrap_or_else(|| Cell {
            column_id: column.id,
            ..Cell::default()
        }))
    }
}

fn cell_text(cell: &Cell) -> String {
    if let Some(url) = cell.hyperlink.as_ref().and_then(|link| link.url.as_ref()) {
        return url.clone();
    }
    cell.value
        .as_ref()
        .map(|value| value.to_display_string())
        .unwrap_or_default()
}
