//! Cell model
//!
//! Cells are used both in responses and in add/update requests. On requests a cell
//! names its column by title; the title is resolved to a column id through the cached
//! column directory before anything is sent.

use serde::{Deserialize, Serialize};

/// Scalar cell value, serialized without a wrapper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Plain text rendering, numbers without formatting
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Boolean(b) => b.to_string(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

/// Link stored in a cell, to a URL, a sheet or a report
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hyperlink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Hyperlink {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn sheet(sheet_id: i64) -> Self {
        Self {
            sheet_id: Some(sheet_id),
            ..Self::default()
        }
    }

    pub fn report(report_id: i64) -> Self {
        Self {
            report_id: Some(report_id),
            ..Self::default()
        }
    }
}

/// Location of a linked value in another sheet (computed by the service)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellLink {
    #[serde(default)]
    pub column_id: i64,
    #[serde(default)]
    pub row_id: i64,
    #[serde(default)]
    pub sheet_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_name: Option<String>,
    /// e.g. "OK", "BROKEN", "INACCESSIBLE"
    #[serde(default)]
    pub status: String,
}

/// A single cell
///
/// # Example
///
/// ```rust
/// use smartsheet_sdk::models::{Cell, Hyperlink};
///
/// let cell = Cell::new("Amount", 74.20);
/// let link = Cell::new("Site", "docs").with_hyperlink(Hyperlink::url("https://example.com"));
/// let total = Cell::formula("Total", "=SUM([Amount]:[Amount])");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Column title, resolved to `column_id` when the row is queued (never sent)
    #[serde(skip)]
    pub column_name: Option<String>,
    #[serde(default)]
    pub column_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_in_from_cell: Option<CellLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links_out_to_cells: Vec<CellLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<CellValue>,
}

impl Cell {
    /// Cell holding a value, addressed by column title
    pub fn new(column_name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self {
            column_name: Some(column_name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Cell holding a formula, addressed by column title
    pub fn formula(column_name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            column_name: Some(column_name.into()),
            formula: Some(formula.into()),
            ..Self::default()
        }
    }

    /// Cell addressed directly by column id
    pub fn by_id(column_id: i64, value: impl Into<CellValue>) -> Self {
        Self {
            column_id,
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Attach a hyperlink; the value becomes the displayed text
    pub fn with_hyperlink(mut self, hyperlink: Hyperlink) -> Self {
        self.hyperlink = Some(hyperlink);
        self
    }

    /// Label used in error messages
    pub(crate) fn column_label(&self) -> String {
        match &self.column_name {
            Some(name) => name.clone(),
            None => self.column_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_untagged() {
        let values: Vec<CellValue> = serde_json::from_str(r#"["0", 3, 74.2, true]"#).unwrap();
        assert_eq!(values[0], CellValue::Text("0".to_string()));
        assert_eq!(values[1], CellValue::Integer(3));
        assert_eq!(values[2], CellValue::Float(74.2));
        assert_eq!(values[3], CellValue::Boolean(true));

        assert_eq!(serde_json::to_string(&CellValue::from(74.2)).unwrap(), "74.2");
        assert_eq!(serde_json::to_string(&CellValue::from("Red")).unwrap(), "\"Red\"");
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Float(3.0).to_display_string(), "3");
        assert_eq!(CellValue::Float(33.75).to_display_string(), "33.75");
        assert_eq!(CellValue::Boolean(false).to_display_string(), "false");
    }

    #[test]
    fn test_cell_omits_absent_fields() {
        let mut cell = Cell::new("Status", "Red");
        cell.column_id = 42;
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json, serde_json::json!({"columnId": 42, "value": "Red"}));
    }

    #[test]
    fn test_cell_with_hyperlink() {
        let mut cell = Cell::new("Site", "docs").with_hyperlink(Hyperlink::url("https://example.com"));
        cell.column_id = 9;
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["hyperlink"], serde_json::json!({"url": "https://example.com"}));
        assert!(json.get("formula").is_none());
    }

    #[test]
    fn test_cell_deserialize_links() {
        let json = r#"{
            "columnId": 1,
            "value": 12,
            "displayValue": "12",
            "linkInFromCell": {"columnId": 2, "rowId": 3, "sheetId": 4, "status": "OK"},
            "linksOutToCells": [{"columnId": 5, "rowId": 6, "sheetId": 7, "status": "BROKEN"}]
        }"#;
        let cell: Cell = serde_json::from_str(json).unwrap();
        assert_eq!(cell.value, Some(CellValue::Integer(12)));
        assert_eq!(cell.link_in_from_cell.unwrap().row_id, 3);
        assert_eq!(cell.links_out_to_cells[0].status, "BROKEN");
        assert!(cell.column_name.is_none());
    }
}
