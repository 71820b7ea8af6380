//! Column model

use serde::{Deserialize, Serialize};

/// A column definition as returned by the sheet endpoint
///
/// Column ids are assigned by the service. `index` is the zero-based position in the
/// sheet and `title` is unique within a sheet, which is what makes it usable as a
/// lookup key.
///
/// # Example
///
/// ```rust
/// use smartsheet_sdk::models::Column;
///
/// let column = Column::new(7, 0, "Address", "TEXT_NUMBER").primary();
/// assert!(column.primary);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: i64,
    #[serde(default)]
    pub index: usize,
    pub title: String,
    /// Provider type tag, e.g. "TEXT_NUMBER", "DATE", "CHECKBOX", "PICKLIST"
    #[serde(rename = "type", default)]
    pub column_type: String,
    #[serde(default)]
    pub primary: bool,
    /// Allowed values for picklist columns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Column {
    pub fn new(
        id: i64,
        index: usize,
        title: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            index,
            title: title.into(),
            column_type: column_type.into(),
            primary: false,
            options: Vec::new(),
        }
    }

    /// Mark as the sheet's primary column
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }
}
