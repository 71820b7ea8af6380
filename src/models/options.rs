//! Request options

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Restricts which rows and columns `GET /sheets/{id}` returns
///
/// With nothing set, all rows and columns are returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetSheetOptions {
    /// Only these rows
    #[serde(default)]
    pub row_ids: Vec<i64>,
    /// Only rows modified since this time
    #[serde(default)]
    pub rows_modified_since: Option<DateTime<Utc>>,
    /// Only rows modified in the last N minutes (takes precedence over `rows_modified_since`)
    #[serde(default)]
    pub rows_modified_mins: Option<u32>,
    /// Only these columns, by title; resolved through the cached column directory
    #[serde(default)]
    pub column_names: Vec<String>,
    /// Only these columns, by id
    #[serde(default)]
    pub column_ids: Vec<i64>,
}

impl GetSheetOptions {
    /// Column definitions only; row id 0 never matches a row
    pub fn no_rows() -> Self {
        Self {
            row_ids: vec![0],
            ..Self::default()
        }
    }

    pub fn with_row_ids(mut self, row_ids: Vec<i64>) -> Self {
        self.row_ids = row_ids;
        self
    }

    pub fn with_column_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.column_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_column_ids(mut self, column_ids: Vec<i64>) -> Self {
        self.column_ids = column_ids;
        self
    }

    pub fn modified_since(mut self, since: DateTime<Utc>) -> Self {
        self.rows_modified_since = Some(since);
        self
    }

    pub fn modified_within_mins(mut self, minutes: u32) -> Self {
        self.rows_modified_mins = Some(minutes);
        self
    }

    /// Query parameters, with column ids already resolved by the caller
    pub(crate) fn query_params(&self, column_ids: &[i64], now: DateTime<Utc>) -> Vec<(String, String)> {
        let mut params = vec![("exclude".to_string(), "nonexistentCells".to_string())];
        if !self.row_ids.is_empty() {
            params.push(("rowIds".to_string(), join_ids(&self.row_ids)));
        }
        if !column_ids.is_empty() {
            params.push(("columnIds".to_string(), join_ids(column_ids)));
        }
        let since = match self.rows_modified_mins {
            Some(mins) if mins > 0 => Some(now - Duration::minutes(mins as i64)),
            _ => self.rows_modified_since,
        };
        if let Some(since) = since {
            params.push((
                "rowsModifiedSince".to_string(),
                since.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        params
    }
}

/// Comma-separated id list for query parameters
pub(crate) fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Elements copied along with row cells by `copy_rows`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOptions {
    pub all: bool,
    pub attachments: bool,
    pub children: bool,
    pub discussions: bool,
}

impl CopyOptions {
    /// Value of the `include` query parameter, `None` when empty
    pub(crate) fn include_param(&self) -> Option<String> {
        if self.all {
            return Some("all".to_string());
        }
        let mut parts = Vec::new();
        if self.attachments {
            parts.push("attachments");
        }
        if self.children {
            parts.push("children");
        }
        if self.discussions {
            parts.push("discussions");
        }
        (!parts.is_empty()).then(|| parts.join(","))
    }
}

/// Elements moved along with row cells by `move_rows` (child rows always move)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOptions {
    pub attachments: bool,
    pub discussions: bool,
}

impl MoveOptions {
    pub(crate) fn include_param(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.attachments {
            parts.push("attachments");
        }
        if self.discussions {
            parts.push("discussions");
        }
        (!parts.is_empty()).then(|| parts.join(","))
    }
}

/// File format for sheet export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    /// Accept header selecting the format
    pub fn accept_header(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Excel => "application/vnd.ms-excel",
            Self::Pdf => "application/pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "xlsx",
            Self::Pdf => "pdf",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "excel" | "xlsx" => Ok(Self::Excel),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("Invalid format: {other} (expected csv, excel or pdf)")),
        }
    }
}

/// Kind of attachment; everything except `File` can be attached by URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttachmentType {
    File,
    Link,
    #[serde(rename = "BOX_COM")]
    BoxCom,
    Dropbox,
    Egnyte,
    Evernote,
    GoogleDrive,
    Onedrive,
}
