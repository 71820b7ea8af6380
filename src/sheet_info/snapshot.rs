//! Snapshot files
//!
//! A snapshot holds the whole `SheetInfo`: identity, column indices, loaded rows and
//! queued rows. It is written as pretty JSON, or as YAML when the path ends in
//! `.yaml` / `.yml`.

use std::path::Path;

use super::SheetInfo;
use crate::error::{SmartsheetError, SmartsheetResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                SnapshotFormat::Yaml
            }
            _ => SnapshotFormat::Json,
        }
    }
}

fn snapshot_error(path: &Path, message: impl Into<String>) -> SmartsheetError {
    SmartsheetError::Snapshot {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

impl SheetInfo {
    /// Write a snapshot to `path`, replacing any existing file
    pub fn store(&self, path: &Path) -> SmartsheetResult<()> {
        let text = match SnapshotFormat::for_path(path) {
            SnapshotFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| snapshot_error(path, format!("Failed to serialize: {}", e)))?,
            SnapshotFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| snapshot_error(path, format!("Failed to serialize: {}", e)))?,
        };
        std::fs::write(path, text)
            .map_err(|e| snapshot_error(path, format!("Failed to write: {}", e)))?;

        tracing::debug!(
            "Stored sheet {} ({} columns, {} rows) to {}",
            self.sheet_id,
            self.columns.len(),
            self.rows.len(),
            path.display()
        );
        Ok(())
    }

    /// Replace this sheet info with the snapshot at `path`
    ///
    /// On error nothing changes.
    pub fn restore(&mut self, path: &Path) -> SmartsheetResult<()> {
        *self = Self::from_snapshot(path)?;
        Ok(())
    }

    /// Read a snapshot written by [`SheetInfo::store`]
    pub fn from_snapshot(path: &Path) -> SmartsheetResult<Self> {
        if !path.exists() {
            return Err(snapshot_error(path, "File not found"));
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| snapshot_error(path, format!("Failed to read: {}", e)))?;

        let info: SheetInfo = match SnapshotFormat::for_path(path) {
            SnapshotFormat::Json => serde_json::from_str(&text)
                .map_err(|e| snapshot_error(path, format!("Failed to parse: {}", e)))?,
            SnapshotFormat::Yaml => serde_yaml::from_str(&text)
                .map_err(|e| snapshot_error(path, format!("Failed to parse: {}", e)))?,
        };
        if !info.columns.is_consistent() {
            return Err(snapshot_error(path, "Column indices disagree"));
        }

        tracing::debug!(
            "Restored sheet {} ({} columns) from {}",
            info.sheet_id,
            info.columns.len(),
            path.display()
        );
        Ok(info)
    }
}
