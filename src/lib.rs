//! Smartsheet SDK - client library for the Smartsheet REST API
//!
//! Provides:
//! - Typed request/response models (sheets, rows, cells, attachments, webhooks)
//! - One-shot API calls on [`SmartsheetClient`]
//! - [`SheetInfo`]: cached column metadata, title-based cell addressing and batched
//!   row uploads, including parent/child linking
//! - Snapshot files and structural comparison of sheets
//!
//! All calls are blocking and go through a [`Transport`]; the default HTTP transport
//! (feature `api-backend`) pauses after every call to stay under the service's
//! request ceiling.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod sheet_info;
pub mod transport;

#[cfg(feature = "cli")]
pub mod cli;

pub use client::SmartsheetClient;
pub use config::ClientConfig;
pub use error::{SmartsheetError, SmartsheetResult, TransportError};
pub use sheet_info::{ColumnDirectory, SheetInfo, SheetMismatch};
pub use transport::{ApiRequest, ApiResponse, Method, RequestBody, Transport};
#[cfg(feature = "api-backend")]
pub use transport::http::HttpTransport;

// Re-export models
pub use models::{
    BatchResult, Cell, CellValue, Column, ExportFormat, GetSheetOptions, LockState, Row,
    RowLocation, Sheet,
};
