//! One-shot API wrappers
//!
//! Each call is a single request/response exchange, implemented as methods on
//! [`crate::SmartsheetClient`]:
//! - sheets: download a sheet, export it to CSV, Excel or PDF
//! - rows: single row add/update, delete, copy, move, set parent
//! - attachments: files and links on rows
//! - cross_sheet: named references to other sheets
//! - email: send rows by email
//! - webhooks: create, enable, read and delete sheet webhooks

mod attachments;
mod cross_sheet;
mod email;
mod rows;
mod sheets;
mod webhooks;
