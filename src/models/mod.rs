//! Models module for the SDK
//!
//! Types that match objects sent to and received from the Smartsheet API. Field
//! names on the wire are the provider's contract and are kept verbatim.

pub mod attachment;
pub mod cell;
pub mod column;
pub mod email;
pub mod options;
pub mod response;
pub mod row;
pub mod sheet;
pub mod webhook;

pub use attachment::Attachment;
pub use cell::{Cell, CellLink, CellValue, Hyperlink};
pub use column::Column;
pub use email::{EmailRecipient, EmailRowsRequest};
pub use options::{AttachmentType, CopyOptions, ExportFormat, GetSheetOptions, MoveOptions};
pub use response::{BatchResult, SingleRowResult};
pub use row::{LockState, Row, RowLocation};
pub use sheet::{CrossSheetReference, Sheet, WorkspaceRef};
pub use webhook::{Webhook, WebhookRequest, WebhookSubscope};
