//! Row attachments

use std::path::Path;

use crate::client::SmartsheetClient;
use crate::error::{SmartsheetError, SmartsheetResult};
use crate::models::attachment::UrlAttachmentRequest;
use crate::models::response::ResultEnvelope;
use crate::models::{Attachment, AttachmentType};
use crate::transport::ApiRequest;

impl SmartsheetClient {
    /// Upload a local file as an attachment of a row
    pub fn attach_file_to_row(
        &self,
        sheet_id: i64,
        row_id: i64,
        path: &Path,
    ) -> SmartsheetResult<Attachment> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                SmartsheetError::InvalidArgument(format!(
                    "Path has no usable file name: {}",
                    path.display()
                ))
            })?
            .to_string();
        let bytes = std::fs::read(path)?;
        tracing::debug!(
            "Attaching {} ({} bytes) to row {}",
            file_name,
            bytes.len(),
            row_id
        );

        let request = ApiRequest::post(format!("/sheets/{}/rows/{}/attachments", sheet_id, row_id))
            .binary(bytes, "application/octet-stream", Some(file_name));
        let envelope: ResultEnvelope<Attachment> = self.execute(request)?.json("attach file")?;
        Ok(envelope.result)
    }

    /// Attach a link (plain URL or a cloud storage item) to a row
    pub fn attach_url_to_row(
        &self,
        sheet_id: i64,
        row_id: i64,
        name: &str,
        attachment_type: AttachmentType,
        url: &str,
    ) -> SmartsheetResult<Attachment> {
        if attachment_type == AttachmentType::File {
            return Err(SmartsheetError::InvalidArgument(
                "Files must be uploaded with attach_file_to_row".to_string(),
            ));
        }
        let body = UrlAttachmentRequest {
            name,
            attachment_type,
            url,
        };
        let request = ApiRequest::post(format!("/sheets/{}/rows/{}/attachments", sheet_id, row_id))
            .json(&body, "attach url")?;
        let envelope: ResultEnvelope<Attachment> = self.execute(request)?.json("attach url")?;
        Ok(envelope.result)
    }
}
