//! Attachment model

use serde::{Deserialize, Serialize};

use super::options::AttachmentType;

/// Attachment as returned after an upload or link
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<AttachmentType>,
    /// Reported for uploaded files only, e.g. "FILE"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_in_kb: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body of a URL attachment
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UrlAttachmentRequest<'a> {
    pub name: &'a str,
    pub attachment_type: AttachmentType,
    pub url: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_deserialize() {
        let json = r#"{
            "id": 4583173393803140,
            "name": "report.pdf",
            "attachmentType": "FILE",
            "mimeType": "application/pdf",
            "sizeInKb": 12
        }"#;
        let attachment: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(attachment.attachment_type, Some(AttachmentType::File));
        assert_eq!(attachment.size_in_kb, Some(12));
        assert!(attachment.url.is_none());

        let json = r#"{"id": 1, "name": "docs", "attachmentType": "LINK", "url": "https://example.com"}"#;
        let attachment: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(attachment.attachment_type, Some(AttachmentType::Link));
        assert_eq!(attachment.url.as_deref(), Some("https://example.com"));
    }
}
