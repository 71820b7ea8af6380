//! Email request model

use serde::{Deserialize, Serialize};

/// Recipient of a row email, either an address or a group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EmailRecipient {
    Email(String),
    GroupId(i64),
}

/// Body of `POST /sheets/{id}/rows/emails`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailRowsRequest {
    pub send_to: Vec<EmailRecipient>,
    pub subject: String,
    pub message: String,
    #[serde(rename = "ccMe")]
    pub cc_me: bool,
    pub row_ids: Vec<i64>,
    /// All columns when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_ids: Vec<i64>,
    pub include_attachments: bool,
    pub include_discussions: bool,
}

impl EmailRowsRequest {
    pub fn new(
        send_to: Vec<EmailRecipient>,
        subject: impl Into<String>,
        message: impl Into<String>,
        row_ids: Vec<i64>,
    ) -> Self {
        Self {
            send_to,
            subject: subject.into(),
            message: message.into(),
            row_ids,
            ..Self::default()
        }
    }

    pub fn with_column_ids(mut self, column_ids: Vec<i64>) -> Self {
        self.column_ids = column_ids;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_request_wire_shape() {
        let request = EmailRowsRequest::new(
            vec![
                EmailRecipient::Email("ops@example.com".to_string()),
                EmailRecipient::GroupId(12),
            ],
            "Test Email Rows",
            "Rows From Sheet",
            vec![1, 2],
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["sendTo"],
            serde_json::json!([{"email": "ops@example.com"}, {"groupId": 12}])
        );
        assert_eq!(json["ccMe"], false);
        assert_eq!(json["rowIds"], serde_json::json!([1, 2]));
        assert!(json.get("columnIds").is_none());
        assert_eq!(json["includeAttachments"], false);
    }
}
