//! Webhook models

use serde::{Deserialize, Serialize};

/// Columns whose changes trigger the webhook (all columns when empty)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscope {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_ids: Vec<i64>,
}

/// Body of `POST /webhooks`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub name: String,
    pub callback_url: String,
    pub scope: String,
    pub scope_object_id: i64,
    pub events: Vec<String>,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscope: Option<WebhookSubscope>,
}

impl WebhookRequest {
    /// Sheet-scoped webhook for all events
    pub fn for_sheet(name: impl Into<String>, callback_url: impl Into<String>, sheet_id: i64) -> Self {
        Self {
            name: name.into(),
            callback_url: callback_url.into(),
            scope: "sheet".to_string(),
            scope_object_id: sheet_id,
            events: vec!["*.*".to_string()],
            version: 1,
            subscope: None,
        }
    }
}

/// Webhook as returned by the service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub callback_url: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub scope_object_id: i64,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub enabled: bool,
    /// e.g. "NEW_NOT_VERIFIED", "ENABLED", "DISABLED_VERIFICATION_FAILED"
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub subscope: Option<WebhookSubscope>,
}
