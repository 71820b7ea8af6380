//! Sheet webhooks
//!
//! A new webhook starts disabled. The service verifies the callback URL when
//! `enable_webhook` is called.

use serde::Serialize;

use crate::client::SmartsheetClient;
use crate::error::SmartsheetResult;
use crate::models::response::ResultEnvelope;
use crate::models::{Webhook, WebhookRequest, WebhookSubscope};
use crate::sheet_info::SheetInfo;
use crate::transport::ApiRequest;

#[derive(Serialize)]
struct EnableWebhook {
    enabled: bool,
}

impl SmartsheetClient {
    /// Create a webhook on a loaded sheet, returning its id
    ///
    /// Only changes in `column_names` trigger a callback; all columns when empty.
    pub fn create_webhook(
        &self,
        sheet: &SheetInfo,
        name: &str,
        callback_url: &str,
        column_names: &[&str],
    ) -> SmartsheetResult<i64> {
        let column_ids = column_names
            .iter()
            .map(|title| sheet.columns.column_id(title))
            .collect::<SmartsheetResult<Vec<_>>>()?;

        let mut body = WebhookRequest::for_sheet(name, callback_url, sheet.sheet_id);
        if !column_ids.is_empty() {
            body.subscope = Some(WebhookSubscope { column_ids });
        }

        let request = ApiRequest::post("/webhooks").json(&body, "create webhook")?;
        let envelope: ResultEnvelope<Webhook> = self.execute(request)?.json("create webhook")?;
        tracing::info!(
            "Created webhook {} ({}) for sheet {}",
            name,
            envelope.result.id,
            sheet.sheet_id
        );
        Ok(envelope.result.id)
    }

    /// Enable a webhook, which triggers callback verification
    pub fn enable_webhook(&self, webhook_id: i64) -> SmartsheetResult<Webhook> {
        let request = ApiRequest::put(format!("/webhooks/{}", webhook_id))
            .json(&EnableWebhook { enabled: true }, "enable webhook")?;
        let envelope: ResultEnvelope<Webhook> = self.execute(request)?.json("enable webhook")?;
        Ok(envelope.result)
    }

    pub fn get_webhook(&self, webhook_id: i64) -> SmartsheetResult<Webhook> {
        let request = ApiRequest::get(format!("/webhooks/{}", webhook_id));
        self.execute(request)?.json("get webhook")
    }

    pub fn delete_webhook(&self, webhook_id: i64) -> SmartsheetResult<()> {
        self.execute(ApiRequest::delete(format!("/webhooks/{}", webhook_id)))?;
        tracing::info!("Deleted webhook {}", webhook_id);
        Ok(())
    }
}
