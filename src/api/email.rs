//! Row emails

use crate::client::SmartsheetClient;
use crate::error::{SmartsheetError, SmartsheetResult};
use crate::models::EmailRowsRequest;
use crate::models::response::StatusEnvelope;
use crate::transport::ApiRequest;

impl SmartsheetClient {
    /// Send rows of a sheet by email
    pub fn email_rows(&self, sheet_id: i64, email: &EmailRowsRequest) -> SmartsheetResult<()> {
        if email.send_to.is_empty() {
            return Err(SmartsheetError::InvalidArgument(
                "Email has no recipients".to_string(),
            ));
        }
        let request = ApiRequest::post(format!("/sheets/{}/rows/emails", sheet_id)).json(email, "email rows")?;
        let status: StatusEnvelope = self.execute(request)?.json("email rows")?;
        if status.result_code != 0 {
            return Err(SmartsheetError::Api {
                code: status.result_code,
                message: status.message,
            });
        }
        tracing::info!(
            "Emailed {} rows of sheet {} to {} recipients",
            email.row_ids.len(),
            sheet_id,
            email.send_to.len()
        );
        Ok(())
    }
}
