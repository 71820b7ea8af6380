//! Smartsheet client
//!
//! The client owns the transport and exposes the one-shot API wrappers (see `api`).
//! `SheetInfo` borrows it for loads and batch uploads.

use std::io::Write;
use std::sync::Arc;

use crate::error::SmartsheetResult;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Entry point for API calls
#[derive(Clone)]
pub struct SmartsheetClient {
    transport: Arc<dyn Transport>,
}

impl SmartsheetClient {
    /// Create a client over any transport
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Create a client over a shared transport
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a client talking HTTP with the given configuration
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use smartsheet_sdk::{ClientConfig, SmartsheetClient};
    ///
    /// let client = SmartsheetClient::from_config(ClientConfig::new("token")).unwrap();
    /// let sheet = client.get_sheet(1849449510135684, None).unwrap();
    /// println!("{}", sheet.name);
    /// ```
    #[cfg(feature = "api-backend")]
    pub fn from_config(config: crate::config::ClientConfig) -> SmartsheetResult<Self> {
        let transport = crate::transport::http::HttpTransport::new(config)?;
        Ok(Self::new(transport))
    }

    /// Create an HTTP client configured from `SMARTSHEET_*` environment variables
    #[cfg(feature = "api-backend")]
    pub fn from_env() -> SmartsheetResult<Self> {
        Self::from_config(crate::config::ClientConfig::from_env()?)
    }

    /// Send a request built by the caller
    ///
    /// For endpoints without a typed wrapper. The transport still applies its post-call
    /// delay unless the request was built with [`ApiRequest::without_delay`].
    pub fn send(&self, request: ApiRequest) -> SmartsheetResult<ApiResponse> {
        self.execute(request)
    }

    pub(crate) fn execute(&self, request: ApiRequest) -> SmartsheetResult<ApiResponse> {
        Ok(self.transport.execute(request)?)
    }

    pub(crate) fn download(&self, request: ApiRequest, sink: &mut dyn Write) -> SmartsheetResult<u64> {
        Ok(self.transport.download(request, sink)?)
    }
}

impl std::fmt::Debug for SmartsheetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartsheetClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[test]
    fn test_send_raw_request() {
        let transport = MockTransport::new();
        transport.push_json(serde_json::json!({"data": [{"id": 1, "name": "Home"}]}));
        let client = transport.client();

        let response = client
            .send(ApiRequest::get("/favorites").without_delay())
            .unwrap();
        let body: serde_json::Value = response.json("favorites").unwrap();
        assert_eq!(body["data"][0]["name"], "Home");

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/favorites");
        assert!(requests[0].skip_delay);
    }

    #[test]
    fn test_wrapped_calls_keep_delay() {
        let transport = MockTransport::new();
        transport.push_json(serde_json::json!({"id": 5, "name": "Orders"}));

        transport.client().get_sheet(5, None).unwrap();
        assert!(!transport.requests()[0].skip_delay);
    }
}
