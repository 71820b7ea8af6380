//! Scripted transport for unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{ApiRequest, ApiResponse, Transport};
use crate::client::SmartsheetClient;
use crate::error::TransportError;

/// Replays queued responses in order and records every request it receives
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Client sharing this transport
    pub fn client(self: &Arc<Self>) -> SmartsheetClient {
        SmartsheetClient::new(Arc::clone(self))
    }

    pub fn push_json(&self, value: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::ok_json(&value)));
    }

    pub fn push_bytes(&self, body: &[u8]) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(200, body.to_vec())));
    }

    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("No scripted response".to_string())))
    }
}
