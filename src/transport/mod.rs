//! Transport abstraction
//!
//! Defines the Transport trait every API call goes through, and the request/response
//! values passed across it:
//! - HttpTransport: blocking HTTP implementation (feature `api-backend`, default)
//!
//! Tests and embedders can supply their own implementation.

use std::io::Write;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{SmartsheetError, SmartsheetResult, TransportError};

#[cfg(feature = "api-backend")]
pub mod http;

#[cfg(test)]
pub(crate) mod mock;

/// HTTP method used by a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Raw upload; `file_name` is sent as an attachment content disposition
    Binary {
        bytes: Vec<u8>,
        content_type: String,
        file_name: Option<String>,
    },
}

/// A single API call, relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    /// Overrides the Accept header (used by sheet export)
    pub accept: Option<String>,
    /// Skip the post-call throttle delay
    ///
    /// Every request built by this crate leaves it unset. It is for callers sending
    /// their own requests through [`crate::SmartsheetClient::send`] who pace calls
    /// themselves.
    pub skip_delay: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            accept: None,
            skip_delay: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Serialize `data` as the JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T, context: &str) -> SmartsheetResult<Self> {
        let value = serde_json::to_value(data).map_err(|e| SmartsheetError::encode(context, e))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn binary(
        mut self,
        bytes: Vec<u8>,
        content_type: impl Into<String>,
        file_name: Option<String>,
    ) -> Self {
        self.body = RequestBody::Binary {
            bytes,
            content_type: content_type.into(),
            file_name,
        };
        self
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Do not pause after this call
    pub fn without_delay(mut self) -> Self {
        self.skip_delay = true;
        self
    }

    /// JSON body, if any
    pub fn json_body(&self) -> Option<&serde_json::Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Value of a query parameter, if present
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response from a successful call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response carrying the given JSON value
    pub fn ok_json(value: &serde_json::Value) -> Self {
        Self::new(200, value.to_string())
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self, context: &str) -> SmartsheetResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| SmartsheetError::decode(context, e))
    }

    /// Body as (lossy) UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for transports
///
/// A transport sends one request, attaches the credential, treats any non-success status
/// as a [`TransportError::Status`], and applies the configured post-call delay on every
/// call unless the request sets `skip_delay`.
pub trait Transport: Send + Sync {
    /// Execute a request
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;

    /// Execute a request and copy a successful response body into `sink`
    ///
    /// Returns the number of bytes written. The default goes through
    /// [`Transport::execute`] and holds the whole body in memory; transports that can
    /// stream should override it.
    fn download(&self, request: ApiRequest, sink: &mut dyn Write) -> Result<u64, TransportError> {
        let response = self.execute(request)?;
        sink.write_all(&response.body)
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(response.body.len() as u64)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).execute(request)
    }

    fn download(&self, request: ApiRequest, sink: &mut dyn Write) -> Result<u64, TransportError> {
        (**self).download(request, sink)
    }
}
