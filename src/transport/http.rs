//! HTTP transport
//!
//! Implements Transport over a blocking reqwest client. Every call is followed by the
//! configured fixed delay, whether it succeeded or not. Downloads copy the response
//! body to the caller's writer as it arrives.

use std::io::Write;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};

use super::{ApiRequest, ApiResponse, Method, RequestBody, Transport};
use crate::config::ClientConfig;
use crate::error::{SmartsheetError, SmartsheetResult, TransportError};

/// Blocking HTTP transport
pub struct HttpTransport {
    config: ClientConfig,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use smartsheet_sdk::config::ClientConfig;
    /// use smartsheet_sdk::transport::http::HttpTransport;
    ///
    /// let transport = HttpTransport::new(ClientConfig::new("token")).unwrap();
    /// ```
    pub fn new(config: ClientConfig) -> SmartsheetResult<Self> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SmartsheetError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build_request(&self, request: &ApiRequest) -> reqwest::blocking::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, self.config.authorization_header());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref accept) = request.accept {
            builder = builder.header(ACCEPT, accept);
        }

        match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => {
                if self.config.log_request_bodies {
                    tracing::debug!(
                        "{} request body:\n{}",
                        request.method,
                        serde_json::to_string_pretty(value).unwrap_or_default()
                    );
                }
                builder
                    .header(CONTENT_TYPE, "application/json")
                    .body(value.to_string())
            }
            RequestBody::Binary {
                bytes,
                content_type,
                file_name,
            } => {
                let mut builder = builder.header(CONTENT_TYPE, content_type.as_str());
                if let Some(name) = file_name {
                    builder = builder.header(CONTENT_DISPOSITION, content_disposition(name));
                }
                builder.body(bytes.clone())
            }
        }
    }

    fn send_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout(self.config.timeout_seconds)
        } else if e.is_connect() {
            TransportError::Connection(format!(
                "Failed to connect to {}: {}",
                self.config.base_url, e
            ))
        } else if e.is_builder() {
            TransportError::Request(e.to_string())
        } else {
            TransportError::Connection(e.to_string())
        }
    }

    /// Send the request and return the response if its status is a success
    fn dispatch(&self, request: &ApiRequest) -> Result<reqwest::blocking::Response, TransportError> {
        tracing::debug!("{} - {}", request.method, request.path);

        let response = self
            .build_request(request)
            .send()
            .map_err(|e| self.send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::error!(
                "Smartsheet HTTP request failed: {} {} -> {}\n{}",
                request.method,
                request.path,
                status,
                body
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let response = self.dispatch(request)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(self.config.timeout_seconds)
            } else {
                TransportError::Body(e.to_string())
            }
        })?;
        Ok(ApiResponse::new(status, body.to_vec()))
    }

    /// Pause owed after `request`, if any
    fn delay_for(&self, request: &ApiRequest) -> Option<Duration> {
        let delay = self.config.request_delay();
        (!request.skip_delay && !delay.is_zero()).then_some(delay)
    }

    fn pause(&self, request: &ApiRequest) {
        if let Some(delay) = self.delay_for(request) {
            // limit number of requests per minute
            std::thread::sleep(delay);
        }
    }
}

/// `attachment; filename="..."` with the name percent-encoded
fn content_disposition(file_name: &str) -> String {
    format!("attachment; filename=\"{}\"", urlencoding::encode(file_name))
}

impl Transport for HttpTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let outcome = self.send(&request);
        self.pause(&request);
        outcome
    }

    fn download(&self, request: ApiRequest, sink: &mut dyn Write) -> Result<u64, TransportError> {
        let outcome = self.dispatch(&request).and_then(|mut response| {
            std::io::copy(&mut response, sink).map_err(|e| TransportError::Body(e.to_string()))
        });
        self.pause(&request);
        outcome
    }
}
