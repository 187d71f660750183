//! Blocking HTTP transport with basic-auth credentials.
//!
//! # Design
//! Wraps a `ureq::Agent` with status-as-error disabled, so 4xx/5xx responses
//! come back as data and `HttpResponse::into_success` decides what failed.
//! Credentials are fixed at construction and attached to every request.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::error::ApiError;
use crate::http::{Credentials, HttpMethod, HttpRequest, HttpResponse};

/// Executes `HttpRequest` values over the network.
#[derive(Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
    credentials: Credentials,
}

impl HttpTransport {
    pub fn new(credentials: Credentials, timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent, credentials }
    }

    /// Send a GET request and return the body of a 2xx response.
    pub fn get(&self, url: &str) -> Result<String, ApiError> {
        self.send(&HttpRequest::new(HttpMethod::Get, url))
    }

    /// Send a DELETE request and return the body of a 2xx response.
    pub fn delete(&self, url: &str) -> Result<String, ApiError> {
        self.send(&HttpRequest::new(HttpMethod::Delete, url))
    }

    /// Send a POST request carrying `data` as `content_type`.
    pub fn post(&self, url: &str, content_type: &str, data: &str) -> Result<String, ApiError> {
        self.send(&HttpRequest::new(HttpMethod::Post, url).with_body(content_type, data))
    }

    /// Send a PUT request carrying `data` as `content_type`.
    pub fn put(&self, url: &str, content_type: &str, data: &str) -> Result<String, ApiError> {
        self.send(&HttpRequest::new(HttpMethod::Put, url).with_body(content_type, data))
    }

    /// Execute `request` and fail unless the status is 2xx.
    pub fn send(&self, request: &HttpRequest) -> Result<String, ApiError> {
        self.execute(request)?.into_success()
    }

    /// Execute `request` and return the response whatever its status.
    ///
    /// Only failures that produced no response at all are errors here.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.path, "sending request");
        let auth = self.credentials.authorization_header();

        let result = match request.method {
            HttpMethod::Get => {
                apply_headers(self.agent.get(&request.path), &request.headers, &auth).call()
            }
            HttpMethod::Delete => {
                apply_headers(self.agent.delete(&request.path), &request.headers, &auth).call()
            }
            HttpMethod::Post => {
                let builder = apply_headers(self.agent.post(&request.path), &request.headers, &auth);
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Put => {
                let builder = apply_headers(self.agent.put(&request.path), &request.headers, &auth);
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ApiError::TransportError(e.to_string()))?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::TransportError(e.to_string()))?;

        debug!(status = status.as_u16(), url = %request.path, "received response");

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

fn apply_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
    authorization: &str,
) -> ureq::RequestBuilder<B> {
    builder = builder.header("authorization", authorization);
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
