//! Blocking HTTP execution behind a small trait.
//!
//! `MemClient` hands every `HttpRequest` to a `Transport` and gets an
//! `HttpResponse` back. Any status code is a valid response; only failures to
//! complete the exchange are errors.

use std::time::Duration;

use crate::error::{MemError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// `Transport` backed by a `ureq` agent.
///
/// 4xx/5xx responses come back as data so the caller can read the service's
/// error body.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Post => self.agent.post(&request.url),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let sent = match request.body {
            Some(body) => builder.send(body.as_bytes()),
            None => builder.send_empty(),
        };
        let mut response = sent.map_err(|e| MemError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| MemError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}
