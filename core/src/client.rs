//! Blocking mem.ai client that remembers the outcome of its last call.
//!
//! # Design
//! Every operation returns its own `MemResult`. The client also keeps a copy
//! of the last completed result so callers can inspect `status_code()`,
//! `error_message()`, `mem_id()` and `mem_url()` after the fact. The copy is
//! replaced only once a response has been fully parsed; transport and
//! malformed-response errors leave it untouched.
//!
//! Methods take `&mut self`, so one client cannot be driven from two threads
//! at once.

use tracing::{debug, warn};

use crate::api::MemApi;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::Result;
use crate::http::HttpRequest;
use crate::transport::{Transport, UreqTransport};
use crate::types::{AppendMem, CreateMem, MemResult};

#[derive(Debug)]
pub struct MemClient<T = UreqTransport> {
    api: MemApi,
    transport: T,
    last: MemResult,
}

impl MemClient<UreqTransport> {
    /// Client for the production API with no local timeout.
    pub fn new(api_key: &str) -> Self {
        Self::with_transport(MemApi::new(DEFAULT_BASE_URL, api_key), UreqTransport::default())
    }

    pub fn from_config(config: ClientConfig) -> Self {
        let api = MemApi::new(&config.base_url, &config.api_key);
        Self::with_transport(api, UreqTransport::new(config.timeout))
    }
}

impl<T: Transport> MemClient<T> {
    pub fn with_transport(api: MemApi, transport: T) -> Self {
        Self {
            api,
            transport,
            last: MemResult::default(),
        }
    }

    /// Create a mem, then append a `**MemID: <id>**` line to it.
    ///
    /// The annotation only happens when the create returned 200, and the
    /// value returned (and cached) is the annotation's result. A rejected
    /// create is returned as-is with no second request.
    pub fn create_mem(&mut self, input: &CreateMem) -> Result<MemResult> {
        let created = self.post_create(input)?;
        if !created.is_success() {
            return Ok(created);
        }
        let annotation = format!("**MemID: {}**", created.mem_id());
        self.append_to_mem(created.mem_id(), &annotation)
    }

    /// Append `content` to the mem identified by `mem_id`.
    ///
    /// Not idempotent: each call appends again.
    pub fn append_to_mem(&mut self, mem_id: &str, content: &str) -> Result<MemResult> {
        let input = AppendMem {
            content: content.to_string(),
        };
        let request = self.api.build_append_mem(mem_id, &input)?;
        self.send(request)
    }

    fn post_create(&mut self, input: &CreateMem) -> Result<MemResult> {
        let request = self.api.build_create_mem(input)?;
        self.send(request)
    }

    fn send(&mut self, request: HttpRequest) -> Result<MemResult> {
        debug!(method = request.method.as_str(), url = %request.url, "sending mem request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received mem response");

        let result = self.api.parse_mem_response(response)?;
        if !result.is_success() {
            warn!(
                status = result.status_code(),
                error = result.error_message(),
                "mem request rejected"
            );
        }
        self.last = result.clone();
        Ok(result)
    }

    pub fn last_result(&self) -> &MemResult {
        &self.last
    }

    pub fn status_code(&self) -> u16 {
        self.last.status_code()
    }

    pub fn error_message(&self) -> &str {
        self.last.error_message()
    }

    pub fn mem_id(&self) -> &str {
        self.last.mem_id()
    }

    pub fn mem_url(&self) -> &str {
        self.last.mem_url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
