//! Blocking client for the mem.ai note API.
//!
//! # Overview
//! Creates mems and appends to them over two `POST` endpoints. Every call
//! yields a `MemResult`; `MemClient` also caches the last one so its status,
//! error message, id and URL can be read after the call returns.
//!
//! # Design
//! - `MemApi` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_mem_response` consumes an `HttpResponse`.
//! - `MemClient` drives `MemApi` through a `Transport`. The default
//!   transport is `ureq`; tests substitute their own.
//! - A non-200 answer is a rejected `MemResult`, not an `Err`. Errors are
//!   reserved for failed exchanges and unparseable bodies.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::MemApi;
pub use client::MemClient;
pub use config::ClientConfig;
pub use error::{MemError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{AppendMem, CreateMem, MemResult};
