//! Stateless request builder and response parser for the mem.ai API.
//!
//! # Design
//! `MemApi` holds the base URL and the authorization header value and carries
//! no mutable state between calls. Each endpoint has a `build_*` method that
//! produces an `HttpRequest`; both endpoints share a single parser because the
//! service answers them with the same body shapes.

use std::fmt;

use crate::error::{MemError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AppendMem, CreateMem, ErrorBody, MemCreated, MemResult};

const AUTH_SCHEME: &str = "ApiAccessToken";

/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Clone)]
pub struct MemApi {
    base_url: String,
    authorization: String,
}

impl MemApi {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization: format!("{AUTH_SCHEME} {api_key}"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_create_mem(&self, input: &CreateMem) -> Result<HttpRequest> {
        self.post(format!("{}/mems", self.base_url), input)
    }

    pub fn build_append_mem(&self, mem_id: &str, input: &AppendMem) -> Result<HttpRequest> {
        self.post(format!("{}/mems/{mem_id}/append", self.base_url), input)
    }

    /// Map a create or append response onto a `MemResult`.
    ///
    /// Only an exact 200 counts as success. Any other status is a rejection
    /// and must carry `{"error":{"message":...}}`.
    pub fn parse_mem_response(&self, response: HttpResponse) -> Result<MemResult> {
        let status = response.status;
        if status == 200 {
            let created: MemCreated = decode(&response)?;
            Ok(MemResult::success(created.id, created.url))
        } else {
            let body: ErrorBody = decode(&response)?;
            Ok(MemResult::rejected(status, body.error.message))
        }
    }

    fn post<T: serde::Serialize>(&self, url: String, input: &T) -> Result<HttpRequest> {
        let body = serde_json::to_string(input).map_err(|e| MemError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url,
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("authorization".to_string(), self.authorization.clone()),
            ],
            body: Some(body),
        })
    }
}

fn decode<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    serde_json::from_str(&response.body).map_err(|e| MemError::MalformedResponse {
        status: response.status,
        reason: e.to_string(),
    })
}

impl fmt::Debug for MemApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemApi")
            .field("base_url", &self.base_url)
            .field("authorization", &format_args!("{AUTH_SCHEME} <redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> MemApi {
        MemApi::new("https://api.mem.ai/v0", "key-123")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_create_mem_produces_correct_request() {
        let req = api().build_create_mem(&CreateMem::new("# Title\nbody")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.mem.ai/v0/mems");
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.header("Authorization"), Some("ApiAccessToken key-123"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"content": "# Title\nbody", "isRead": false, "isArchived": false})
        );
    }

    #[test]
    fn build_create_mem_carries_flags() {
        let input = CreateMem::new("x").read(true).archived(true);
        let req = api().build_create_mem(&input).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["isRead"], true);
        assert_eq!(body["isArchived"], true);
    }

    #[test]
    fn build_append_mem_produces_correct_request() {
        let input = AppendMem {
            content: "more".to_string(),
        };
        let req = api().build_append_mem("m1", &input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.mem.ai/v0/mems/m1/append");
        assert_eq!(req.header("authorization"), Some("ApiAccessToken key-123"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"content": "more"}));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let api = MemApi::new("http://localhost:3000/v0/", "k");
        let req = api.build_create_mem(&CreateMem::new("x")).unwrap();
        assert_eq!(req.url, "http://localhost:3000/v0/mems");
    }

    #[test]
    fn parse_success() {
        let result = api()
            .parse_mem_response(response(200, r#"{"id":"m1","url":"https://mem.ai/m1"}"#))
            .unwrap();
        assert!(result.is_success());
        assert_eq!(result.ids(), ("m1", "https://mem.ai/m1"));
        assert_eq!(result.error_message(), "");
    }

    #[test]
    fn parse_rejection() {
        let result = api()
            .parse_mem_response(response(403, r#"{"error":{"message":"invalid token"}}"#))
            .unwrap();
        assert_eq!(result.status_code(), 403);
        assert_eq!(result.error_message(), "invalid token");
        assert_eq!(result.ids(), ("", ""));
    }

    #[test]
    fn parse_non_200_success_code_is_still_a_rejection() {
        let result = api()
            .parse_mem_response(response(201, r#"{"error":{"message":"unexpected"}}"#))
            .unwrap();
        assert!(!result.is_success());
    }

    #[test]
    fn parse_bad_json() {
        let err = api().parse_mem_response(response(200, "not json")).unwrap_err();
        assert!(matches!(err, MemError::MalformedResponse { status: 200, .. }));
    }

    #[test]
    fn parse_success_missing_url() {
        let err = api().parse_mem_response(response(200, r#"{"id":"m1"}"#)).unwrap_err();
        assert!(matches!(err, MemError::MalformedResponse { .. }));
    }

    #[test]
    fn parse_rejection_without_error_message() {
        let err = api()
            .parse_mem_response(response(500, "<html>Bad Gateway</html>"))
            .unwrap_err();
        assert!(matches!(err, MemError::MalformedResponse { status: 500, .. }));
    }

    #[test]
    fn debug_hides_the_key() {
        let rendered = format!("{:?}", api());
        assert!(!rendered.contains("key-123"));
        assert!(rendered.contains("https://api.mem.ai/v0"));
    }
}
