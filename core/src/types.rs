//! Wire DTOs for the mem.ai API and the per-call `MemResult`.
//!
//! # Design
//! Field names follow the service's camelCase schema through serde renames.
//! The mock-server crate defines its own copies of these shapes; the
//! integration tests catch any drift between the two.

use serde::{Deserialize, Serialize};

use crate::error::MemError;

/// Request payload for creating a new mem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMem {
    pub content: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_archived: bool,
}

impl CreateMem {
    /// Unread, unarchived mem with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_read: false,
            is_archived: false,
        }
    }

    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn archived(mut self, is_archived: bool) -> Self {
        self.is_archived = is_archived;
        self
    }
}

/// Request payload for appending to an existing mem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendMem {
    pub content: String,
}

/// Body of a 200 response from either endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemCreated {
    pub id: String,
    pub url: String,
}

/// Body of a non-200 response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

/// Outcome of a single create or append call.
///
/// `mem_id` and `mem_url` are only set when `status_code == 200`;
/// `error_message` is only set otherwise. The constructors are the only way
/// to build one, so the two halves never mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemResult {
    mem_id: String,
    mem_url: String,
    status_code: u16,
    error_message: String,
}

impl Default for MemResult {
    /// The state before any call has been made: status 200, everything empty.
    fn default() -> Self {
        Self {
            mem_id: String::new(),
            mem_url: String::new(),
            status_code: 200,
            error_message: String::new(),
        }
    }
}

impl MemResult {
    pub fn success(mem_id: impl Into<String>, mem_url: impl Into<String>) -> Self {
        Self {
            mem_id: mem_id.into(),
            mem_url: mem_url.into(),
            status_code: 200,
            error_message: String::new(),
        }
    }

    pub fn rejected(status_code: u16, error_message: impl Into<String>) -> Self {
        Self {
            mem_id: String::new(),
            mem_url: String::new(),
            status_code,
            error_message: error_message.into(),
        }
    }

    pub fn mem_id(&self) -> &str {
        &self.mem_id
    }

    pub fn mem_url(&self) -> &str {
        &self.mem_url
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }

    /// `(mem_id, mem_url)`; both empty for a rejected call.
    pub fn ids(&self) -> (&str, &str) {
        (&self.mem_id, &self.mem_url)
    }

    /// Turn a rejection into `MemError::Rejected` for `?`-style callers.
    pub fn into_result(self) -> Result<Self, MemError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(MemError::Rejected {
                status: self.status_code,
                message: self.error_message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_mem_serializes_camel_case() {
        let input = CreateMem::new("hello").read(true);
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["content"], "hello");
        assert_eq!(json["isRead"], true);
        assert_eq!(json["isArchived"], false);
        assert!(json.get("is_read").is_none());
    }

    #[test]
    fn create_mem_flags_default_to_false() {
        let input: CreateMem = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        assert!(!input.is_read);
        assert!(!input.is_archived);
    }

    #[test]
    fn default_result_is_pristine_success() {
        let result = MemResult::default();
        assert_eq!(result.status_code(), 200);
        assert_eq!(result.ids(), ("", ""));
        assert_eq!(result.error_message(), "");
    }

    #[test]
    fn rejected_result_has_no_ids() {
        let result = MemResult::rejected(403, "invalid token");
        assert!(!result.is_success());
        assert_eq!(result.ids(), ("", ""));
        assert_eq!(result.error_message(), "invalid token");
    }

    #[test]
    fn into_result_maps_rejection_to_error() {
        let err = MemResult::rejected(401, "nope").into_result().unwrap_err();
        assert!(matches!(err, MemError::Rejected { status: 401, ref message } if message.as_str() == "nope"));

        let ok = MemResult::success("m1", "https://mem.ai/m1").into_result().unwrap();
        assert_eq!(ok.mem_id(), "m1");
    }

    #[test]
    fn mem_created_ignores_extra_fields() {
        let body: MemCreated =
            serde_json::from_str(r#"{"id":"m1","url":"https://mem.ai/m1","createdAt":"x"}"#).unwrap();
        assert_eq!(body.id, "m1");
    }
}
