use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Ok,
    Error,
}

/// The JSON envelope returned by every endpoint that does not answer with a
/// bare value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub const fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveUrlRequest {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveUrlResponse {
    #[serde(flatten)]
    pub response: Response,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// A stored alias to URL mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub alias: String,

    pub url: String,

    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    pub fn new(alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            url: url.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope() {
        let value = serde_json::to_value(Response::error("not found")).unwrap();

        assert_eq!(value, json!({ "status": "Error", "error": "not found" }));
    }

    #[test]
    fn test_ok_envelope_omits_error() {
        let value = serde_json::to_value(Response::ok()).unwrap();

        assert_eq!(value, json!({ "status": "Ok" }));
    }

    #[test]
    fn test_save_response_is_flattened() {
        let value = serde_json::to_value(SaveUrlResponse {
            response: Response::ok(),
            alias: Some("abc123".to_string()),
        })
        .unwrap();

        assert_eq!(value, json!({ "status": "Ok", "alias": "abc123" }));
    }

    #[test]
    fn test_save_request_alias_is_optional() {
        let request: SaveUrlRequest =
            serde_json::from_value(json!({ "url": "https://example.com" }))
                .unwrap();

        assert_eq!(request.url, "https://example.com");
        assert!(request.alias.is_none());
    }
}
