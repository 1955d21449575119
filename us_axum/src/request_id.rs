use axum::extract::FromRequestParts;
use axum::http::HeaderName;
use std::fmt;
use tower_http::request_id::RequestId;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Extracts the request ID assigned by `SetRequestIdLayer`.
///
/// Falls back to the raw `x-request-id` header, then to an empty string, so
/// handlers can always log it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestIdentifier(pub String);

impl fmt::Display for RequestIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for RequestIdentifier
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .map(RequestId::header_value)
            .or_else(|| parts.headers.get(X_REQUEST_ID))
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        Ok(Self(request_id.to_string()))
    }
}
