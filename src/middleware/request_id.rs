//! Request correlation on top of tower-http's `x-request-id` layers.
//!
//! `set_request_id_layer` keeps a caller-supplied id or mints a UUID v4,
//! `propagate_request_id_layer` copies it onto the response, and the
//! tracing span plus handler logs read it back from request extensions.

use axum::{body::Body, extract::Request, http::HeaderName};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Shown in logs when a request somehow reached a handler untagged
const UNKNOWN_REQUEST_ID: &str = "unknown";

pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid)
}

pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(REQUEST_ID_HEADER)
}

/// Printable form of a request id; non-ASCII header values fall back to "unknown"
pub fn request_id_str(request_id: Option<&RequestId>) -> &str {
    request_id
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or(UNKNOWN_REQUEST_ID)
}

/// Span for `TraceLayer`; must sit inside `set_request_id_layer`
pub fn make_span_with_request_id(request: &Request<Body>) -> tracing::Span {
    let request_id = request_id_str(request.extensions().get::<RequestId>());

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_request_id_str() {
        let id = RequestId::new(HeaderValue::from_static("abc-123"));
        assert_eq!(request_id_str(Some(&id)), "abc-123");
        assert_eq!(request_id_str(None), "unknown");

        let opaque = RequestId::new(HeaderValue::from_bytes(b"caf\xe9").unwrap());
        assert_eq!(request_id_str(Some(&opaque)), "unknown");
    }
}
