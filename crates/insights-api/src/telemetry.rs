//! Request correlation: UUIDv7 request IDs and the per-request span.

use axum::http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::{field, info_span, Span};
use uuid::Uuid;

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful for
/// log correlation when tracing a failed request across layers.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Span entered for every request.
///
/// Carries the `x-request-id` header (set by `SetRequestIdLayer`, which runs
/// first) and an empty `user_id` slot that the bearer-token extractor fills
/// in once the caller is identified. Events logged while handling the
/// request, failure events included, inherit both fields.
pub fn request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
        user_id = field::Empty,
    )
}

/// Record the authenticated caller on the current request span.
pub fn record_user_id(user_id: &str) {
    Span::current().record("user_id", user_id);
}
