//! API error type and the global error-to-response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use tracing::{error, info, warn, Level};

use insights_core::Error;

/// Boundary error for HTTP handlers.
///
/// Wraps the domain taxonomy and adds the authentication failure that only
/// exists at the HTTP layer.
#[derive(Debug)]
pub enum ApiError {
    /// A typed domain error from validation, services, or repositories.
    Domain(Error),
    /// Missing or malformed bearer token.
    Unauthorized(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Domain(err)
    }
}

/// HTTP status for a domain error kind. Matched exhaustively so a new kind
/// cannot ship without a status decision.
fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidRequestData(_) => StatusCode::BAD_REQUEST,
        Error::UserNotRegistered
        | Error::SourceNotFound
        | Error::SourceDoesNotBelongToUser
        | Error::InsightNotFound => StatusCode::NOT_FOUND,
        Error::UserAlreadyRegistered | Error::EmailAlreadyExists => StatusCode::CONFLICT,
        Error::Decode(_) | Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, client_message) = match &self {
            ApiError::Domain(err) => {
                // The request span (telemetry::request_span) carries method,
                // path, request id, and the authenticated user id; the event
                // only adds the error detail.
                let server_log = err.server_log();
                match err.log_level() {
                    Level::ERROR => error!(subsystem = "api", error = %server_log, "Request failed"),
                    Level::WARN => warn!(subsystem = "api", error = %server_log, "Request failed"),
                    _ => info!(subsystem = "api", error = %server_log, "Request failed"),
                }
                (status_for(err), err.client_message())
            }
            ApiError::Unauthorized(detail) => {
                info!(subsystem = "api", error = %detail, "Request not authenticated");
                (StatusCode::UNAUTHORIZED, "Not authenticated".to_string())
            }
        };

        let body = Json(serde_json::json!({
            "error": client_message,
        }));

        (status, body).into_response()
    }
}
