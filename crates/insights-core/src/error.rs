//! Error types for the insights service.
//!
//! The taxonomy is closed: every failure a request can surface is one of
//! these variants, and each variant carries a fixed client-facing message,
//! a more detailed server-log message, and a log severity. The HTTP status
//! mapping lives at the API boundary, matched exhaustively.

use thiserror::Error;
use tracing::Level;

/// Result type alias using the insights Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for insights operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Request body failed field validation
    #[error("Invalid request data: {0}")]
    InvalidRequestData(String),

    /// Referenced user id has no row
    #[error("User is not registered")]
    UserNotRegistered,

    /// User id collision on registration
    #[error("User is already registered")]
    UserAlreadyRegistered,

    /// Email collision on create/update
    #[error("Email already exists")]
    EmailAlreadyExists,

    /// Referenced source id has no row visible to the caller
    #[error("Source not found")]
    SourceNotFound,

    /// Source exists but is owned by another user
    #[error("Source does not belong to user")]
    SourceDoesNotBelongToUser,

    /// Referenced insight id has no row visible to the caller
    #[error("Insight not found")]
    InsightNotFound,

    /// Stored row could not be decoded into a domain entity
    #[error("Decode error: {0}")]
    Decode(String),

    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// Client-safe message for the error response body.
    ///
    /// Ownership mismatches read identically to plain not-found so the
    /// existence of another user's resource is never confirmed. The 500
    /// variants never leak internal detail.
    pub fn client_message(&self) -> String {
        match self {
            Error::InvalidRequestData(detail) => detail.clone(),
            Error::UserNotRegistered => "User is not registered".to_string(),
            Error::UserAlreadyRegistered => "Registration failed".to_string(),
            Error::EmailAlreadyExists => "The email already exists".to_string(),
            Error::SourceNotFound | Error::SourceDoesNotBelongToUser => {
                "Source not found".to_string()
            }
            Error::InsightNotFound => "Insight not found".to_string(),
            Error::Decode(_) | Error::Database(_) => "Internal server error".to_string(),
        }
    }

    /// Detailed message for the server log.
    pub fn server_log(&self) -> String {
        match self {
            Error::InvalidRequestData(detail) => detail.clone(),
            Error::UserNotRegistered => {
                "An unregistered user tried to perform an action".to_string()
            }
            Error::UserAlreadyRegistered => {
                "A registered user tried to register again".to_string()
            }
            Error::EmailAlreadyExists => "The email already exists".to_string(),
            Error::SourceNotFound => {
                "No source with the given ID belongs to the requesting user".to_string()
            }
            Error::SourceDoesNotBelongToUser => {
                "A user tried to perform an action on a source that does not belong to them"
                    .to_string()
            }
            Error::InsightNotFound => {
                "No insight with the given ID belongs to the requesting user".to_string()
            }
            Error::Decode(detail) => detail.clone(),
            Error::Database(err) => err.to_string(),
        }
    }

    /// Log severity for this error kind.
    pub fn log_level(&self) -> Level {
        match self {
            Error::InvalidRequestData(_) | Error::EmailAlreadyExists => Level::INFO,
            Error::UserNotRegistered
            | Error::UserAlreadyRegistered
            | Error::SourceNotFound
            | Error::SourceDoesNotBelongToUser
            | Error::InsightNotFound => Level::WARN,
            Error::Decode(_) | Error::Database(_) => Level::ERROR,
        }
    }
}
