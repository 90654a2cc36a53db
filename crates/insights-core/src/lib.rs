//! # insights-core
//!
//! Core types, traits, and abstractions for the insights service.
//!
//! This crate provides the domain entities, the error taxonomy, the
//! repository trait definitions, and the request-boundary validation that
//! the other insights crates depend on.

pub mod error;
pub mod logging;
pub mod models;
pub mod traits;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{FilterTag, Insight, Source, User};
pub use traits::{InsightRepository, SourceRepository, UserRepository};
pub use validation::{
    validate_email, validate_insight_fields, validate_source_fields, ISBN_13_LENGTH,
    MAX_INSIGHT_NOTE_LENGTH, MAX_INSIGHT_QUOTE_LENGTH, MAX_SOURCE_DESCRIPTION_LENGTH,
    MAX_SOURCE_NAME_LENGTH,
};
