//! HTTP handlers, one module per entity.

pub mod insights;
pub mod sources;
pub mod users;

use serde::Serialize;

/// Response body carrying a freshly generated row id.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i64,
}
