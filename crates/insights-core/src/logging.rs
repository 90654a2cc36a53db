//! Structured logging field schema for the insights service.
//!
//! `tracing` macros take field names as literal identifiers, so call sites
//! spell these names inline. This module is the canonical schema: one
//! constant per field, for log-aggregation tooling and for code that builds
//! queries over emitted events. Keep call sites and this list in sync when
//! adding a field.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Unclassified failures (storage outage, corrupt rows) |
//! | WARN  | Rejected actions worth operator visibility (not-found, id collisions) |
//! | INFO  | Lifecycle events, expected client mistakes (validation, email conflicts) |
//! | DEBUG | Decision points, pool metrics |

/// Correlation ID propagated from the request-id header. Format: UUIDv7.
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event. Values: "api", "db".
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem. Examples: "users", "sources", "insights", "pool".
pub const COMPONENT: &str = "component";

/// Logical operation name. Examples: "create", "list", "update", "delete".
pub const OPERATION: &str = "op";

/// Acting user's id (the token subject).
pub const USER_ID: &str = "user_id";

/// Source row id being operated on.
pub const SOURCE_ID: &str = "source_id";

/// Insight row id being operated on.
pub const INSIGHT_ID: &str = "insight_id";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of active connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
