//! Repository traits for the insights service.
//!
//! These traits define the persistence interfaces the API layer programs
//! against, enabling pluggable backends and testability. Every operation
//! that touches a source or insight row is scoped by the acting user's id;
//! a row owned by someone else is indistinguishable from a missing row.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Insight, Source, User};

/// Repository for user registration and account management.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user row.
    ///
    /// Fails with `UserAlreadyRegistered` on an id collision and
    /// `EmailAlreadyExists` on an email collision.
    async fn create(&self, user: &User) -> Result<()>;

    /// Fetch a user by id. Fails with `UserNotRegistered` if absent.
    async fn get(&self, id: &str) -> Result<User>;

    /// Update email and notification preferences for an existing id.
    ///
    /// Fails with `UserNotRegistered` if no row was affected and
    /// `EmailAlreadyExists` if the new email collides with another user's.
    async fn update(&self, user: &User) -> Result<()>;

    /// Delete a user. Fails with `UserNotRegistered` if no row was affected.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Repository for source CRUD, ownership-scoped.
#[async_trait]
pub trait SourceRepository: Send + Sync {
    /// Insert a new source and return its generated id.
    ///
    /// Fails with `UserNotRegistered` if the owning user does not exist.
    async fn create(&self, source: &Source) -> Result<i64>;

    /// List all sources owned by the user. Order is unspecified.
    async fn list(&self, user_id: &str) -> Result<Vec<Source>>;

    /// Update a source, scoped by `id AND user_id`.
    ///
    /// Fails with `SourceNotFound` if no row was affected, including when
    /// the row exists but belongs to another user.
    async fn update(&self, source: &Source) -> Result<()>;

    /// Delete a source, scoped by `id AND user_id`.
    async fn delete(&self, id: i64, user_id: &str) -> Result<()>;
}

/// Repository for insight CRUD with the source-ownership check.
#[async_trait]
pub trait InsightRepository: Send + Sync {
    /// Insert a new insight and return its generated id.
    ///
    /// If `source_id` is set, the referenced source must exist
    /// (`SourceNotFound`) and belong to the same user
    /// (`SourceDoesNotBelongToUser`) before the write proceeds.
    async fn create(&self, insight: &Insight) -> Result<i64>;

    /// List all insights owned by the user. Order is unspecified.
    async fn list(&self, user_id: &str) -> Result<Vec<Insight>>;

    /// Update an insight, scoped by `id AND user_id`.
    ///
    /// Re-runs the source-ownership check against the new `source_id`.
    /// Fails with `InsightNotFound` if no row was affected.
    async fn update(&self, insight: &Insight) -> Result<()>;

    /// Delete an insight, scoped by `id AND user_id`.
    async fn delete(&self, id: i64, user_id: &str) -> Result<()>;
}
