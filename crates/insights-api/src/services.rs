//! Service layer: thin per-entity pass-throughs over the repositories.
//!
//! The one piece of business logic living here is the insight timestamp:
//! `last_modified_date` is stamped server-side on every create and update,
//! never taken from the client.

use chrono::Utc;

use insights_core::{Insight, InsightRepository, Result, Source, SourceRepository, User,
    UserRepository};
use insights_db::Database;

/// User registration and account management.
#[derive(Clone)]
pub struct UserService {
    db: Database,
}

impl UserService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, user: &User) -> Result<()> {
        self.db.users.create(user).await
    }

    pub async fn get(&self, id: &str) -> Result<User> {
        self.db.users.get(id).await
    }

    pub async fn update(&self, user: &User) -> Result<()> {
        self.db.users.update(user).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.db.users.delete(id).await
    }
}

/// Source CRUD.
#[derive(Clone)]
pub struct SourceService {
    db: Database,
}

impl SourceService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, source: &Source) -> Result<i64> {
        self.db.sources.create(source).await
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<Source>> {
        self.db.sources.list(user_id).await
    }

    pub async fn update(&self, source: &Source) -> Result<()> {
        self.db.sources.update(source).await
    }

    pub async fn delete(&self, id: i64, user_id: &str) -> Result<()> {
        self.db.sources.delete(id, user_id).await
    }
}

/// Insight CRUD with server-side modification dates.
#[derive(Clone)]
pub struct InsightService {
    db: Database,
}

impl InsightService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, mut insight: Insight) -> Result<i64> {
        insight.last_modified_date = Utc::now().date_naive();
        self.db.insights.create(&insight).await
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<Insight>> {
        self.db.insights.list(user_id).await
    }

    pub async fn update(&self, mut insight: Insight) -> Result<()> {
        insight.last_modified_date = Utc::now().date_naive();
        self.db.insights.update(&insight).await
    }

    pub async fn delete(&self, id: i64, user_id: &str) -> Result<()> {
        self.db.insights.delete(id, user_id).await
    }
}
