//! # insights-db
//!
//! PostgreSQL database layer for the insights service.
//!
//! This crate provides:
//! - Connection pool management with a server-side statement timeout
//! - Repository implementations for users, sources, and insights
//! - Ownership-scoped SQL: every source/insight statement is constrained by
//!   the acting user's id, so foreign rows read as not-found
//! - Mapping of constraint violations to the typed error taxonomy
//!
//! ## Example
//!
//! ```rust,ignore
//! use insights_db::Database;
//! use insights_core::SourceRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/insights").await?;
//!     let sources = db.sources.list("auth0|someone").await?;
//!     println!("{} sources", sources.len());
//!     Ok(())
//! }
//! ```

pub mod insights;
pub mod pool;
pub mod sources;
pub mod users;

// Test fixtures for integration tests
// Note: always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use insights_core::*;

// Re-export repository implementations
pub use insights::PgInsightRepository;
pub use pool::{create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};
pub use sources::PgSourceRepository;
pub use users::PgUserRepository;

/// Combined database context with all repositories.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// User repository for registration and account management.
    pub users: PgUserRepository,
    /// Source repository for ownership-scoped source CRUD.
    pub sources: PgSourceRepository,
    /// Insight repository with the source-ownership check.
    pub insights: PgInsightRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            sources: PgSourceRepository::new(pool.clone()),
            insights: PgInsightRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}
