//! Source repository implementation.
//!
//! Update and delete statements are scoped by `id AND user_id`: a source
//! belonging to another user is invisible to these calls and yields
//! `SourceNotFound`, never a permission error.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};

use insights_core::{Error, Result, Source, SourceRepository};

/// PostgreSQL implementation of [`SourceRepository`].
pub struct PgSourceRepository {
    pool: Pool<Postgres>,
}

impl PgSourceRepository {
    /// Create a new PgSourceRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn map_row(row: PgRow) -> Result<Source> {
    Ok(Source {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        isbn13: row.try_get("isbn_13")?,
    })
}

fn map_foreign_key(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.constraint() == Some("sources_user_id_fkey") {
            return Error::UserNotRegistered;
        }
    }
    Error::Database(err)
}

#[async_trait]
impl SourceRepository for PgSourceRepository {
    async fn create(&self, source: &Source) -> Result<i64> {
        let row = sqlx::query(
            r#"
            INSERT INTO sources (user_id, name, description, isbn_13)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&source.user_id)
        .bind(&source.name)
        .bind(&source.description)
        .bind(&source.isbn13)
        .fetch_one(&self.pool)
        .await
        .map_err(map_foreign_key)?;

        Ok(row.try_get("id")?)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Source>> {
        let rows = sqlx::query("SELECT * FROM sources WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        rows.into_iter().map(map_row).collect()
    }

    async fn update(&self, source: &Source) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE sources
            SET
                name = $3,
                description = $4,
                isbn_13 = $5
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(source.id)
        .bind(&source.user_id)
        .bind(&source.name)
        .bind(&source.description)
        .bind(&source.isbn13)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::SourceNotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64, user_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM sources WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::SourceNotFound);
        }
        Ok(())
    }
}
