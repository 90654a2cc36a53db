//! Insight repository implementation.
//!
//! Create and update first verify that a referenced source belongs to the
//! acting user. The check and the write are two statements; the narrow
//! window in which the source could disappear in between is closed by also
//! mapping a residual `insights_source_id_fkey` violation to
//! `SourceNotFound`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};

use insights_core::{Error, FilterTag, Insight, InsightRepository, Result};

/// PostgreSQL implementation of [`InsightRepository`].
pub struct PgInsightRepository {
    pool: Pool<Postgres>,
}

impl PgInsightRepository {
    /// Create a new PgInsightRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Verify that the referenced source exists and is owned by `user_id`.
    ///
    /// No row → `SourceNotFound`. A row owned by someone else →
    /// `SourceDoesNotBelongToUser`, which the boundary surfaces with the
    /// same client text as plain not-found.
    async fn check_source_ownership(&self, source_id: i64, user_id: &str) -> Result<()> {
        let owner: Option<String> =
            sqlx::query_scalar("SELECT user_id FROM sources WHERE id = $1")
                .bind(source_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(Error::Database)?;

        match owner {
            None => Err(Error::SourceNotFound),
            Some(owner) if owner != user_id => Err(Error::SourceDoesNotBelongToUser),
            Some(_) => Ok(()),
        }
    }
}

fn map_row(row: PgRow) -> Result<Insight> {
    let stored_tags: Vec<String> = row.try_get("filter_tags")?;
    Ok(Insight {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        source_id: row.try_get("source_id")?,
        last_modified_date: row.try_get("last_modified_date")?,
        filter_tags: FilterTag::decode_all(&stored_tags)?,
        note: row.try_get("note")?,
        quote: row.try_get("quote")?,
    })
}

fn map_foreign_key(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.constraint() {
            Some("insights_user_id_fkey") => return Error::UserNotRegistered,
            Some("insights_source_id_fkey") => return Error::SourceNotFound,
            _ => {}
        }
    }
    Error::Database(err)
}

#[async_trait]
impl InsightRepository for PgInsightRepository {
    async fn create(&self, insight: &Insight) -> Result<i64> {
        if let Some(source_id) = insight.source_id {
            self.check_source_ownership(source_id, &insight.user_id)
                .await?;
        }

        let row = sqlx::query(
            r#"
            INSERT INTO insights
                (user_id, source_id, last_modified_date, filter_tags, note, quote)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&insight.user_id)
        .bind(insight.source_id)
        .bind(insight.last_modified_date)
        .bind(FilterTag::encode_all(&insight.filter_tags))
        .bind(&insight.note)
        .bind(&insight.quote)
        .fetch_one(&self.pool)
        .await
        .map_err(map_foreign_key)?;

        Ok(row.try_get("id")?)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Insight>> {
        let rows = sqlx::query("SELECT * FROM insights WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        rows.into_iter().map(map_row).collect()
    }

    async fn update(&self, insight: &Insight) -> Result<()> {
        if let Some(source_id) = insight.source_id {
            self.check_source_ownership(source_id, &insight.user_id)
                .await?;
        }

        let result = sqlx::query(
            r#"
            UPDATE insights
            SET
                source_id = $3,
                last_modified_date = $4,
                filter_tags = $5,
                note = $6,
                quote = $7
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(insight.id)
        .bind(&insight.user_id)
        .bind(insight.source_id)
        .bind(insight.last_modified_date)
        .bind(FilterTag::encode_all(&insight.filter_tags))
        .bind(&insight.note)
        .bind(&insight.quote)
        .execute(&self.pool)
        .await
        .map_err(map_foreign_key)?;

        if result.rows_affected() == 0 {
            return Err(Error::InsightNotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64, user_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM insights WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::InsightNotFound);
        }
        Ok(())
    }
}
