//! User repository implementation.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};

use insights_core::{Error, FilterTag, Result, User, UserRepository};

/// Unique constraint on the email column.
const EMAIL_CONSTRAINT: &str = "users_email_key";
/// Primary key constraint on the id column.
const ID_CONSTRAINT: &str = "users_pkey";

/// PostgreSQL implementation of [`UserRepository`].
pub struct PgUserRepository {
    pool: Pool<Postgres>,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn map_row(row: PgRow) -> Result<User> {
    let stored_tags: Vec<String> = row.try_get("notification_filter_tags")?;
    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        notification_enabled: row.try_get("notification_enabled")?,
        notification_filter_tags: FilterTag::decode_all(&stored_tags)?,
    })
}

/// Classify a duplicate-key failure by the violated constraint name.
///
/// An unrecognized constraint propagates unclassified.
fn classify_duplicate(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.constraint() {
            Some(EMAIL_CONSTRAINT) => return Error::EmailAlreadyExists,
            Some(ID_CONSTRAINT) => return Error::UserAlreadyRegistered,
            _ => {}
        }
    }
    Error::Database(err)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, notification_enabled, notification_filter_tags)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(user.notification_enabled)
        .bind(FilterTag::encode_all(&user.notification_filter_tags))
        .execute(&self.pool)
        .await
        .map_err(classify_duplicate)?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<User> {
        let row = sqlx::query("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or(Error::UserNotRegistered)?;
        map_row(row)
    }

    async fn update(&self, user: &User) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET
                email = $2,
                notification_enabled = $3,
                notification_filter_tags = $4
            WHERE id = $1
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(user.notification_enabled)
        .bind(FilterTag::encode_all(&user.notification_filter_tags))
        .execute(&self.pool)
        .await
        .map_err(classify_duplicate)?;

        if result.rows_affected() == 0 {
            return Err(Error::UserNotRegistered);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::UserNotRegistered);
        }
        Ok(())
    }
}
