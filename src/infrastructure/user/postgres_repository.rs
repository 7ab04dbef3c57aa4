//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
///
/// The unique index on `users(email)` is the authoritative guard against
/// concurrent duplicate registrations; a violation surfaces as a
/// `Conflict`, everything else as a `Storage` error.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, activation_token,
                               active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id())
        .bind(user.username())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.activation_token())
        .bind(user.is_active())
        .bind(user.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!("E-mail '{}' already exists", user.email()))
            } else {
                DomainError::storage(format!("Failed to create user: {}", e))
            }
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, activation_token, active, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by email: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count users: {}", e)))?;

        let count: i64 = row
            .try_get(0)
            .map_err(|e| DomainError::storage(format!("Failed to decode user count: {}", e)))?;

        Ok(usize::try_from(count).unwrap_or(0))
    }

    async fn truncate(&self) -> Result<(), DomainError> {
        sqlx::query("TRUNCATE TABLE users")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to truncate users: {}", e)))?;

        Ok(())
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let decode = |e: sqlx::Error| DomainError::storage(format!("Failed to decode user row: {}", e));

    Ok(User::from_parts(
        row.try_get("id").map_err(decode)?,
        row.try_get("username").map_err(decode)?,
        row.try_get("email").map_err(decode)?,
        row.try_get("password_hash").map_err(decode)?,
        row.try_get("activation_token").map_err(decode)?,
        row.try_get("active").map_err(decode)?,
        row.try_get("created_at").map_err(decode)?,
    ))
}
