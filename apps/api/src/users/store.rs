use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::User;
use crate::users::validation::validate_fields;

/// Data access contract for the user resource.
///
/// Handlers depend on this trait rather than on `PgPool` directly, so tests
/// can substitute an in-memory store with the same semantics.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns all users ordered by ascending id. An empty table is not an error.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    async fn get_user(&self, id: i32) -> Result<User, AppError>;

    /// Inserts a row; the store assigns `id` and `created_at`. A duplicate
    /// email surfaces as `Conflict` via the unique constraint, atomically
    /// with the insert.
    async fn create_user(&self, name: &str, email: &str) -> Result<User, AppError>;

    /// Replaces `name`/`email` on an existing row, leaving `created_at`
    /// untouched. An email colliding with a different row is `Conflict`.
    async fn update_user(&self, id: i32, name: &str, email: &str) -> Result<User, AppError>;

    async fn delete_user(&self, id: i32) -> Result<(), AppError>;

    /// Trivial round-trip query confirming store reachability. Reports
    /// `Unavailable` on any failure, never an unclassified error.
    async fn health_check(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed store over a bounded connection pool.
///
/// Every operation is a single statement, so no read-modify-write race is
/// introduced above what the store's own transactional semantics provide.
/// sqlx returns connections to the pool on every exit path.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users: Vec<User> =
            sqlx::query_as("SELECT id, name, email, created_at FROM users ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(users)
    }

    async fn get_user(&self, id: i32) -> Result<User, AppError> {
        let user: Option<User> =
            sqlx::query_as("SELECT id, name, email, created_at FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        user.ok_or_else(|| AppError::NotFound(format!("User with id {id} not found")))
    }

    async fn create_user(&self, name: &str, email: &str) -> Result<User, AppError> {
        // Fail fast on bad input; no round-trip is wasted on the store.
        validate_fields(name, email)?;

        let user: User = sqlx::query_as(
            "INSERT INTO users (name, email) VALUES ($1, $2) \
             RETURNING id, name, email, created_at",
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update_user(&self, id: i32, name: &str, email: &str) -> Result<User, AppError> {
        validate_fields(name, email)?;

        let user: Option<User> = sqlx::query_as(
            "UPDATE users SET name = $1, email = $2 WHERE id = $3 \
             RETURNING id, name, email, created_at",
        )
        .bind(name)
        .bind(email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        user.ok_or_else(|| AppError::NotFound(format!("User with id {id} not found")))
    }

    async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {id} not found")));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Unavailable(format!("Database is unreachable: {e}")))?;
        Ok(())
    }
}
