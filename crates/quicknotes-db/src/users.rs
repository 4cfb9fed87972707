//! User repository implementation.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use quicknotes_core::{
    new_v7, CreateUserRequest, Error, Result, Role, User, UserRepository,
};

/// PostgreSQL implementation of UserRepository.
///
/// Email lookups are case-insensitive. Uniqueness is backed by a unique
/// index on `lower(email)`, so a concurrent duplicate sign-up fails at the
/// store even when the service-level existence pre-check passed.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Pool<Postgres>,
}

fn map_row_to_user(row: PgRow) -> Result<User> {
    let role: String = row.get("role");
    Ok(User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password: row.get("password"),
        role: Role::from_str(&role)?,
        created_at_utc: row.get("created_at_utc"),
        updated_at_utc: row.get("updated_at_utc"),
    })
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, req: CreateUserRequest) -> Result<User> {
        let user = User {
            id: new_v7(),
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
            created_at_utc: Utc::now(),
            updated_at_utc: Utc::now(),
        };

        let result = sqlx::query(
            "INSERT INTO users (id, name, email, password, role, created_at_utc, updated_at_utc)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.role.as_str())
        .bind(user.created_at_utc)
        .bind(user.updated_at_utc)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            // Unique index on lower(email): a concurrent identical sign-up
            // loses the race here rather than admitting a duplicate.
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                Error::BadRequest("User with email already exists".to_string()),
            ),
            Err(e) => Err(Error::Database(e)),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, email, password, role, created_at_utc, updated_at_utc
             FROM users WHERE lower(email) = lower($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        row.map(map_row_to_user).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE lower(email) = lower($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(exists)
    }
}
