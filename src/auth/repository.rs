// Database repository for the users table

use sqlx::PgPool;

use crate::auth::{
    error::AuthError,
    models::{Role, User, UserProfile},
};
use crate::query::SqlParam;

/// Build the parameterized UPDATE for a partial profile change.
///
/// Only supplied fields appear in the SET list; returns `None` when nothing
/// was supplied. Kept as a pure function so the clause assembly is testable
/// without a database.
pub fn build_profile_update(
    user_id: i32,
    username: Option<&str>,
    email: Option<&str>,
    password_hash: Option<&str>,
) -> Option<(String, Vec<SqlParam>)> {
    let mut assignments = Vec::new();
    let mut params = Vec::new();

    if let Some(username) = username {
        assignments.push(format!("username = ${}", params.len() + 1));
        params.push(SqlParam::Text(username.to_string()));
    }
    if let Some(email) = email {
        assignments.push(format!("email = ${}", params.len() + 1));
        params.push(SqlParam::Text(email.to_string()));
    }
    if let Some(password_hash) = password_hash {
        assignments.push(format!("password_hash = ${}", params.len() + 1));
        params.push(SqlParam::Text(password_hash.to_string()));
    }

    if assignments.is_empty() {
        return None;
    }

    let query = format!(
        "UPDATE users SET {} WHERE user_id = ${} RETURNING user_id, username, email, role",
        assignments.join(", "),
        params.len() + 1
    );
    params.push(SqlParam::Int(user_id));

    Some((query, params))
}

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user. A duplicate email trips the unique index and is
    /// surfaced as a distinct error instead of a generic 500.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash, role) VALUES ($1, $2, $3, $4) \
             RETURNING user_id, username, email, password_hash, role",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AuthError::EmailAlreadyExists;
                }
            }
            AuthError::Database(e.to_string())
        })
    }

    /// Find a user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        sqlx::query_as::<_, User>(
            "SELECT user_id, username, email, password_hash, role FROM users \
             WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))
    }

    /// Fetch the profile view of a user
    pub async fn find_profile(&self, user_id: i32) -> Result<Option<UserProfile>, AuthError> {
        sqlx::query_as::<_, UserProfile>(
            "SELECT user_id, username, email, role FROM users WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))
    }

    /// Apply a partial profile update; fields passed as `None` are untouched.
    /// Returns the updated profile, or `ProfileNotFound` if the user row is
    /// gone.
    pub async fn update_profile(
        &self,
        user_id: i32,
        username: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<UserProfile, AuthError> {
        let (sql, params) = build_profile_update(user_id, username, email, password_hash)
            .ok_or_else(|| AuthError::Validation("No fields to update".to_string()))?;

        let mut query = sqlx::query_as::<_, UserProfile>(&sql);
        for param in &params {
            query = match param {
                SqlParam::Int(v) => query.bind(*v),
                SqlParam::Text(s) => query.bind(s.clone()),
            };
        }

        query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AuthError::EmailAlreadyExists;
                    }
                }
                AuthError::Database(e.to_string())
            })?
            .ok_or(AuthError::ProfileNotFound)
    }
}
