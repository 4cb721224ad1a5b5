use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{self, Claims, JwtError};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::User;
use crate::policy;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Email already exists.")]
    DuplicateEmail,
    #[error("Password must have the following requirements: 8-20 characters, at least one uppercase letter, one lowercase letter, one number, and one special character.")]
    InvalidPassword,
    #[error("Name must contain only alphabets, hyphens, and spaces.")]
    InvalidName,
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("{0}")]
    NotFound(String),
    #[error("Token error: {0}")]
    TokenIssue(#[from] JwtError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Database manager error: {0}")]
    DatabaseManager(#[from] DatabaseError),
}

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub async fn new() -> Result<Self, UserError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// Create a new account.
    ///
    /// Check order is contractual: email uniqueness, then password policy,
    /// then name policy. A request violating several rules reports the
    /// first failure in that order.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<User, UserError> {
        if self.email_taken(email).await? {
            return Err(UserError::DuplicateEmail);
        }

        if !policy::valid_password(password) {
            return Err(UserError::InvalidPassword);
        }

        if name.is_empty() || !policy::valid_name(name) {
            return Err(UserError::InvalidName);
        }

        let inserted = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password, name) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(email)
        .bind(password)
        .bind(name)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(user) => {
                tracing::info!("registered user {}", user.id);
                Ok(user)
            }
            // The UNIQUE constraint closes the read-then-insert race.
            Err(e) if is_unique_violation(&e) => Err(UserError::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }

    /// Verify credentials and issue a session token.
    ///
    /// Unknown email and wrong password collapse into the same
    /// `InvalidCredentials` signal.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), UserError> {
        let user = self
            .lookup_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if user.password != password {
            return Err(UserError::InvalidCredentials);
        }

        let token = auth::issue(&Claims::new(user.id, user.email.clone()))?;
        Ok((user, token))
    }

    /// Profile lookup by email.
    pub async fn find_by_email(&self, email: &str) -> Result<User, UserError> {
        self.lookup_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("User with email '{}' not found.", email)))
    }

    /// Delete an account and every channel it owns, as one unit of work.
    /// Returns false when the user row did not exist.
    pub async fn delete(&self, user_id: Uuid) -> Result<bool, UserError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM channels WHERE owner_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() > 0 {
            tracing::info!("deleted user {} and owned channels", user_id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn lookup_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn email_taken(&self, email: &str) -> Result<bool, UserError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0 > 0)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}
