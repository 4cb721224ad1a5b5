use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::Channel;

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("The name of the channel must have at least alphanumeric character.")]
    EmptyName,
    #[error("There is no user with the provided id.")]
    OwnerNotFound,
    #[error("{0}")]
    NotFound(String),
    #[error("You are not authorized to perform this action.")]
    Forbidden,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Database manager error: {0}")]
    DatabaseManager(#[from] DatabaseError),
}

pub struct ChannelService {
    pool: PgPool,
}

impl ChannelService {
    pub async fn new() -> Result<Self, ChannelError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// Create a channel owned by `owner_id`.
    pub async fn create(&self, owner_id: Uuid, name: &str) -> Result<Channel, ChannelError> {
        if name.is_empty() {
            return Err(ChannelError::EmptyName);
        }

        if !self.owner_exists(owner_id).await? {
            return Err(ChannelError::OwnerNotFound);
        }

        let channel = sqlx::query_as::<_, Channel>(
            "INSERT INTO channels (owner_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(owner_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("created channel {} for user {}", channel.id, owner_id);
        Ok(channel)
    }

    pub async fn get(&self, id: Uuid) -> Result<Channel, ChannelError> {
        sqlx::query_as::<_, Channel>("SELECT * FROM channels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ChannelError::NotFound("Channel not found".to_string()))
    }

    /// List every channel owned by a user.
    ///
    /// An empty result is reported as NotFound. Debatable, but it is the
    /// API's long-standing contract for this listing.
    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Channel>, ChannelError> {
        let channels = sqlx::query_as::<_, Channel>(
            "SELECT * FROM channels WHERE owner_id = $1 ORDER BY created_at",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        if channels.is_empty() {
            return Err(ChannelError::NotFound("No channels found.".to_string()));
        }

        Ok(channels)
    }

    /// Ownership gate: load the channel and require `subject` to be its
    /// owner. Runs after session verification and before any mutation;
    /// the subject always comes from verified claims, never the request
    /// body.
    pub async fn authorize_owner(&self, id: Uuid, subject: Uuid) -> Result<Channel, ChannelError> {
        let channel = self.get(id).await?;

        if channel.owner_id != subject {
            return Err(ChannelError::Forbidden);
        }

        Ok(channel)
    }

    /// Rename a channel. Only the owner may do this.
    pub async fn update(&self, id: Uuid, caller_id: Uuid, name: &str) -> Result<Channel, ChannelError> {
        self.authorize_owner(id, caller_id).await?;

        if name.is_empty() {
            return Err(ChannelError::EmptyName);
        }

        // The row can vanish between the gate and this statement; that
        // window is tolerated and reported as NotFound.
        sqlx::query_as::<_, Channel>(
            "UPDATE channels SET name = $1, updated_at = now() WHERE id = $2 RETURNING *",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ChannelError::NotFound("Channel not found".to_string()))
    }

    /// Delete a channel. Returns false when there was nothing to delete,
    /// so repeat deletes are a no-op rather than an error.
    pub async fn delete(&self, id: Uuid, caller_id: Uuid) -> Result<bool, ChannelError> {
        match self.authorize_owner(id, caller_id).await {
            Ok(_) => {}
            Err(ChannelError::NotFound(_)) => return Ok(false),
            Err(e) => return Err(e),
        }

        let result = sqlx::query("DELETE FROM channels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn owner_exists(&self, owner_id: Uuid) -> Result<bool, ChannelError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0 > 0)
    }
}
