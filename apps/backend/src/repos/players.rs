//! Player repository trait and domain model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::errors::domain::{DomainError, NotFoundKind};

/// A named player profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn insert(&self, player: Player) -> Result<Player, DomainError>;

    async fn find_by_id(&self, player_id: &str) -> Result<Option<Player>, DomainError>;

    /// All players, oldest first.
    async fn list(&self) -> Result<Vec<Player>, DomainError>;

    /// Replace the stored player; `NotFound` when it no longer exists.
    async fn update(&self, player: Player) -> Result<Player, DomainError>;

    /// Returns whether a player was removed.
    async fn delete(&self, player_id: &str) -> Result<bool, DomainError>;
}

/// Find player by ID or return error if not found.
pub async fn require_player(
    repo: &dyn PlayerRepo,
    player_id: &str,
) -> Result<Player, DomainError> {
    repo.find_by_id(player_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
    })
}
