//! In-memory adapter for player repository.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::players::{Player, PlayerRepo};

/// DashMap implementation of PlayerRepo.
#[derive(Debug, Default)]
pub struct PlayerRepoMem {
    players: DashMap<String, Player>,
}

impl PlayerRepoMem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepo for PlayerRepoMem {
    async fn insert(&self, player: Player) -> Result<Player, DomainError> {
        self.players.insert(player.id.clone(), player.clone());
        Ok(player)
    }

    async fn find_by_id(&self, player_id: &str) -> Result<Option<Player>, DomainError> {
        Ok(self.players.get(player_id).map(|p| p.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Player>, DomainError> {
        let mut players: Vec<Player> = self.players.iter().map(|p| p.value().clone()).collect();
        players.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(players)
    }

    async fn update(&self, player: Player) -> Result<Player, DomainError> {
        let mut stored = self.players.get_mut(&player.id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {} not found", player.id),
            )
        })?;
        *stored = player.clone();
        Ok(player)
    }

    async fn delete(&self, player_id: &str) -> Result<bool, DomainError> {
        Ok(self.players.remove(player_id).is_some())
    }
}
