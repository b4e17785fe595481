//! Player domain service.

use std::sync::Arc;

use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info};
use ulid::Ulid;

use super::names::{normalize_name, PLAYER_NAME_MAX};
use crate::domain::PlayerStats;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::logging::Redacted;
use crate::repos::players::{require_player, Player, PlayerRepo};
use crate::repos::rooms::RoomRepo;

/// A player's profile with statistics over every room they sit in.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStatsView {
    pub player: Player,
    pub stats: PlayerStats,
    pub win_rate: Option<f64>,
    /// Rooms the player is currently seated in.
    pub rooms: Vec<String>,
}

/// Player domain service.
pub struct PlayerService {
    players: Arc<dyn PlayerRepo>,
    rooms: Arc<dyn RoomRepo>,
}

impl PlayerService {
    pub fn new(players: Arc<dyn PlayerRepo>, rooms: Arc<dyn RoomRepo>) -> Self {
        Self { players, rooms }
    }

    pub async fn create(&self, name: &str) -> Result<Player, DomainError> {
        let name = normalize_name(name, PLAYER_NAME_MAX, "Player")?;
        let now = OffsetDateTime::now_utc();
        let player = Player {
            id: Ulid::new().to_string(),
            name,
            created_at: now,
            updated_at: now,
        };

        let player = self.players.insert(player).await?;
        info!(player_id = %player.id, name = %Redacted(&player.name), "Player created");
        Ok(player)
    }

    pub async fn get(&self, player_id: &str) -> Result<Player, DomainError> {
        require_player(self.players.as_ref(), player_id).await
    }

    pub async fn list(&self) -> Result<Vec<Player>, DomainError> {
        self.players.list().await
    }

    pub async fn rename(&self, player_id: &str, name: &str) -> Result<Player, DomainError> {
        let name = normalize_name(name, PLAYER_NAME_MAX, "Player")?;
        let mut player = require_player(self.players.as_ref(), player_id).await?;
        player.name = name;
        player.updated_at = OffsetDateTime::now_utc();

        let player = self.players.update(player).await?;
        debug!(player_id, name = %Redacted(&player.name), "Player renamed");
        Ok(player)
    }

    /// Delete a player who is not seated anywhere.
    pub async fn delete(&self, player_id: &str) -> Result<(), DomainError> {
        require_player(self.players.as_ref(), player_id).await?;

        let seated_in = self.seated_rooms(player_id).await?;
        if let Some(room_id) = seated_in.first() {
            return Err(DomainError::conflict(
                ConflictKind::PlayerSeated,
                format!("Player {player_id} is seated in room {room_id}; unseat them first"),
            ));
        }

        self.players.delete(player_id).await?;
        info!(player_id, "Player deleted");
        Ok(())
    }

    /// Aggregate statistics across every room the player is seated in.
    pub async fn stats(&self, player_id: &str) -> Result<PlayerStatsView, DomainError> {
        let player = require_player(self.players.as_ref(), player_id).await?;

        let mut stats = PlayerStats::default();
        let mut rooms = Vec::new();
        for room in self.rooms.list().await? {
            let Some(side) = room.seats.side_of(player_id) else {
                continue;
            };
            stats.record_match(
                side,
                room.history.iter().map(|r| &r.transition),
                room.state.champion,
            );
            rooms.push(room.id);
        }

        debug!(player_id, rooms = rooms.len(), "Player stats aggregated");
        Ok(PlayerStatsView {
            win_rate: stats.win_rate(),
            player,
            stats,
            rooms,
        })
    }

    async fn seated_rooms(&self, player_id: &str) -> Result<Vec<String>, DomainError> {
        Ok(self
            .rooms
            .list()
            .await?
            .into_iter()
            .filter(|room| room.seats.side_of(player_id).is_some())
            .map(|room| room.id)
            .collect())
    }
}
