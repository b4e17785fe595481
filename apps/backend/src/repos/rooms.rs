//! Room repository trait and domain model.
//!
//! A room is one match between two sides: its rules, who sits where, the
//! current level state and the full round history. Every successful write
//! bumps `version` by one; writers pass the version they read.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{MatchState, Positions, RoundTransition, RuleConfig, Side, TableSize};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Player ids seated on each side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats {
    pub t1: Vec<String>,
    pub t2: Vec<String>,
}

impl Seats {
    pub fn side(&self, side: Side) -> &[String] {
        match side {
            Side::Team1 => &self.t1,
            Side::Team2 => &self.t2,
        }
    }

    /// Side the player sits on, if seated at all.
    pub fn side_of(&self, player_id: &str) -> Option<Side> {
        [Side::Team1, Side::Team2]
            .into_iter()
            .find(|side| self.side(*side).iter().any(|p| p == player_id))
    }

    pub fn is_empty(&self) -> bool {
        self.t1.is_empty() && self.t2.is_empty()
    }
}

/// One applied round, kept so it can be shown and undone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub number: u32,
    /// Team 1's finishing positions, whichever side reported them.
    pub positions: Positions,
    pub transition: RoundTransition,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Share code used to look the room up without its id.
    pub code: String,
    pub name: String,
    pub table_size: TableSize,
    pub rules: RuleConfig,
    pub seats: Seats,
    pub state: MatchState,
    pub history: Vec<RoundRecord>,
    pub version: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[async_trait]
pub trait RoomRepo: Send + Sync {
    /// Store a new room; `JoinCodeConflict` when its code is already taken.
    async fn insert(&self, room: Room) -> Result<Room, DomainError>;

    async fn find_by_id(&self, room_id: &str) -> Result<Option<Room>, DomainError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Room>, DomainError>;

    /// All rooms, oldest first.
    async fn list(&self) -> Result<Vec<Room>, DomainError>;

    /// Write `room` if the stored version still equals `expected_version`.
    ///
    /// The stored copy gets version `expected_version + 1` and a fresh
    /// `updated_at`; the stored copy is returned.
    async fn update(&self, room: Room, expected_version: i32) -> Result<Room, DomainError>;

    /// Delete with optimistic locking. Deleting a missing room is not an error.
    async fn delete(&self, room_id: &str, expected_version: i32) -> Result<(), DomainError>;
}

/// Find room by ID or return error if not found.
pub async fn require_room(repo: &dyn RoomRepo, room_id: &str) -> Result<Room, DomainError> {
    repo.find_by_id(room_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Room, format!("Room {room_id} not found")))
}
