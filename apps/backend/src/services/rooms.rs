//! Room service: match lifecycle on top of the room repository.
//!
//! Every mutation follows the same shape: load the room, check the caller's
//! expected version, change a copy, write it back through the repository's
//! version check.

use std::sync::Arc;

use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use ulid::Ulid;

use super::names::{normalize_name, ROOM_NAME_MAX};
use super::scoring::ScoringService;
use crate::domain::{MatchState, RuleConfig, Side, TableSize};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::logging::events;
use crate::logging::pii::redact_code;
use crate::repos::players::{require_player, PlayerRepo};
use crate::repos::rooms::{require_room, Room, RoomRepo, RoundRecord, Seats};
use crate::utils::share_code::{generate_share_code, normalize_share_code};

/// Attempts at drawing an unused share code before giving up.
const SHARE_CODE_ATTEMPTS: usize = 5;

/// Input for creating a room.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub table_size: TableSize,
    /// Falls back to the service defaults when absent.
    pub rules: Option<RuleConfig>,
    pub seats: Seats,
}

/// The room after a round was applied, and the record that was appended.
#[derive(Debug, Clone, Serialize)]
pub struct RecordedRound {
    pub room: Room,
    pub round: RoundRecord,
}

pub struct RoomService {
    rooms: Arc<dyn RoomRepo>,
    players: Arc<dyn PlayerRepo>,
    default_rules: RuleConfig,
    scoring: ScoringService,
}

impl RoomService {
    pub fn new(
        rooms: Arc<dyn RoomRepo>,
        players: Arc<dyn PlayerRepo>,
        default_rules: RuleConfig,
    ) -> Self {
        Self {
            rooms,
            players,
            default_rules,
            scoring: ScoringService::new(),
        }
    }

    pub async fn create(&self, new_room: NewRoom) -> Result<Room, DomainError> {
        let name = normalize_name(&new_room.name, ROOM_NAME_MAX, "Room")?;
        let rules = new_room.rules.unwrap_or_else(|| self.default_rules.clone());
        rules.validate()?;
        self.validate_seats(new_room.table_size, &new_room.seats)
            .await?;

        let now = OffsetDateTime::now_utc();
        let mut room = Room {
            id: Ulid::new().to_string(),
            code: String::new(),
            name,
            table_size: new_room.table_size,
            rules,
            seats: new_room.seats,
            state: MatchState::new(),
            history: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
        };

        let mut last_err = None;
        for attempt in 1..=SHARE_CODE_ATTEMPTS {
            room.code = generate_share_code();
            match self.rooms.insert(room.clone()).await {
                Ok(stored) => {
                    info!(
                        room_id = %stored.id,
                        code = %redact_code(&stored.code),
                        players = stored.table_size.players(),
                        "Room created"
                    );
                    return Ok(stored);
                }
                Err(e @ DomainError::Conflict(ConflictKind::JoinCodeConflict, _)) => {
                    warn!(attempt, "Share code collision, retrying");
                    last_err = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err.unwrap_or_else(|| {
            DomainError::conflict(
                ConflictKind::JoinCodeConflict,
                "Could not allocate a share code",
            )
        }))
    }

    pub async fn get(&self, room_id: &str) -> Result<Room, DomainError> {
        require_room(self.rooms.as_ref(), room_id).await
    }

    /// Look a room up by its share code, as typed by a person.
    pub async fn get_by_code(&self, code: &str) -> Result<Room, DomainError> {
        let not_found = || DomainError::not_found(NotFoundKind::Room, "No room with that share code");
        let code = normalize_share_code(code).ok_or_else(not_found)?;
        self.rooms.find_by_code(&code).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, room_id: &str, expected_version: i32) -> Result<(), DomainError> {
        let room = self.load_for_write(room_id, expected_version).await?;
        self.rooms.delete(&room.id, expected_version).await?;
        info!(room_id, "Room deleted");
        Ok(())
    }

    /// Replace the room's rules. Applies to rounds recorded from now on.
    pub async fn update_rules(
        &self,
        room_id: &str,
        expected_version: i32,
        rules: RuleConfig,
    ) -> Result<Room, DomainError> {
        rules.validate()?;
        let mut room = self.load_for_write(room_id, expected_version).await?;
        room.rules = rules;

        let room = self.write(room, expected_version).await?;
        debug!(room_id, version = room.version, "Room rules updated");
        Ok(room)
    }

    pub async fn seat_players(
        &self,
        room_id: &str,
        expected_version: i32,
        seats: Seats,
    ) -> Result<Room, DomainError> {
        let mut room = self.load_for_write(room_id, expected_version).await?;
        self.validate_seats(room.table_size, &seats).await?;
        room.seats = seats;

        let room = self.write(room, expected_version).await?;
        debug!(
            room_id,
            t1 = room.seats.t1.len(),
            t2 = room.seats.t2.len(),
            "Players seated"
        );
        Ok(room)
    }

    /// Score team 1's finishing positions and append the round.
    pub async fn record_round(
        &self,
        room_id: &str,
        expected_version: i32,
        ranks: &str,
    ) -> Result<RecordedRound, DomainError> {
        self.record_round_for(room_id, expected_version, Side::Team1, ranks)
            .await
    }

    /// Score the finishing positions reported by `side` and append the round.
    pub async fn record_round_for(
        &self,
        room_id: &str,
        expected_version: i32,
        side: Side,
        ranks: &str,
    ) -> Result<RecordedRound, DomainError> {
        let mut room = self.load_for_write(room_id, expected_version).await?;

        let scored =
            self.scoring
                .score_for(room.table_size, side, ranks, &room.rules, &room.state)?;
        let record = RoundRecord {
            number: room.history.len() as u32 + 1,
            positions: scored.positions,
            transition: scored.transition,
            recorded_at: OffsetDateTime::now_utc(),
        };
        room.state = record.transition.after;
        room.history.push(record.clone());

        let room = self.write(room, expected_version).await?;
        info!(
            room_id,
            round = record.number,
            winner = ?record.transition.outcome.winner,
            upgrade = record.transition.upgrade,
            note = %record.transition.note,
            "Round recorded"
        );
        if record.transition.demoted {
            if let Some(winner) = record.transition.outcome.winner {
                events::team_demoted(room_id, winner.opponent());
            }
        }
        if let Some(champion) = room.state.champion {
            events::match_won(room_id, champion, room.state.rounds_played);
        }

        Ok(RecordedRound {
            room,
            round: record,
        })
    }

    /// Drop the last round and restore the state from before it.
    pub async fn undo_last_round(
        &self,
        room_id: &str,
        expected_version: i32,
    ) -> Result<Room, DomainError> {
        let mut room = self.load_for_write(room_id, expected_version).await?;
        let record = room.history.pop().ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Round,
                format!("Room {room_id} has no rounds to undo"),
            )
        })?;
        room.state = record.transition.before;

        let room = self.write(room, expected_version).await?;
        info!(room_id, round = record.number, "Round undone");
        Ok(room)
    }

    /// Start the match over: both teams back to "2", history cleared.
    pub async fn reset(&self, room_id: &str, expected_version: i32) -> Result<Room, DomainError> {
        let mut room = self.load_for_write(room_id, expected_version).await?;
        room.state = MatchState::new();
        room.history.clear();

        let room = self.write(room, expected_version).await?;
        info!(room_id, "Match reset");
        Ok(room)
    }

    async fn load_for_write(
        &self,
        room_id: &str,
        expected_version: i32,
    ) -> Result<Room, DomainError> {
        let room = require_room(self.rooms.as_ref(), room_id).await?;
        if room.version != expected_version {
            events::stale_write(room_id, expected_version, room.version);
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Room was modified concurrently (expected version {}, actual version {}). Please refresh and retry.",
                    expected_version, room.version
                ),
            ));
        }
        Ok(room)
    }

    async fn write(&self, room: Room, expected_version: i32) -> Result<Room, DomainError> {
        let room_id = room.id.clone();
        self.rooms
            .update(room, expected_version)
            .await
            .inspect_err(|e| {
                if matches!(e, DomainError::Conflict(ConflictKind::OptimisticLock, _)) {
                    warn!(room_id = %room_id, expected_version, "Lost write race");
                }
            })
    }

    /// Each side holds at most half the table, every player exists and sits once.
    async fn validate_seats(&self, table_size: TableSize, seats: &Seats) -> Result<(), DomainError> {
        let per_side = table_size.need();
        for side in [Side::Team1, Side::Team2] {
            let seated = seats.side(side);
            if seated.len() > per_side {
                return Err(DomainError::validation(
                    ValidationKind::InvalidSeat,
                    format!(
                        "{} has {} players; a {}-player table seats {} per side",
                        side.label(),
                        seated.len(),
                        table_size.players(),
                        per_side
                    ),
                ));
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for player_id in seats.t1.iter().chain(seats.t2.iter()) {
            if seen.contains(&player_id.as_str()) {
                return Err(DomainError::conflict(
                    ConflictKind::SeatTaken,
                    format!("Player {player_id} is seated more than once"),
                ));
            }
            seen.push(player_id);
            require_player(self.players.as_ref(), player_id).await?;
        }
        Ok(())
    }
}
