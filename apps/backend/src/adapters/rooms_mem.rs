//! In-memory adapter for room repository.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use time::OffsetDateTime;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::rooms::{Room, RoomRepo};

/// DashMap implementation of RoomRepo.
#[derive(Debug, Default)]
pub struct RoomRepoMem {
    rooms: DashMap<String, Room>,
    /// share code -> room id
    codes: DashMap<String, String>,
}

impl RoomRepoMem {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_mismatch(room_id: &str, expected: i32, actual: i32) -> DomainError {
    DomainError::conflict(
        ConflictKind::OptimisticLock,
        format!(
            "Room {room_id} lock version mismatch: expected {expected}, but room has version {actual}"
        ),
    )
}

#[async_trait]
impl RoomRepo for RoomRepoMem {
    async fn insert(&self, room: Room) -> Result<Room, DomainError> {
        match self.codes.entry(room.code.clone()) {
            Entry::Occupied(_) => {
                return Err(DomainError::conflict(
                    ConflictKind::JoinCodeConflict,
                    format!("Share code {} already in use", room.code),
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(room.id.clone());
            }
        }
        self.rooms.insert(room.id.clone(), room.clone());
        Ok(room)
    }

    async fn find_by_id(&self, room_id: &str) -> Result<Option<Room>, DomainError> {
        Ok(self.rooms.get(room_id).map(|r| r.value().clone()))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Room>, DomainError> {
        let Some(room_id) = self.codes.get(code).map(|id| id.value().clone()) else {
            return Ok(None);
        };
        self.find_by_id(&room_id).await
    }

    async fn list(&self) -> Result<Vec<Room>, DomainError> {
        let mut rooms: Vec<Room> = self.rooms.iter().map(|r| r.value().clone()).collect();
        rooms.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(rooms)
    }

    async fn update(&self, mut room: Room, expected_version: i32) -> Result<Room, DomainError> {
        let mut stored = self.rooms.get_mut(&room.id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Room, format!("Room {} not found", room.id))
        })?;

        if stored.version != expected_version {
            return Err(lock_mismatch(&room.id, expected_version, stored.version));
        }

        room.version = expected_version + 1;
        room.updated_at = OffsetDateTime::now_utc();
        *stored = room.clone();
        Ok(room)
    }

    async fn delete(&self, room_id: &str, expected_version: i32) -> Result<(), DomainError> {
        let removed = self
            .rooms
            .remove_if(room_id, |_, room| room.version == expected_version);

        match removed {
            Some((_, room)) => {
                self.codes.remove(&room.code);
                Ok(())
            }
            None => match self.rooms.get(room_id) {
                Some(room) => Err(lock_mismatch(room_id, expected_version, room.version)),
                // Room doesn't exist - that's fine for delete (idempotent)
                None => Ok(()),
            },
        }
    }
}
