//! Repository traits for domain layer.

pub mod players;
pub mod rooms;

pub use players::{Player, PlayerRepo};
pub use rooms::{Room, RoomRepo, RoundRecord, Seats};
