//! Application services: validation and orchestration over the repositories.

pub mod names;
pub mod players;
pub mod rooms;
pub mod scoring;

pub use players::{PlayerService, PlayerStatsView};
pub use rooms::{NewRoom, RecordedRound, RoomService};
pub use scoring::{ScoredRound, ScoringService};
