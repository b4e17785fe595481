//! Adapters for the storage layer.
//!
//! The hosted key-value store is stood in for by process-local maps; the
//! repository traits in `crate::repos` are the only seam services see.

pub mod players_mem;
pub mod rooms_mem;

pub use players_mem::PlayerRepoMem;
pub use rooms_mem::RoomRepoMem;
