use tracing::{info, warn};

use crate::domain::Side;
use crate::trace_ctx;

/// Log a write rejected because the caller held a stale version.
pub fn stale_write(room_id: &str, expected_version: i32, actual_version: i32) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "ROOM_STALE_WRITE",
        %trace_id,
        room_id,
        expected_version,
        actual_version,
        "Optimistic lock conflict"
    );
}

/// Log a match being decided.
pub fn match_won(room_id: &str, champion: Side, rounds_played: u32) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "MATCH_WON",
        %trace_id,
        room_id,
        champion = champion.label(),
        rounds_played,
        "Team cleared A"
    );
}

/// Log a team being sent back to "2" after three A-fails.
pub fn team_demoted(room_id: &str, side: Side) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "TEAM_DEMOTED",
        %trace_id,
        room_id,
        side = side.label(),
        "Third A-fail, back to 2"
    );
}
