// Proptest generators for domain types.

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::domain::{Level, RoundLevel, Side, TableSize, TeamLevelState};

pub fn table_size() -> impl Strategy<Value = TableSize> {
    prop_oneof![
        Just(TableSize::Four),
        Just(TableSize::Six),
        Just(TableSize::Eight),
    ]
}

pub fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Team1), Just(Side::Team2)]
}

pub fn level() -> impl Strategy<Value = Level> {
    (0usize..Level::TRACK.len()).prop_map(|i| Level::TRACK[i])
}

pub fn team_state() -> impl Strategy<Value = TeamLevelState> {
    (level(), 0u8..3).prop_map(|(level, fails)| TeamLevelState {
        level,
        a_fail_count: if level.is_top() { fails } else { 0 },
    })
}

pub fn round_level() -> impl Strategy<Value = RoundLevel> {
    (level(), proptest::option::of(side())).prop_map(|(level, owner)| RoundLevel { level, owner })
}

/// One side's positions for a table, in arbitrary (seating) order.
pub fn seat_positions(size: TableSize) -> impl Strategy<Value = Vec<u8>> {
    let all: Vec<u8> = (1..=size.max_rank()).collect();
    subsequence(all, size.need()).prop_shuffle()
}

/// A table size together with one side's unordered positions.
pub fn sized_positions() -> impl Strategy<Value = (TableSize, Vec<u8>)> {
    table_size().prop_flat_map(|size| (Just(size), seat_positions(size)))
}

/// Separator runs the rank parser must accept between tokens.
pub fn separator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just(", ".to_string()),
        Just("-".to_string()),
        Just(" / ".to_string()),
        Just("\t".to_string()),
        "[ ,;/a-z]{1,3}",
    ]
}
