//! Domain layer: pure scoring and level-progression logic.

pub mod a_level;
pub mod levels;
pub mod outcome;
pub mod progression;
pub mod ranks;
pub mod rules;
pub mod stats;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_a_level;
#[cfg(test)]
mod tests_outcome;

// Re-exports for ergonomics
pub use a_level::{resolve_a_level, AResolution, AResolveInput, RoundLevel, TeamLevelState};
pub use levels::{Level, LevelTrack};
pub use outcome::{score_pair_mode, score_round, score_round_for, score_weighted_mode, RoundOutcome};
pub use progression::{apply_round, MatchState, RoundTransition};
pub use ranks::{parse_ranks, parse_ranks_for, Positions};
pub use rules::{
    PairRules, PointTable, PositionPair, RuleConfig, Side, TableSize, Thresholds, WeightedRules,
};
pub use stats::PlayerStats;
