//! Stateless scoring: one round, no room.

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    apply_round, parse_ranks_for, score_round_for, MatchState, Positions, RoundTransition,
    RuleConfig, Side, TableSize,
};
use crate::errors::domain::DomainError;

/// A scored round: team 1's canonical positions and what the round did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredRound {
    pub positions: Positions,
    pub transition: RoundTransition,
}

/// Runs the full pipeline: parse, score, resolve A rules, advance levels.
#[derive(Debug, Clone, Default)]
pub struct ScoringService;

impl ScoringService {
    pub fn new() -> Self {
        Self
    }

    /// Score team 1's positions.
    pub fn score(
        &self,
        table_size: TableSize,
        ranks: &str,
        rules: &RuleConfig,
        state: &MatchState,
    ) -> Result<ScoredRound, DomainError> {
        self.score_for(table_size, Side::Team1, ranks, rules, state)
    }

    /// Score the positions reported by `side`. The result always carries
    /// team 1's positions.
    pub fn score_for(
        &self,
        table_size: TableSize,
        side: Side,
        ranks: &str,
        rules: &RuleConfig,
        state: &MatchState,
    ) -> Result<ScoredRound, DomainError> {
        rules.validate()?;
        let reported = parse_ranks_for(ranks, table_size)?;
        let outcome = score_round_for(table_size, side, &reported, rules);
        let transition = apply_round(state, outcome, rules.strict_a)?;
        let positions = match side {
            Side::Team1 => reported,
            Side::Team2 => reported.complement(table_size.max_rank()),
        };

        debug!(
            players = table_size.players(),
            reported_by = side.label(),
            positions = %positions,
            winner = ?transition.outcome.winner,
            upgrade = transition.upgrade,
            "Round scored"
        );

        Ok(ScoredRound {
            positions,
            transition,
        })
    }
}
