//! Match progression: applying a scored round to both teams' levels.

use serde::{Deserialize, Serialize};

use super::a_level::{resolve_a_level, AResolveInput, RoundLevel, TeamLevelState};
use super::outcome::RoundOutcome;
use super::rules::Side;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub teams: [TeamLevelState; 2],
    pub round_level: RoundLevel,
    pub rounds_played: u32,
    /// Side that cleared A; the match accepts no more rounds.
    pub champion: Option<Side>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(&self, side: Side) -> TeamLevelState {
        self.teams[side.index()]
    }

    pub fn is_finished(&self) -> bool {
        self.champion.is_some()
    }
}

/// Everything that happened when one round was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTransition {
    pub outcome: RoundOutcome,
    /// Levels granted to the winner after the A rules, before clamping at A.
    pub upgrade: u8,
    pub cleared_a: bool,
    pub demoted: bool,
    pub note: String,
    pub before: MatchState,
    pub after: MatchState,
}

/// Apply a scored round to the match.
///
/// The next round is played at the winner's new level. A drawn round
/// changes no levels and keeps the current round level.
pub fn apply_round(
    state: &MatchState,
    outcome: RoundOutcome,
    strict_a: bool,
) -> Result<RoundTransition, DomainError> {
    if let Some(champion) = state.champion {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Match already won by {}", champion.label()),
        ));
    }

    let before = *state;
    let mut after = *state;
    after.rounds_played += 1;

    let Some(winner_side) = outcome.winner else {
        let note = outcome.note.clone();
        return Ok(RoundTransition {
            outcome,
            upgrade: 0,
            cleared_a: false,
            demoted: false,
            note,
            before,
            after,
        });
    };

    let loser_side = winner_side.opponent();
    let resolution = resolve_a_level(AResolveInput {
        winner_side,
        winner: state.team(winner_side),
        loser: state.team(loser_side),
        round: state.round_level,
        strict: strict_a,
        base_delta: outcome.level_delta,
        base_note: outcome.note.clone(),
    });

    let winner = resolution.winner.advanced(resolution.upgrade);
    after.teams[winner_side.index()] = winner;
    after.teams[loser_side.index()] = resolution.loser;
    after.round_level = RoundLevel::owned_by(winner.level, winner_side);
    if resolution.cleared_a {
        after.champion = Some(winner_side);
    }

    Ok(RoundTransition {
        outcome,
        upgrade: resolution.upgrade,
        cleared_a: resolution.cleared_a,
        demoted: resolution.demoted,
        note: resolution.note,
        before,
        after,
    })
}
