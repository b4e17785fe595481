//! Special rules for rounds played at level "A".
//!
//! A team at "A" must win its own A round to clear the top of the track.
//! Three losses on its own A round send it back to "2".

use serde::{Deserialize, Serialize};

use super::levels::Level;
use super::rules::Side;

/// A-fails that trigger demotion back to the bottom of the track.
pub const A_FAIL_LIMIT: u8 = 3;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLevelState {
    pub level: Level,
    #[serde(default)]
    pub a_fail_count: u8,
}

impl TeamLevelState {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            a_fail_count: 0,
        }
    }

    /// Move up the track; the fail counter clears once the level leaves "A".
    pub fn advanced(self, steps: u8) -> Self {
        let level = self.level.advance(steps);
        Self {
            level,
            a_fail_count: if level.is_top() { self.a_fail_count } else { 0 },
        }
    }
}

/// Level a round is played at and the side whose level it is.
///
/// `owner: None` means no side has declared yet (first round of a match);
/// either side at the round's level then counts as playing its own round.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLevel {
    pub level: Level,
    #[serde(default)]
    pub owner: Option<Side>,
}

impl RoundLevel {
    pub fn owned_by(level: Level, owner: Side) -> Self {
        Self {
            level,
            owner: Some(owner),
        }
    }

    /// Whether `side`, currently at `state`, is playing its own round.
    pub fn is_own_round(&self, side: Side, state: &TeamLevelState) -> bool {
        state.level == self.level && self.owner.map_or(true, |o| o == side)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AResolveInput {
    pub winner_side: Side,
    pub winner: TeamLevelState,
    pub loser: TeamLevelState,
    pub round: RoundLevel,
    pub strict: bool,
    /// Delta from the outcome calculator.
    pub base_delta: u8,
    /// Note from the outcome calculator.
    pub base_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AResolution {
    pub winner: TeamLevelState,
    pub loser: TeamLevelState,
    pub upgrade: u8,
    pub cleared_a: bool,
    pub demoted: bool,
    pub note: String,
}

/// True when the A rules take part in resolving this round.
pub fn a_rules_apply(winner: &TeamLevelState, loser: &TeamLevelState, round: &RoundLevel) -> bool {
    round.level.is_top() && (winner.level.is_top() || loser.level.is_top())
}

/// Resolve a decided round where A rules may apply.
///
/// The returned winner state is not yet advanced; callers apply
/// `upgrade` with [`TeamLevelState::advanced`]. Loser demotion is
/// already reflected in the returned loser state.
pub fn resolve_a_level(input: AResolveInput) -> AResolution {
    let AResolveInput {
        winner_side,
        mut winner,
        mut loser,
        round,
        strict,
        base_delta,
        base_note,
    } = input;

    if !a_rules_apply(&winner, &loser, &round) {
        return AResolution {
            winner,
            loser,
            upgrade: base_delta,
            cleared_a: false,
            demoted: false,
            note: base_note,
        };
    }

    let mut upgrade = base_delta;
    let mut cleared_a = false;
    let mut win_note = base_note;

    if winner.level.is_top() {
        let own_round = round.is_own_round(winner_side, &winner);
        if !strict || own_round {
            upgrade = 1;
            cleared_a = true;
            winner.a_fail_count = 0;
            win_note = format!("{} clears A", winner_side.label());
        } else {
            upgrade = 0;
            win_note = format!(
                "{} won at A outside own A round, no level-up",
                winner_side.label()
            );
        }
    }

    let mut demoted = false;
    let mut fail_note = None;
    let loser_side = winner_side.opponent();
    if loser.level.is_top() && round.is_own_round(loser_side, &loser) {
        loser.a_fail_count = loser.a_fail_count.saturating_add(1);
        if loser.a_fail_count >= A_FAIL_LIMIT {
            loser = TeamLevelState::new(Level::BOTTOM);
            demoted = true;
            fail_note = Some(format!(
                "{} failed A {A_FAIL_LIMIT} times, back to {}",
                loser_side.label(),
                Level::BOTTOM
            ));
        } else {
            fail_note = Some(format!(
                "{} A-fail {}/{A_FAIL_LIMIT}",
                loser_side.label(),
                loser.a_fail_count
            ));
        }
    }

    let note = match fail_note {
        Some(fail) if !win_note.is_empty() => format!("{win_note}; {fail}"),
        Some(fail) => fail,
        None => win_note,
    };

    AResolution {
        winner,
        loser,
        upgrade,
        cleared_a,
        demoted,
        note,
    }
}
