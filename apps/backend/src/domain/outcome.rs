//! Round outcome: which side won and by how many levels.

use serde::{Deserialize, Serialize};

use super::ranks::Positions;
use super::rules::{PairRules, PositionPair, RuleConfig, Side, TableSize, WeightedRules};

/// Levels granted for a complete sweep, regardless of rule tables.
pub const SWEEP_LEVELS: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: Option<Side>,
    pub level_delta: u8,
    pub is_sweep: bool,
    pub note: String,
}

impl RoundOutcome {
    fn win(side: Side, level_delta: u8, note: impl Into<String>) -> Self {
        Self {
            winner: Some(side),
            level_delta,
            is_sweep: false,
            note: note.into(),
        }
    }

    fn sweep(side: Side) -> Self {
        Self {
            winner: Some(side),
            level_delta: SWEEP_LEVELS,
            is_sweep: true,
            note: "complete sweep".to_string(),
        }
    }

    fn draw(note: impl Into<String>) -> Self {
        Self {
            winner: None,
            level_delta: 0,
            is_sweep: false,
            note: note.into(),
        }
    }
}

/// 4-player scoring from team 1's finishing pair.
pub fn score_pair_mode(
    team1: &Positions,
    rules: &PairRules,
    first_place_required: bool,
) -> RoundOutcome {
    let team2 = team1.complement(TableSize::Four.max_rank());
    pair_outcome(Side::Team1, team1, &team2, rules, first_place_required)
}

fn pair_lookup(rules: &PairRules, positions: &Positions) -> u8 {
    match positions.as_slice() {
        [a, b] => rules.get(PositionPair::new(*a, *b)).unwrap_or(0),
        _ => 0,
    }
}

/// Pair scoring from the side whose positions were entered.
fn pair_outcome(
    side: Side,
    mine: &Positions,
    theirs: &Positions,
    rules: &PairRules,
    first_place_required: bool,
) -> RoundOutcome {
    let other = side.opponent();
    if first_place_required && mine.best() != Some(1) {
        return RoundOutcome::win(other, 0, "opponent wins (not first place)");
    }

    if mine.is_top_n(2) {
        return RoundOutcome::sweep(side);
    }
    if theirs.is_top_n(2) {
        return RoundOutcome::sweep(other);
    }

    let delta = pair_lookup(rules, mine);
    if delta > 0 {
        return RoundOutcome::win(side, delta, format!("{} up {delta}", side.label()));
    }

    // With must1 the entered side holds first, so the other pair cannot score.
    if !first_place_required {
        let delta = pair_lookup(rules, theirs);
        if delta > 0 {
            return RoundOutcome::win(other, delta, format!("{} up {delta}", other.label()));
        }
    }

    RoundOutcome::draw("draw, no level change")
}

/// 6/8-player scoring by summed position points.
pub fn score_weighted_mode(
    team: &Positions,
    opponent: &Positions,
    rules: &WeightedRules,
    first_place_required: bool,
) -> RoundOutcome {
    weighted_outcome(Side::Team1, team, opponent, rules, first_place_required)
}

fn weighted_outcome(
    side: Side,
    mine: &Positions,
    theirs: &Positions,
    rules: &WeightedRules,
    first_place_required: bool,
) -> RoundOutcome {
    let other = side.opponent();
    if first_place_required && !mine.contains(1) && theirs.contains(1) {
        return RoundOutcome::win(other, 0, "opponent wins (not first place)");
    }

    if mine.is_top_n(4) {
        return RoundOutcome::sweep(side);
    }
    if theirs.is_top_n(4) {
        return RoundOutcome::sweep(other);
    }

    let my_score = rules.points.total(mine.as_slice());
    let their_score = rules.points.total(theirs.as_slice());
    let diff = my_score - their_score;
    let margin = diff.unsigned_abs();
    let tier = rules.thresholds.tier(margin);

    let (winner, winner_score, loser_score) = match diff.signum() {
        1 => (side, my_score, their_score),
        -1 => (other, their_score, my_score),
        _ => return RoundOutcome::draw(format!("tie at {my_score} points")),
    };

    let note = if tier == 0 {
        format!("{} ahead by {margin} points, below threshold", winner.label())
    } else {
        format!(
            "{} up {tier} ({winner_score} vs {loser_score})",
            winner.label()
        )
    };
    RoundOutcome::win(winner, tier, note)
}

/// Score a round from team 1's positions; the opponent holds the rest.
pub fn score_round(size: TableSize, team1: &Positions, rules: &RuleConfig) -> RoundOutcome {
    score_round_for(size, Side::Team1, team1, rules)
}

/// Score a round from the positions of whichever side reported them.
///
/// `must1` is judged against the reporting side, so a side holding first place
/// should report its own positions.
pub fn score_round_for(
    size: TableSize,
    side: Side,
    positions: &Positions,
    rules: &RuleConfig,
) -> RoundOutcome {
    let others = positions.complement(size.max_rank());
    match rules.weighted_for(size) {
        None => pair_outcome(side, positions, &others, &rules.pair, rules.first_place_required),
        Some(weighted) => {
            weighted_outcome(side, positions, &others, weighted, rules.first_place_required)
        }
    }
}
