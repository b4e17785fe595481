//! Per-player statistics aggregated from match histories.

use serde::{Deserialize, Serialize};

use super::progression::RoundTransition;
use super::rules::Side;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub matches_played: u32,
    pub matches_won: u32,
    pub rounds_played: u32,
    pub rounds_won: u32,
    pub rounds_drawn: u32,
    pub sweeps: u32,
    pub levels_gained: u32,
    pub a_fails: u32,
    pub demotions: u32,
}

impl PlayerStats {
    /// Fold one match, seen from the side the player sat on.
    pub fn record_match<'a, I>(&mut self, side: Side, transitions: I, champion: Option<Side>)
    where
        I: IntoIterator<Item = &'a RoundTransition>,
    {
        self.matches_played += 1;
        if champion == Some(side) {
            self.matches_won += 1;
        }

        for t in transitions {
            self.rounds_played += 1;
            match t.outcome.winner {
                None => self.rounds_drawn += 1,
                Some(winner) if winner == side => {
                    self.rounds_won += 1;
                    if t.outcome.is_sweep {
                        self.sweeps += 1;
                    }
                    let from = t.before.team(side).level.index();
                    let to = t.after.team(side).level.index();
                    self.levels_gained += to.saturating_sub(from) as u32;
                    // Clearing A is a step off the top of the track.
                    if t.cleared_a {
                        self.levels_gained += 1;
                    }
                }
                Some(_) => {
                    let before = t.before.team(side);
                    let after = t.after.team(side);
                    if t.demoted {
                        self.a_fails += 1;
                        self.demotions += 1;
                    } else if after.a_fail_count > before.a_fail_count {
                        self.a_fails += 1;
                    }
                }
            }
        }
    }

    /// Share of decided rounds won, `None` before any decided round.
    pub fn win_rate(&self) -> Option<f64> {
        let decided = self.rounds_played - self.rounds_drawn;
        (decided > 0).then(|| f64::from(self.rounds_won) / f64::from(decided))
    }
}
