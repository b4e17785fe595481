//! Replays a whole match file through the scoring engine.

use std::path::Path;

use guandan_backend::domain::{MatchState, RoundLevel, RoundTransition, RuleConfig, Side, TableSize};
use guandan_backend::services::ScoringService;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct ReplayFile {
    pub table_size: TableSize,
    /// Overrides the rules given on the command line.
    #[serde(default)]
    pub rules: Option<RuleConfig>,
    /// Team 1's positions, one entry per round.
    pub rounds: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReplaySummary {
    pub rounds: Vec<RoundTransition>,
    pub final_state: MatchState,
    /// Rounds listed after the match was already won.
    pub ignored: usize,
}

pub fn describe_round(round: &RoundLevel) -> String {
    match round.owner {
        Some(side) => format!("round at {} ({})", round.level, side.label()),
        None => format!("round at {}", round.level),
    }
}

pub fn replay(file: &ReplayFile, rules: &RuleConfig) -> Result<ReplaySummary, String> {
    let scoring = ScoringService::new();
    let mut state = MatchState::new();
    let mut rounds = Vec::with_capacity(file.rounds.len());

    for (i, ranks) in file.rounds.iter().enumerate() {
        if state.is_finished() {
            let ignored = file.rounds.len() - i;
            warn!(ignored, "Match already won; remaining rounds ignored");
            return Ok(ReplaySummary {
                rounds,
                final_state: state,
                ignored,
            });
        }
        let scored = scoring
            .score(file.table_size, ranks, rules, &state)
            .map_err(|e| format!("round {}: {e}", i + 1))?;
        state = scored.transition.after;
        rounds.push(scored.transition);
    }

    info!(rounds = rounds.len(), "Replay finished");
    Ok(ReplaySummary {
        rounds,
        final_state: state,
        ignored: 0,
    })
}

pub fn load_replay_file(path: &Path) -> Result<ReplayFile, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| format!("invalid replay file {}: {e}", path.display()))
}

pub fn run(path: &Path, rules: RuleConfig, json: bool) -> Result<(), String> {
    let file = load_replay_file(path)?;
    let rules = file.rules.clone().unwrap_or(rules);

    let summary = replay(&file, &rules)?;

    if json {
        let out = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for (n, t) in summary.rounds.iter().enumerate() {
        println!(
            "#{:<3} {:<28} Team 1 {:>2}  Team 2 {:>2}",
            n + 1,
            t.note,
            t.after.team(Side::Team1).level,
            t.after.team(Side::Team2).level,
        );
    }
    match summary.final_state.champion {
        Some(side) => println!("🏆 {} wins after {} rounds", side.label(), summary.final_state.rounds_played),
        None => println!("{}", describe_round(&summary.final_state.round_level)),
    }
    if summary.ignored > 0 {
        println!("({} rounds after the win were ignored)", summary.ignored);
    }
    Ok(())
}
