//! Stateless round scoring.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    MatchState, Positions, RoundLevel, RoundOutcome, RuleConfig, Side, TableSize, TeamLevelState,
};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct TeamsDto {
    #[serde(default)]
    pub t1: TeamLevelState,
    #[serde(default)]
    pub t2: TeamLevelState,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// Table size in players: 4, 6 or 8
    pub players: u8,
    /// Finishing positions of `side`, free-form
    pub ranks: String,
    /// Side reporting `ranks`; team 1 when absent
    #[serde(default)]
    pub side: Side,
    /// Full rule set; the server defaults when absent
    #[serde(default)]
    pub rules: Option<RuleConfig>,
    /// Override for `rules.must1`
    #[serde(default)]
    pub must1: Option<bool>,
    /// Override for `rules.strictA`
    #[serde(default, rename = "strictA")]
    pub strict_a: Option<bool>,
    #[serde(default)]
    pub teams: TeamsDto,
    /// Level the round is played at; defaults to team 1's level, unowned
    #[serde(default)]
    pub round_level: Option<RoundLevel>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub positions: Positions,
    pub outcome: RoundOutcome,
    pub upgrade: u8,
    pub cleared_a: bool,
    pub demoted: bool,
    pub note: String,
    pub teams: TeamsDto,
    pub next_round_level: RoundLevel,
    pub champion: Option<Side>,
}

/// POST /api/score
async fn score(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ScoreRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let table_size = TableSize::try_from(req.players)?;

    let mut rules = req.rules.unwrap_or_else(|| app_state.default_rules.clone());
    if let Some(must1) = req.must1 {
        rules.first_place_required = must1;
    }
    if let Some(strict_a) = req.strict_a {
        rules.strict_a = strict_a;
    }

    let state = MatchState {
        teams: [req.teams.t1, req.teams.t2],
        round_level: req.round_level.unwrap_or(RoundLevel {
            level: req.teams.t1.level,
            owner: None,
        }),
        rounds_played: 0,
        champion: None,
    };

    let scored = app_state
        .scoring_service()
        .score_for(table_size, req.side, &req.ranks, &rules, &state)?;
    debug!(note = %scored.transition.note, "Stateless score");

    let t = scored.transition;
    Ok(HttpResponse::Ok().json(ScoreResponse {
        positions: scored.positions,
        upgrade: t.upgrade,
        cleared_a: t.cleared_a,
        demoted: t.demoted,
        note: t.note,
        teams: TeamsDto {
            t1: t.after.teams[0],
            t2: t.after.teams[1],
        },
        next_round_level: t.after.round_level,
        champion: t.after.champion,
        outcome: t.outcome,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(score));
}
