//! Player HTTP routes.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::{PlayerId, ValidatedJson};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlayerNameRequest {
    pub name: String,
}

/// GET /api/players
async fn list_players(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let players = app_state.player_service().list().await?;
    Ok(HttpResponse::Ok().json(players))
}

/// POST /api/players
async fn create_player(
    app_state: web::Data<AppState>,
    body: ValidatedJson<PlayerNameRequest>,
) -> Result<HttpResponse, AppError> {
    let player = app_state.player_service().create(&body.name).await?;
    Ok(HttpResponse::Created().json(player))
}

/// GET /api/players/{player_id}
async fn get_player(
    player_id: PlayerId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player = app_state.player_service().get(player_id.as_str()).await?;
    Ok(HttpResponse::Ok().json(player))
}

/// PUT /api/players/{player_id}
async fn rename_player(
    player_id: PlayerId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<PlayerNameRequest>,
) -> Result<HttpResponse, AppError> {
    let player = app_state
        .player_service()
        .rename(player_id.as_str(), &body.name)
        .await?;
    Ok(HttpResponse::Ok().json(player))
}

/// DELETE /api/players/{player_id}
async fn delete_player(
    player_id: PlayerId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state
        .player_service()
        .delete(player_id.as_str())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/players/{player_id}/stats
async fn player_stats(
    player_id: PlayerId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = app_state
        .player_service()
        .stats(player_id.as_str())
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_players))
        .route("", web::post().to(create_player))
        .route("/{player_id}", web::get().to(get_player))
        .route("/{player_id}", web::put().to(rename_player))
        .route("/{player_id}", web::delete().to(delete_player))
        .route("/{player_id}/stats", web::get().to(player_stats));
}
