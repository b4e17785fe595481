//! Room HTTP routes.
//!
//! Every response that carries a room sets `ETag: "room-{id}-v{version}"`;
//! every mutation requires that value back in `If-Match`.

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{RuleConfig, Side, TableSize};
use crate::error::AppError;
use crate::extractors::{IfMatchVersion, RoomId, ValidatedJson};
use crate::http::etag::room_etag;
use crate::repos::rooms::{Room, Seats};
use crate::services::{NewRoom, RecordedRound};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    /// Table size in players: 4, 6 or 8
    pub players: u8,
    #[serde(default)]
    pub rules: Option<RuleConfig>,
    #[serde(default)]
    pub seats: Seats,
}

#[derive(Debug, Deserialize)]
pub struct RecordRoundRequest {
    /// Finishing positions of `side`, free-form
    pub ranks: String,
    /// `"t1"` (default) or `"t2"`
    #[serde(default)]
    pub side: Side,
}

#[derive(Debug, Serialize)]
struct RoomBody<'a> {
    #[serde(flatten)]
    room: &'a Room,
    finished: bool,
}

fn room_response(status: StatusCode, room: &Room) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((ETAG, room_etag(&room.id, room.version)))
        .json(RoomBody {
            room,
            finished: room.state.is_finished(),
        })
}

/// POST /api/rooms
async fn create_room(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateRoomRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let room = app_state
        .room_service()
        .create(NewRoom {
            name: req.name,
            table_size: TableSize::try_from(req.players)?,
            rules: req.rules,
            seats: req.seats,
        })
        .await?;
    Ok(room_response(StatusCode::CREATED, &room))
}

/// GET /api/rooms/{room_id}
///
/// Supports `If-None-Match`: a current ETag (or `*`) yields `304 Not Modified`.
async fn get_room(
    http_req: HttpRequest,
    room_id: RoomId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room = app_state.room_service().get(room_id.as_str()).await?;
    let etag_value = room_etag(&room.id, room.version);

    if let Some(if_none_match) = http_req.headers().get(IF_NONE_MATCH) {
        if let Ok(client_etag) = if_none_match.to_str() {
            let matches = client_etag.trim() == "*"
                || client_etag
                    .split(',')
                    .map(str::trim)
                    .any(|etag| etag == etag_value);

            if matches {
                return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
                    .insert_header((ETAG, etag_value))
                    .finish());
            }
        }
    }

    Ok(room_response(StatusCode::OK, &room))
}

/// GET /api/rooms/code/{code}
async fn get_room_by_code(
    code: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room = app_state.room_service().get_by_code(&code).await?;
    Ok(room_response(StatusCode::OK, &room))
}

/// DELETE /api/rooms/{room_id}
async fn delete_room(
    room_id: RoomId,
    expected: IfMatchVersion,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state
        .room_service()
        .delete(room_id.as_str(), expected.0)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/rooms/{room_id}/rules
async fn update_rules(
    room_id: RoomId,
    expected: IfMatchVersion,
    app_state: web::Data<AppState>,
    body: ValidatedJson<RuleConfig>,
) -> Result<HttpResponse, AppError> {
    let room = app_state
        .room_service()
        .update_rules(room_id.as_str(), expected.0, body.into_inner())
        .await?;
    Ok(room_response(StatusCode::OK, &room))
}

/// PUT /api/rooms/{room_id}/seats
async fn seat_players(
    room_id: RoomId,
    expected: IfMatchVersion,
    app_state: web::Data<AppState>,
    body: ValidatedJson<Seats>,
) -> Result<HttpResponse, AppError> {
    let room = app_state
        .room_service()
        .seat_players(room_id.as_str(), expected.0, body.into_inner())
        .await?;
    Ok(room_response(StatusCode::OK, &room))
}

/// POST /api/rooms/{room_id}/rounds
async fn record_round(
    room_id: RoomId,
    expected: IfMatchVersion,
    app_state: web::Data<AppState>,
    body: ValidatedJson<RecordRoundRequest>,
) -> Result<HttpResponse, AppError> {
    let RecordedRound { room, round } = app_state
        .room_service()
        .record_round_for(room_id.as_str(), expected.0, body.side, &body.ranks)
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((ETAG, room_etag(&room.id, room.version)))
        .json(serde_json::json!({
            "round": round,
            "room": RoomBody { room: &room, finished: room.state.is_finished() },
        })))
}

/// DELETE /api/rooms/{room_id}/rounds/last
async fn undo_last_round(
    room_id: RoomId,
    expected: IfMatchVersion,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room = app_state
        .room_service()
        .undo_last_round(room_id.as_str(), expected.0)
        .await?;
    Ok(room_response(StatusCode::OK, &room))
}

/// POST /api/rooms/{room_id}/reset
async fn reset_match(
    room_id: RoomId,
    expected: IfMatchVersion,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room = app_state
        .room_service()
        .reset(room_id.as_str(), expected.0)
        .await?;
    Ok(room_response(StatusCode::OK, &room))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_room))
        .route("/code/{code}", web::get().to(get_room_by_code))
        .route("/{room_id}", web::get().to(get_room))
        .route("/{room_id}", web::delete().to(delete_room))
        .route("/{room_id}/rules", web::put().to(update_rules))
        .route("/{room_id}/seats", web::put().to(seat_players))
        .route("/{room_id}/rounds", web::post().to(record_round))
        .route("/{room_id}/rounds/last", web::delete().to(undo_last_round))
        .route("/{room_id}/reset", web::post().to(reset_match));
}
