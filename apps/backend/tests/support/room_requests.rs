//! Request helpers for the room endpoints.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::IF_MATCH;
use actix_web::{test, Error};
use serde_json::{json, Value};

use crate::common::etag_of;

/// POST /api/rooms, asserting 201. Returns the body and the ETag.
pub async fn create_room<S>(app: &S, players: u8) -> (Value, String)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/rooms")
        .set_json(json!({ "name": "Friday table", "players": players }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let etag = etag_of(&resp);
    (test::read_body_json(resp).await, etag)
}

/// POST /api/rooms/{id}/rounds with the given If-Match value.
pub async fn post_round<S>(app: &S, room_id: &str, if_match: &str, ranks: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri(&format!("/api/rooms/{room_id}/rounds"))
        .insert_header((IF_MATCH, if_match))
        .set_json(json!({ "ranks": ranks }))
        .to_request();
    test::call_service(app, req).await
}

/// Record a round that must succeed; returns the body and the new ETag.
pub async fn record_round<S>(app: &S, room_id: &str, if_match: &str, ranks: &str) -> (Value, String)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = post_round(app, room_id, if_match, ranks).await;
    assert_eq!(resp.status().as_u16(), 201, "recording {ranks:?}");
    let etag = etag_of(&resp);
    (test::read_body_json(resp).await, etag)
}
