// Every error leaves the server as RFC 7807 problem details carrying the
// request's trace id.

use actix_web::http::header::IF_MATCH;
use actix_web::test;

use crate::common::{assert_problem_details_contains, assert_problem_details_structure};
use crate::support::app_builder::create_test_app;
use crate::support::build_test_state;

#[actix_web::test]
async fn unknown_room_is_room_not_found() {
    let app = create_test_app(build_test_state())
        .with_prod_routes()
        .build()
        .await;

    let id = ulid::Ulid::new().to_string();
    let req = test::TestRequest::get()
        .uri(&format!("/api/rooms/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 404, "ROOM_NOT_FOUND", &format!("Room {id} not found"))
        .await;
}

#[actix_web::test]
async fn malformed_room_id_is_bad_request() {
    let app = create_test_app(build_test_state())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/api/rooms/not-a-ulid")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 400, "INVALID_ROOM_ID", "Invalid room id: not-a-ulid")
        .await;
}

#[actix_web::test]
async fn malformed_player_id_is_bad_request() {
    let app = create_test_app(build_test_state())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/api/players/42")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_contains(resp, 400, "INVALID_PLAYER_ID", "Invalid player id: 42").await;
}

#[actix_web::test]
async fn garbage_if_match_is_invalid_header() {
    let app = create_test_app(build_test_state())
        .with_prod_routes()
        .build()
        .await;

    let id = ulid::Ulid::new().to_string();
    let req = test::TestRequest::delete()
        .uri(&format!("/api/rooms/{id}"))
        .insert_header((IF_MATCH, "\"game-1-v2\""))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_contains(resp, 400, "INVALID_HEADER", "Invalid ETag format").await;
}

#[actix_web::test]
async fn trace_id_header_is_echoed_on_success_too() {
    let app = create_test_app(build_test_state())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!trace_id.is_empty());
}
