use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Room ID extracted from the `{room_id}` path parameter.
///
/// Only the ULID shape is checked here; existence is the service's call so
/// that a missing room and a stale version are reported consistently.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a ULID path segment, normalizing it to canonical upper case.
pub(crate) fn ulid_param(
    req: &HttpRequest,
    name: &str,
    code: ErrorCode,
    what: &str,
) -> Result<String, AppError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))?;

    Ulid::from_string(raw)
        .map(|id| id.to_string())
        .map_err(|_| AppError::bad_request(code, format!("Invalid {what} id: {raw}")))
}

impl FromRequest for RoomId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(ulid_param(req, "room_id", ErrorCode::InvalidRoomId, "room").map(RoomId))
    }
}
