use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use super::room_id::ulid_param;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Player ID extracted from the `{player_id}` path parameter.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for PlayerId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(
            ulid_param(req, "player_id", ErrorCode::InvalidPlayerId, "player").map(PlayerId),
        )
    }
}
