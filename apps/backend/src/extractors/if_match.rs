//! `If-Match` precondition for room mutations.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::IF_MATCH;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::http::etag::parse_room_version_from_etag;

/// Room version the client last saw, read from the `If-Match` header.
///
/// A missing header is 428 Precondition Required; an unparseable one is
/// 400 `INVALID_HEADER`. Whether the version is current is for the
/// service to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfMatchVersion(pub i32);

impl IfMatchVersion {
    pub fn from_request_headers(req: &HttpRequest) -> Result<Self, AppError> {
        let raw = req.headers().get(IF_MATCH).ok_or_else(|| {
            AppError::precondition_required(
                "If-Match header is required for this operation; send the room's ETag",
            )
        })?;

        let value = raw.to_str().map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidHeader, "If-Match header is not valid ASCII")
        })?;

        parse_room_version_from_etag(value).map(IfMatchVersion)
    }
}

impl FromRequest for IfMatchVersion {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_request_headers(req))
    }
}
