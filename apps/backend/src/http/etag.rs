//! ETag helpers for optimistic concurrency control.
//!
//! Rooms are versioned; the version travels to clients as an ETag and
//! comes back on writes as `If-Match`.

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Generate an ETag for a room resource.
///
/// Format: `"room-{id}-v{version}"` (with quotes, as required by HTTP spec)
///
/// # Example
/// ```
/// # use guandan_backend::http::etag::room_etag;
/// let etag = room_etag("01J9ZK3M", 5);
/// assert_eq!(etag, r#""room-01J9ZK3M-v5""#);
/// ```
pub fn room_etag(id: &str, version: i32) -> String {
    format!(r#""room-{id}-v{version}""#)
}

/// Parse the lock version from a room ETag value.
///
/// Weak validators (`W/` prefix) are accepted; only the trailing
/// `-v{version}` is read.
///
/// # Errors
/// Returns `AppError::bad_request` with `ErrorCode::InvalidHeader` if the
/// ETag is malformed or the version is not an integer.
///
/// # Example
/// ```
/// # use guandan_backend::http::etag::parse_room_version_from_etag;
/// let version = parse_room_version_from_etag(r#""room-01J9ZK3M-v5""#).unwrap();
/// assert_eq!(version, 5);
/// ```
pub fn parse_room_version_from_etag(s: &str) -> Result<i32, AppError> {
    let s = s.trim();
    let s = s.strip_prefix("W/").unwrap_or(s).trim_matches('"');

    let body = s.strip_prefix("room-").ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("Invalid ETag format: expected \"room-{{id}}-v{{version}}\", got: \"{s}\""),
        )
    })?;

    let version_prefix = "-v";
    let version_start = body
        .rfind(version_prefix)
        .ok_or_else(|| {
            AppError::bad_request(
                ErrorCode::InvalidHeader,
                format!("Invalid ETag format: missing version marker, got: \"{s}\""),
            )
        })?
        + version_prefix.len();

    let version_str = &body[version_start..];
    version_str.parse::<i32>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("Invalid ETag format: version must be a valid integer, got: \"{version_str}\""),
        )
    })
}
