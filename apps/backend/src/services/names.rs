//! Display-name normalization shared by players and rooms.

use unicode_normalization::UnicodeNormalization;

use crate::errors::domain::{DomainError, ValidationKind};

pub const PLAYER_NAME_MAX: usize = 32;
pub const ROOM_NAME_MAX: usize = 64;

/// NFKC-normalize, trim and collapse inner whitespace runs to one space.
///
/// Fails with `InvalidName` when the result is empty, longer than `max`
/// characters, or contains control characters.
pub fn normalize_name(input: &str, max: usize, what: &str) -> Result<String, DomainError> {
    let nfkc: String = input.nfkc().collect();
    let name = nfkc.split_whitespace().collect::<Vec<_>>().join(" ");

    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            format!("{what} name must not be empty"),
        ));
    }
    if name.chars().any(char::is_control) {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            format!("{what} name must not contain control characters"),
        ));
    }
    let len = name.chars().count();
    if len > max {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            format!("{what} name must be at most {max} characters, got {len}"),
        ));
    }
    Ok(name)
}
