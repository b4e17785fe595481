//! Rank parsing: free-form finishing positions into a canonical sorted set.
//!
//! Accepted forms for one side's positions:
//! - a digit string of exactly `need` characters, e.g. `"13"` or `"1256"`
//! - any tokens separated by non-digits, e.g. `"1 3"`, `"1,3"`, `"3/1"`

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::rules::TableSize;
use crate::errors::domain::{DomainError, ValidationKind};

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\D+").unwrap()
});

/// Sorted, duplicate-free finishing positions held by one side.
///
/// Ascending order is a canonical form, not seating order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Positions(Vec<u8>);

impl Positions {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, position: u8) -> bool {
        self.0.binary_search(&position).is_ok()
    }

    /// Best (lowest) finishing position.
    pub fn best(&self) -> Option<u8> {
        self.0.first().copied()
    }

    /// True when the set is exactly `1..=n`.
    pub fn is_top_n(&self, n: u8) -> bool {
        self.0.len() == n as usize && self.0.iter().copied().eq(1..=n)
    }

    /// Positions in `1..=max_rank` not held by this side.
    pub fn complement(&self, max_rank: u8) -> Positions {
        Positions((1..=max_rank).filter(|p| !self.contains(*p)).collect())
    }
}

impl fmt::Display for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u8::to_string).collect();
        f.write_str(&parts.join(","))
    }
}

/// Parse one side's finishing positions.
///
/// `need` is the number of positions per side (2, 3 or 4), which fixes the
/// table's highest position at `2 * need`.
pub fn parse_ranks(text: &str, need: usize) -> Result<Positions, DomainError> {
    let size = TableSize::from_need(need)?;
    parse_ranks_for(text, size)
}

/// Parse one side's finishing positions for a known table size.
pub fn parse_ranks_for(text: &str, size: TableSize) -> Result<Positions, DomainError> {
    let need = size.need();
    let max_rank = size.max_rank();
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyInput,
            "Enter the finishing positions",
        ));
    }

    let tokens: Vec<&str> = if trimmed.len() == need && trimmed.bytes().all(|b| b.is_ascii_digit())
    {
        (0..need).map(|i| &trimmed[i..i + 1]).collect()
    } else {
        SEPARATORS
            .split(trimmed)
            .filter(|t| !t.is_empty())
            .collect()
    };

    if tokens.len() != need {
        return Err(DomainError::validation(
            ValidationKind::WrongCount,
            format!("Expected {need} positions, got {}", tokens.len()),
        ));
    }

    let mut positions = Vec::with_capacity(need);
    for token in tokens {
        let position = token
            .parse::<u8>()
            .ok()
            .filter(|p| (1..=max_rank).contains(p))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::OutOfRange,
                    format!("Position {token} is outside 1..={max_rank}"),
                )
            })?;
        if positions.contains(&position) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateRank,
                format!("Position {position} appears more than once"),
            ));
        }
        positions.push(position);
    }

    positions.sort_unstable();
    Ok(Positions(positions))
}
