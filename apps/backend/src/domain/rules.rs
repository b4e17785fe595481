//! Table sizes, sides and the caller-supplied rule tables.
//!
//! Everything here is plain immutable data handed to the outcome
//! calculator; presets live in `crate::config::rules`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    #[serde(rename = "t1")]
    Team1,
    #[serde(rename = "t2")]
    Team2,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Team1 => Side::Team2,
            Side::Team2 => Side::Team1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Team1 => 0,
            Side::Team2 => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Team1 => "team 1",
            Side::Team2 => "team 2",
        }
    }
}

/// Number of players at the table. Each side holds half the seats.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TableSize {
    Four,
    Six,
    Eight,
}

impl TableSize {
    pub fn players(self) -> u8 {
        match self {
            TableSize::Four => 4,
            TableSize::Six => 6,
            TableSize::Eight => 8,
        }
    }

    /// Finishing positions held by one side.
    pub fn need(self) -> usize {
        (self.players() / 2) as usize
    }

    /// Highest finishing position at this table.
    pub fn max_rank(self) -> u8 {
        self.players()
    }

    pub fn from_need(need: usize) -> Result<Self, DomainError> {
        match need {
            2 => Ok(TableSize::Four),
            3 => Ok(TableSize::Six),
            4 => Ok(TableSize::Eight),
            other => Err(DomainError::validation(
                ValidationKind::InvalidTableSize,
                format!("Positions per side must be 2, 3 or 4, got {other}"),
            )),
        }
    }
}

impl TryFrom<u8> for TableSize {
    type Error = DomainError;

    fn try_from(players: u8) -> Result<Self, Self::Error> {
        match players {
            4 => Ok(TableSize::Four),
            6 => Ok(TableSize::Six),
            8 => Ok(TableSize::Eight),
            other => Err(DomainError::validation(
                ValidationKind::InvalidTableSize,
                format!("Table size must be 4, 6 or 8 players, got {other}"),
            )),
        }
    }
}

impl From<TableSize> for u8 {
    fn from(size: TableSize) -> Self {
        size.players()
    }
}

/// Unordered pair of finishing positions, stored low-then-high.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PositionPair(u8, u8);

impl PositionPair {
    pub fn new(a: u8, b: u8) -> Self {
        if a <= b {
            PositionPair(a, b)
        } else {
            PositionPair(b, a)
        }
    }

    pub fn low(self) -> u8 {
        self.0
    }

    pub fn high(self) -> u8 {
        self.1
    }
}

/// Wire form of one pair rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairRuleEntry {
    pub positions: [u8; 2],
    pub levels: u8,
}

/// Level deltas for the 4-player game, keyed by a side's finishing pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PairRuleEntry>", into = "Vec<PairRuleEntry>")]
pub struct PairRules {
    deltas: BTreeMap<PositionPair, u8>,
}

impl PairRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, a: u8, b: u8, levels: u8) -> Self {
        self.deltas.insert(PositionPair::new(a, b), levels);
        self
    }

    pub fn get(&self, pair: PositionPair) -> Option<u8> {
        self.deltas.get(&pair).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PositionPair, u8)> + '_ {
        self.deltas.iter().map(|(pair, levels)| (*pair, *levels))
    }

    fn validate(&self) -> Result<(), DomainError> {
        for (pair, _) in self.iter() {
            if pair.low() == pair.high() || pair.low() < 1 || pair.high() > 4 {
                return Err(DomainError::validation(
                    ValidationKind::InvalidRules,
                    format!(
                        "Pair rule ({}, {}) must name two distinct positions in 1..=4",
                        pair.low(),
                        pair.high()
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl From<Vec<PairRuleEntry>> for PairRules {
    fn from(entries: Vec<PairRuleEntry>) -> Self {
        entries
            .into_iter()
            .fold(PairRules::new(), |rules, e| {
                rules.with(e.positions[0], e.positions[1], e.levels)
            })
    }
}

impl From<PairRules> for Vec<PairRuleEntry> {
    fn from(rules: PairRules) -> Self {
        rules
            .iter()
            .map(|(pair, levels)| PairRuleEntry {
                positions: [pair.low(), pair.high()],
                levels,
            })
            .collect()
    }
}

/// Points earned per finishing position; index 0 is first place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointTable(Vec<i32>);

impl PointTable {
    pub fn new(points: impl Into<Vec<i32>>) -> Self {
        Self(points.into())
    }

    /// Points for a 1-based position; positions without an entry score 0.
    pub fn points_for(&self, position: u8) -> i32 {
        position
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Summed in `i64`, so no table can overflow a team total.
    pub fn total(&self, positions: &[u8]) -> i64 {
        positions.iter().map(|&p| i64::from(self.points_for(p))).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate(&self, size: TableSize) -> Result<(), DomainError> {
        if self.0.len() > size.max_rank() as usize {
            return Err(DomainError::validation(
                ValidationKind::InvalidRules,
                format!(
                    "{}-player point table has {} entries, at most {} allowed",
                    size.players(),
                    self.0.len(),
                    size.max_rank()
                ),
            ));
        }
        if let Some(bad) = self.0.iter().find(|p| p.unsigned_abs() > MAX_POINTS) {
            return Err(DomainError::validation(
                ValidationKind::InvalidRules,
                format!(
                    "{}-player point value {bad} is outside -{MAX_POINTS}..={MAX_POINTS}",
                    size.players()
                ),
            ));
        }
        Ok(())
    }
}

/// Largest magnitude a single position may be worth.
pub const MAX_POINTS: u32 = 1_000_000;

/// Point-difference thresholds for a 1, 2 or 3 level win.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub g1: u32,
    pub g2: u32,
    pub g3: u32,
}

impl Thresholds {
    pub fn new(g1: u32, g2: u32, g3: u32) -> Self {
        Self { g1, g2, g3 }
    }

    /// Tier reached by an absolute point difference.
    pub fn tier(&self, abs_diff: u64) -> u8 {
        if abs_diff >= u64::from(self.g3) {
            3
        } else if abs_diff >= u64::from(self.g2) {
            2
        } else if abs_diff >= u64::from(self.g1) {
            1
        } else {
            0
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.g1 < self.g2 && self.g2 < self.g3 {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::InvalidRules,
                format!(
                    "Thresholds must be strictly ascending, got {}/{}/{}",
                    self.g1, self.g2, self.g3
                ),
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedRules {
    pub points: PointTable,
    pub thresholds: Thresholds,
}

/// Full rule set for one room or one scoring request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Winning side must hold first place to score an upgrade.
    #[serde(rename = "must1", default)]
    pub first_place_required: bool,
    /// Only a team playing its own A round may clear A.
    #[serde(rename = "strictA", default)]
    pub strict_a: bool,
    pub pair: PairRules,
    pub six: WeightedRules,
    pub eight: WeightedRules,
}

impl RuleConfig {
    /// Weighted tables for 6/8-player games; `None` at a 4-player table.
    pub fn weighted_for(&self, size: TableSize) -> Option<&WeightedRules> {
        match size {
            TableSize::Four => None,
            TableSize::Six => Some(&self.six),
            TableSize::Eight => Some(&self.eight),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.pair.validate()?;
        for (size, weighted) in [(TableSize::Six, &self.six), (TableSize::Eight, &self.eight)] {
            weighted.thresholds.validate()?;
            weighted.points.validate(size)?;
        }
        Ok(())
    }
}
