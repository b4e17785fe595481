//! Rule presets and rules-file loading.
//!
//! Rooms and scoring requests that do not carry their own rules fall back to
//! the set built here: the standard presets, or the JSON file named by
//! `GUANDAN_RULES_FILE` when that variable is set.

use std::env;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::{PairRules, PointTable, RuleConfig, Thresholds, WeightedRules};
use crate::error::AppError;

pub const RULES_FILE_ENV: &str = "GUANDAN_RULES_FILE";

/// The standard tables: pair deltas for four players, point tables and
/// thresholds for six and eight.
pub fn standard_rules() -> RuleConfig {
    RuleConfig {
        first_place_required: false,
        strict_a: false,
        pair: PairRules::new().with(1, 2, 3).with(1, 3, 2).with(1, 4, 1),
        six: WeightedRules {
            points: PointTable::new(vec![5, 4, 3, 2, 1, 0]),
            thresholds: Thresholds::new(1, 4, 7),
        },
        eight: WeightedRules {
            points: PointTable::new(vec![7, 6, 5, 4, 3, 2, 1, 0]),
            thresholds: Thresholds::new(1, 6, 11),
        },
    }
}

/// Read and validate a JSON rule set.
pub fn load_rules_file(path: &Path) -> Result<RuleConfig, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::config(format!("Cannot read rules file {}: {e}", path.display()))
    })?;

    let rules: RuleConfig = serde_json::from_str(&raw).map_err(|e| {
        AppError::config(format!("Rules file {} is not valid: {e}", path.display()))
    })?;

    rules
        .validate()
        .map_err(|e| AppError::config(format!("Rules file {}: {e}", path.display())))?;

    Ok(rules)
}

/// Rules from `GUANDAN_RULES_FILE`, or the standard presets when unset.
pub fn rules_from_env() -> Result<RuleConfig, AppError> {
    match env::var(RULES_FILE_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            let rules = load_rules_file(Path::new(path.trim()))?;
            info!(path = %path.trim(), "Loaded rules file");
            Ok(rules)
        }
        _ => Ok(standard_rules()),
    }
}
