//! Soft/medium/hard recommendation for a rider weight.

use crate::pair::BushingPair;
use crate::table::{DuroTable, DURO_TABLE};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub soft: BushingPair,
    pub medium: BushingPair,
    pub hard: BushingPair,
}

impl Recommendation {
    /// Pairs in display order with their names.
    pub fn named(&self) -> [(&'static str, BushingPair); 3] {
        [
            ("soft", self.soft),
            ("medium", self.medium),
            ("hard", self.hard),
        ]
    }
}

/// Recommendation against the process-wide table.
pub fn recommend(weight: i32) -> Recommendation {
    recommend_with(&DURO_TABLE, weight)
}

/// Recommendation against an explicit table.
///
/// `medium` is always the mapped pair for `weight`. If that pair is missing
/// from `table`, the lookup index becomes `-1` for weights below the table's
/// range and `len` otherwise, so soft and hard both clamp to the nearest end.
///
/// # Panics
/// Panics if `table` is empty.
pub fn recommend_with(table: &DuroTable, weight: i32) -> Recommendation {
    assert!(!table.is_empty(), "Cannot recommend from an empty table");

    let medium = BushingPair::for_weight(weight);
    let len = table.len() as isize;

    let pair_index = match table.position(&medium) {
        Some(idx) => idx as isize,
        None if weight < *table.weights().start() => {
            warn!(
                "Pair {:?} for {}kg not in table, falling back to softest entry",
                medium, weight
            );
            -1
        }
        None => {
            warn!(
                "Pair {:?} for {}kg not in table, falling back to hardest entry",
                medium, weight
            );
            len
        }
    };

    let soft_idx = (pair_index - 1).clamp(0, len - 1) as usize;
    let hard_idx = (pair_index + 1).clamp(0, len - 1) as usize;
    debug!(
        "{}kg -> table index {} (soft {}, hard {})",
        weight, pair_index, soft_idx, hard_idx
    );

    Recommendation {
        soft: table.as_slice()[soft_idx],
        medium,
        hard: table.as_slice()[hard_idx],
    }
}
