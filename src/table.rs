//! Ordered table of every distinct bushing pair the mapping can produce.
//!
//! The table is built once from weights `0..TABLE_WEIGHT_COUNT` and lives
//! for the whole process in [`DURO_TABLE`]. Because the mapping is
//! monotonic, first-occurrence order is also softest-to-hardest order, which
//! is what lets neighbours serve as the soft/hard alternatives.

use crate::config::TABLE_WEIGHT_COUNT;
use crate::pair::BushingPair;
use log::debug;
use once_cell::sync::Lazy;
use std::ops::RangeInclusive;

/// Process-wide pair table over weights 0..=199.
pub static DURO_TABLE: Lazy<DuroTable> = Lazy::new(DuroTable::build);

#[derive(Debug, Clone, PartialEq)]
pub struct DuroTable {
    pairs: Vec<BushingPair>,
    weights: RangeInclusive<i32>,
}

impl DuroTable {
    /// Build the canonical table over `0..TABLE_WEIGHT_COUNT`.
    pub fn build() -> Self {
        Self::from_weights(0..=TABLE_WEIGHT_COUNT - 1)
    }

    /// Build a table from an ascending weight range, keeping the first
    /// occurrence of each distinct pair.
    pub fn from_weights(weights: RangeInclusive<i32>) -> Self {
        let mut pairs: Vec<BushingPair> = Vec::new();
        for weight in weights.clone() {
            let pair = BushingPair::for_weight(weight);
            if !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
        debug!(
            "Built bushing table: {} distinct pairs over weights {}..={}",
            pairs.len(),
            weights.start(),
            weights.end()
        );
        Self { pairs, weights }
    }

    /// Index of the first entry structurally equal to `pair`.
    pub fn position(&self, pair: &BushingPair) -> Option<usize> {
        self.pairs.iter().position(|p| p == pair)
    }

    pub fn get(&self, index: usize) -> Option<&BushingPair> {
        self.pairs.get(index)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn first(&self) -> Option<&BushingPair> {
        self.pairs.first()
    }

    pub fn last(&self) -> Option<&BushingPair> {
        self.pairs.last()
    }

    /// Weight range the table was scanned over.
    pub fn weights(&self) -> &RangeInclusive<i32> {
        &self.weights
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BushingPair> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[BushingPair] {
        &self.pairs
    }
}

impl<'a> IntoIterator for &'a DuroTable {
    type Item = &'a BushingPair;
    type IntoIter = std::slice::Iter<'a, BushingPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
