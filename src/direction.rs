//! Tracks which way the weight slider last moved.

use crate::config::DEFAULT_WEIGHT_KG;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderDirection {
    Decreasing,
    #[default]
    Steady,
    Increasing,
}

impl SliderDirection {
    pub fn between(last: i32, current: i32) -> Self {
        match current.cmp(&last) {
            Ordering::Less => SliderDirection::Decreasing,
            Ordering::Equal => SliderDirection::Steady,
            Ordering::Greater => SliderDirection::Increasing,
        }
    }

    /// -1, 0 or 1.
    pub fn sign(self) -> i32 {
        match self {
            SliderDirection::Decreasing => -1,
            SliderDirection::Steady => 0,
            SliderDirection::Increasing => 1,
        }
    }
}

/// Fold state over the stream of slider weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderTracker {
    last: i32,
    direction: SliderDirection,
}

impl Default for SliderTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT_KG)
    }
}

impl SliderTracker {
    pub fn new(initial: i32) -> Self {
        Self {
            last: initial,
            direction: SliderDirection::Steady,
        }
    }

    /// Record a new weight and return the direction of the change.
    pub fn observe(&mut self, weight: i32) -> SliderDirection {
        self.direction = SliderDirection::between(self.last, weight);
        self.last = weight;
        self.direction
    }

    pub fn last(&self) -> i32 {
        self.last
    }

    pub fn direction(&self) -> SliderDirection {
        self.direction
    }
}
