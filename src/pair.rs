//! Weight to bushing pair mapping.

use crate::config::{BASE_WEIGHT_KG, DURO_BASELINE, DURO_EXPONENT, ROADSIDE_OFFSET_KG};
use crate::durometer::Durometer;
use serde::{Deserialize, Serialize};

/// Which of the two bushings in a truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Boardside,
    Roadside,
}

/// Recommended (boardside, roadside) combination for one rider weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BushingPair {
    pub boardside: Durometer,
    pub roadside: Durometer,
}

impl BushingPair {
    pub fn new(boardside: Durometer, roadside: Durometer) -> Self {
        Self {
            boardside,
            roadside,
        }
    }

    /// Map a rider weight (kg) to a pair. Total over `i32`.
    pub fn for_weight(weight: i32) -> Self {
        Self {
            boardside: weight_to_duro(weight, Side::Boardside),
            roadside: weight_to_duro(weight, Side::Roadside),
        }
    }

    /// Stable key for keyed rendering, roadside label first.
    pub fn key(&self) -> String {
        format!("{}{}", self.roadside, self.boardside)
    }
}

/// Curve input for one side: weight above the base, never negative.
fn adjusted_weight(weight: i32, side: Side) -> i32 {
    let weight = match side {
        Side::Boardside => weight,
        Side::Roadside => weight.saturating_sub(ROADSIDE_OFFSET_KG),
    };
    weight.saturating_sub(BASE_WEIGHT_KG).max(0)
}

/// Continuous hardness estimate before snapping to an available rating.
pub fn approx_duro(weight: i32, side: Side) -> f64 {
    f64::from(adjusted_weight(weight, side)).powf(DURO_EXPONENT) + DURO_BASELINE
}

/// Map a weight to the nearest available rating for one side.
pub fn weight_to_duro(weight: i32, side: Side) -> Durometer {
    Durometer::nearest(approx_duro(weight, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_WEIGHT_KG, MIN_WEIGHT_KG};

    #[test]
    fn test_weight_40_is_softest() {
        let pair = BushingPair::for_weight(40);
        assert_eq!(pair.boardside, Durometer::A78);
        assert_eq!(pair.roadside, Durometer::A78);
        assert_eq!(approx_duro(40, Side::Boardside), 79.0);
    }

    #[test]
    fn test_weight_70() {
        // 30^0.66 + 79 ~= 88.44 and 25^0.66 + 79 ~= 87.37
        let board = approx_duro(70, Side::Boardside);
        let road = approx_duro(70, Side::Roadside);
        assert!((board - 88.44).abs() < 0.01, "boardside approx {}", board);
        assert!((road - 87.37).abs() < 0.01, "roadside approx {}", road);

        let pair = BushingPair::for_weight(70);
        assert_eq!(pair, BushingPair::new(Durometer::A87, Durometer::A87));
    }

    #[test]
    fn test_roadside_lags_boardside() {
        // 45kg crosses the 81a threshold boardside but not roadside
        let pair = BushingPair::for_weight(45);
        assert_eq!(pair, BushingPair::new(Durometer::A81, Durometer::A78));
        for weight in MIN_WEIGHT_KG..=MAX_WEIGHT_KG {
            let pair = BushingPair::for_weight(weight);
            assert!(pair.roadside <= pair.boardside, "weight {}", weight);
        }
    }

    #[test]
    fn test_slider_range_stays_in_set() {
        for weight in MIN_WEIGHT_KG..=MAX_WEIGHT_KG {
            let pair = BushingPair::for_weight(weight);
            assert!(Durometer::ALL.contains(&pair.boardside));
            assert!(Durometer::ALL.contains(&pair.roadside));
        }
    }

    #[test]
    fn test_extreme_weights_do_not_panic() {
        let light = BushingPair::for_weight(i32::MIN);
        assert_eq!(light, BushingPair::new(Durometer::A78, Durometer::A78));
        let heavy = BushingPair::for_weight(i32::MAX);
        assert_eq!(heavy, BushingPair::new(Durometer::A97, Durometer::A97));
        assert_eq!(BushingPair::for_weight(-5), BushingPair::for_weight(0));
    }

    #[test]
    fn test_key_is_roadside_then_boardside() {
        let pair = BushingPair::new(Durometer::A90, Durometer::A87);
        assert_eq!(pair.key(), "87a90a");
    }

    #[test]
    fn test_serialized_shape() {
        let pair = BushingPair::new(Durometer::A90, Durometer::A87);
        let json = serde_json::to_value(pair).unwrap();
        assert_eq!(json, serde_json::json!({"boardside": "90a", "roadside": "87a"}));
    }
}
