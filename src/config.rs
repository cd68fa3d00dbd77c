//! Application-level configuration constants.

// Slider limits and default
pub const MIN_WEIGHT_KG: i32 = 40;
pub const MAX_WEIGHT_KG: i32 = 120;
pub const DEFAULT_WEIGHT_KG: i32 = 70;

// Weights scanned when building the pair table (0..TABLE_WEIGHT_COUNT)
pub const TABLE_WEIGHT_COUNT: i32 = 200;

// Weight-to-durometer curve
pub const BASE_WEIGHT_KG: i32 = 40;
pub const ROADSIDE_OFFSET_KG: i32 = 5;
pub const DURO_EXPONENT: f64 = 0.66;
pub const DURO_BASELINE: f64 = 79.0;

// UI constants
pub const PAIR_SPACING_PX: i32 = 80;
pub const PAIR_SLOTS: i32 = 3;
