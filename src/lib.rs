//! Skateboard bushing recommendations by rider weight.
//!
//! The core maps a weight to a (boardside, roadside) durometer pair and
//! picks its softer and harder neighbours from the table of every pair the
//! mapping can produce.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod direction;
pub mod durometer;
pub mod pair;
pub mod recommend;
pub mod table;

pub use direction::{SliderDirection, SliderTracker};
pub use durometer::{DuroParseError, Durometer};
pub use pair::{weight_to_duro, BushingPair, Side};
pub use recommend::{recommend, recommend_with, Recommendation};
pub use table::{DuroTable, DURO_TABLE};

/// JS entry point returning `{soft, medium, hard}` for a weight in kg.
///
/// Each pair is `{boardside, roadside}` with labels such as `"87a"`.
/// Returns `null` if the result cannot be serialized.
#[wasm_bindgen(js_name = recommendBushings)]
pub fn recommend_bushings(weight: i32) -> JsValue {
    serde_wasm_bindgen::to_value(&recommend(weight)).unwrap_or(JsValue::NULL)
}
