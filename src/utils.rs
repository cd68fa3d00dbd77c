use bushing_picker::config::{MAX_WEIGHT_KG, MIN_WEIGHT_KG, PAIR_SLOTS, PAIR_SPACING_PX};
use bushing_picker::SliderDirection;

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Parse the slider value, clamping anything outside the slider's range.
pub fn parse_weight(input: &str) -> Result<i32, String> {
    let weight: i32 = validate_numeric_input(input, None, None, "Weight")?;
    Ok(weight.clamp(MIN_WEIGHT_KG, MAX_WEIGHT_KG))
}

/// Resting x offset of the pair block in slot `slot`.
pub fn slot_offset_px(slot: usize) -> i32 {
    slot as i32 * PAIR_SPACING_PX
}

/// (enter, exit) x offsets for pair blocks.
///
/// Moving the slider up brings new pairs in from the right and pushes old
/// ones out to the left; any other movement does the opposite.
pub fn slide_offsets_px(direction: SliderDirection) -> (i32, i32) {
    let left = -PAIR_SPACING_PX;
    let right = PAIR_SLOTS * PAIR_SPACING_PX;
    match direction {
        SliderDirection::Increasing => (right, left),
        SliderDirection::Decreasing | SliderDirection::Steady => (left, right),
    }
}

pub fn heading(weight: i32) -> String {
    format!("Bushings for a {}kg rider:", weight)
}
