use crate::utils::parse_weight;
use bushing_picker::{SliderDirection, SliderTracker};
use log::{debug, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// State and callback for the weight slider.
#[derive(Clone)]
pub struct WeightSlider {
    /// Current weight in kg.
    pub weight: i32,
    /// Which way the slider moved on the last input.
    pub direction: SliderDirection,
    /// Set when the last input could not be parsed; the weight is left as is.
    pub error: Option<String>,
    /// Callback for the range input's `oninput` event.
    pub oninput: Callback<InputEvent>,
}

/// Custom hook folding slider input into a weight and a slide direction.
#[hook]
pub fn use_weight_slider(initial_weight: i32) -> WeightSlider {
    let tracker = use_state(|| SliderTracker::new(initial_weight));
    let error = use_state(|| None::<String>);

    let oninput = {
        let tracker = tracker.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_weight(&input.value()) {
                Ok(weight) => {
                    let mut next = *tracker;
                    let direction = next.observe(weight);
                    debug!("Weight {}kg (direction {})", weight, direction.sign());
                    tracker.set(next);
                    error.set(None);
                }
                Err(msg) => {
                    warn!("Ignoring slider value {:?}: {}", input.value(), msg);
                    error.set(Some(msg));
                }
            }
        })
    };

    WeightSlider {
        weight: tracker.last(),
        direction: tracker.direction(),
        error: (*error).clone(),
        oninput,
    }
}
