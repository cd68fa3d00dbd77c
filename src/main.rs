//! Main module for the bushing picker using Yew.
//! Wires the weight slider to the recommendation engine and the view.

use bushing_picker::config::DEFAULT_WEIGHT_KG;
use bushing_picker::recommend;
use log::info;
use yew::prelude::*;

mod components;
mod hooks;
mod utils;

use components::{Recommendations, WeightInput};
use hooks::use_weight_slider;

#[function_component]
pub fn App() -> Html {
    let slider = use_weight_slider(DEFAULT_WEIGHT_KG);
    let recommendation = use_memo(slider.weight, |&weight| recommend(weight));

    html! {
        <div class="bushing-picker">
            <WeightInput weight={slider.weight} oninput={slider.oninput.clone()} />
            if let Some(ref msg) = slider.error {
                <div class="error">{ msg }</div>
            }
            <Recommendations
                weight={slider.weight}
                recommendation={*recommendation}
                direction={slider.direction}
            />
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the App component.
fn main() {
    console_error_panic_hook::set_once();
    info!("Starting bushing picker at {}kg", DEFAULT_WEIGHT_KG);
    yew::Renderer::<App>::new().render();
}
