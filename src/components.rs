//! Yew view components for the bushing picker.
//!
//! Apart from the entry animation in [`PairBlock`], these render purely from
//! props.

use crate::utils::{heading, slide_offsets_px, slot_offset_px};
use bushing_picker::config::{MAX_WEIGHT_KG, MIN_WEIGHT_KG};
use bushing_picker::{BushingPair, Durometer, Recommendation, SliderDirection};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Renders one colored durometer label.
fn render_bushing(duro: Durometer) -> Html {
    html! {
        <div class="bushing" style={format!("background: {};", duro.color())}>
            { duro.label() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PairBlockProps {
    pub pair: BushingPair,
    pub slot: usize,
    pub direction: SliderDirection,
}

/// A roadside/boardside block that slides into its slot when mounted.
///
/// The block first renders transparent at the enter offset and moves to its
/// slot on the next tick, letting the CSS transition animate the change.
#[function_component(PairBlock)]
pub fn pair_block(props: &PairBlockProps) -> Html {
    let settled = use_state(|| false);

    {
        let settled = settled.clone();
        use_effect_with((), move |_| {
            let handle = Timeout::new(0, move || settled.set(true));
            move || drop(handle)
        });
    }

    let (enter_x, exit_x) = slide_offsets_px(props.direction);
    let style = if *settled {
        format!(
            "opacity: 1; transform: translateX({}px); --exit-x: {}px;",
            slot_offset_px(props.slot),
            exit_x
        )
    } else {
        format!(
            "opacity: 0; transform: translateX({}px); --exit-x: {}px;",
            enter_x, exit_x
        )
    };

    html! {
        <div class="pair" {style}>
            { render_bushing(props.pair.roadside) }
            { render_bushing(props.pair.boardside) }
        </div>
    }
}

/// Renders soft, medium and hard blocks.
///
/// Blocks are keyed by pair so a pair that stays recommended keeps its node
/// and slides to its new slot. At the table ends two slots hold the same
/// pair, hence the occurrence suffix.
pub fn render_bushing_pairs(recommendation: &Recommendation, direction: SliderDirection) -> Html {
    let named = recommendation.named();
    html! {
        <div class="bushing-pairs">
            { named.iter().enumerate().map(|(slot, (_, pair))| {
                let occurrence = named[..slot].iter().filter(|(_, p)| p == pair).count();
                html! {
                    <PairBlock
                        key={format!("{}-{}", pair.key(), occurrence)}
                        pair={*pair}
                        {slot}
                        {direction}
                    />
                }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WeightInputProps {
    pub weight: i32,
    pub oninput: Callback<InputEvent>,
}

/// Range input for the rider's weight.
#[function_component(WeightInput)]
pub fn weight_input(props: &WeightInputProps) -> Html {
    html! {
        <input class="weight"
            type="range"
            min={MIN_WEIGHT_KG.to_string()}
            max={MAX_WEIGHT_KG.to_string()}
            value={props.weight.to_string()}
            oninput={props.oninput.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct RecommendationsProps {
    pub weight: i32,
    pub recommendation: Recommendation,
    pub direction: SliderDirection,
}

#[function_component(Recommendations)]
pub fn recommendations(props: &RecommendationsProps) -> Html {
    html! {
        <div class="recommendations">
            <h2>{ heading(props.weight) }</h2>
            { render_bushing_pairs(&props.recommendation, props.direction) }
        </div>
    }
}
