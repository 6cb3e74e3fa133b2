//! pH slider with scale captions and a fill track.

use leptos::prelude::*;

use crate::state::calculator::CalculatorState;

/// Range slider over the 0-14 scale in 0.1 steps.
///
/// Dragging writes the pH back through `set_ph`, which resyncs every
/// input field, so the slider and the text inputs never disagree.
#[component]
pub fn PhSlider() -> impl IntoView {
    let calculator = expect_context::<RwSignal<CalculatorState>>();

    let ph = move || calculator.get().ph;
    let poh = move || calculator.get().poh();

    let on_slide = move |ev| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            calculator.update(|c| c.set_ph(value));
        }
    };

    view! {
        <div class="ph-slider">
            <div class="ph-slider__values">
                <span>{move || format!("pH Value: {:.2}", ph())}</span>
                <span>{move || format!("pOH: {:.2}", poh())}</span>
            </div>
            <input
                type="range"
                class="ph-slider__range"
                min="0"
                max="14"
                step="0.1"
                prop:value=move || ph().to_string()
                on:input=on_slide
            />
            <div class="ph-slider__captions">
                <span>"Acidic (0)"</span>
                <span>"Neutral (7)"</span>
                <span>"Basic (14)"</span>
            </div>
            <div class="ph-slider__track">
                <div
                    class="ph-slider__fill"
                    style:width=move || format!("{:.1}%", ph() / 14.0 * 100.0)
                ></div>
            </div>
        </div>
    }
}
