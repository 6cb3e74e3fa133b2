//! Colored result box with the pH value, acidity label, and ion balance.

use leptos::prelude::*;

use phscale::color::color_for_ph;
use phscale::scale::{Acidity, classify};

use crate::state::calculator::CalculatorState;

/// Result readout: the pH on its band color, the qualitative label, and
/// which ion dominates.
#[component]
pub fn PhReadout() -> impl IntoView {
    let calculator = expect_context::<RwSignal<CalculatorState>>();

    let ph = move || calculator.get().ph;
    let background = move || color_for_ph(ph()).css();
    // The deep red and blue bands need white text to stay readable.
    let foreground = move || {
        if ph() < 3.0 || ph() > 11.0 { "#ffffff" } else { "#000000" }
    };

    let acidity = move || classify(ph());
    let label_class = move || match acidity() {
        Acidity::Acidic => "ph-readout__label ph-readout__label--acidic",
        Acidity::Neutral => "ph-readout__label ph-readout__label--neutral",
        Acidity::Basic => "ph-readout__label ph-readout__label--basic",
    };
    let ion_balance = move || match acidity() {
        Acidity::Acidic => "[H\u{207a}] > [OH\u{207b}]",
        Acidity::Neutral => "[H\u{207a}] = [OH\u{207b}]",
        Acidity::Basic => "[OH\u{207b}] > [H\u{207a}]",
    };

    view! {
        <div class="ph-readout">
            <div
                class="ph-readout__box"
                style:background-color=background
                style:color=foreground
            >
                {move || format!("{:.2}", ph())}
            </div>
            <div class=label_class>{move || acidity().label()}</div>
            <div class="ph-readout__ions">{ion_balance}</div>
        </div>
    }
}
