//! Input field and Calculate button for the concentration and pOH methods.

use leptos::prelude::*;

use crate::state::calculator::{CalculatorState, InputMethod};

/// Labelled input for the active method, plus the Calculate button.
///
/// The raw text is kept in `CalculatorState` per method, so switching tabs
/// preserves what the user typed. Calculation runs on the button, not on
/// every keystroke.
#[component]
pub fn InputPanel() -> impl IntoView {
    let calculator = expect_context::<RwSignal<CalculatorState>>();

    let label = move || match calculator.get().method {
        InputMethod::Hydrogen => "Hydrogen Ion Concentration [H\u{207a}] (mol/L)",
        InputMethod::Hydroxide => "Hydroxide Ion Concentration [OH\u{207b}] (mol/L)",
        InputMethod::Poh => "pOH Value (0-14)",
        InputMethod::Solution => "",
    };

    let value = move || {
        let state = calculator.get();
        match state.method {
            InputMethod::Hydrogen => state.hydrogen_input,
            InputMethod::Hydroxide => state.hydroxide_input,
            InputMethod::Poh => state.poh_input,
            InputMethod::Solution => String::new(),
        }
    };

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        calculator.update(|c| match c.method {
            InputMethod::Hydrogen => c.hydrogen_input = text,
            InputMethod::Hydroxide => c.hydroxide_input = text,
            InputMethod::Poh => c.poh_input = text,
            InputMethod::Solution => {}
        });
    };

    let on_calculate = move |_| calculator.update(CalculatorState::calculate);

    view! {
        <div class="input-panel">
            <label class="input-panel__label" for="method-input">
                {label}
            </label>
            <input
                id="method-input"
                class="input-panel__field"
                prop:value=value
                on:input=on_input
            />
            <button class="input-panel__calculate" on:click=on_calculate>
                "Calculate pH"
            </button>
        </div>
    }
}
