//! Tab strip for switching between the four input methods.

use leptos::prelude::*;

use crate::state::calculator::{CalculatorState, InputMethod};

const METHODS: [InputMethod; 4] = [
    InputMethod::Hydrogen,
    InputMethod::Hydroxide,
    InputMethod::Poh,
    InputMethod::Solution,
];

/// Four-tab strip bound to `CalculatorState.method`.
#[component]
pub fn MethodTabs() -> impl IntoView {
    let calculator = expect_context::<RwSignal<CalculatorState>>();

    view! {
        <div class="method-tabs">
            {METHODS
                .into_iter()
                .map(|method| {
                    view! {
                        <button
                            class="method-tabs__tab"
                            class:method-tabs__tab--active=move || {
                                calculator.get().method == method
                            }
                            on:click=move |_| calculator.update(|c| c.method = method)
                        >
                            {method.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
