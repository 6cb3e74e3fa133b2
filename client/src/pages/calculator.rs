//! Calculator page: the main layout.

use leptos::prelude::*;

use crate::components::input_panel::InputPanel;
use crate::components::method_tabs::MethodTabs;
use crate::components::ph_readout::PhReadout;
use crate::components::ph_slider::PhSlider;
use crate::components::sidebar::Sidebar;
use crate::components::solution_picker::SolutionPicker;
use crate::state::calculator::{CalculatorState, InputMethod};

/// Calculator page: sidebar plus the calculator card.
///
/// The card stacks the error banner, method tabs, the active method's
/// panel, the slider, the readout, and the reset footer.
#[component]
pub fn CalculatorPage() -> impl IntoView {
    let calculator = expect_context::<RwSignal<CalculatorState>>();

    let on_reset = move |_| calculator.update(CalculatorState::reset);

    view! {
        <div class="calculator-page">
            <Sidebar/>

            <main class="calculator-page__main">
                <div class="calculator-card">
                    <header class="calculator-card__header">
                        <h1>"pH Calculator"</h1>
                        <p>"Calculate and explore pH values from different inputs"</p>
                    </header>

                    {move || {
                        calculator
                            .get()
                            .error
                            .map(|message| {
                                view! { <div class="calculator-card__alert">{message}</div> }
                            })
                    }}

                    <MethodTabs/>

                    {move || match calculator.get().method {
                        InputMethod::Solution => view! { <SolutionPicker/> }.into_any(),
                        _ => view! { <InputPanel/> }.into_any(),
                    }}

                    <PhSlider/>
                    <PhReadout/>

                    <footer class="calculator-card__footer">
                        <button class="calculator-card__reset" on:click=on_reset>
                            "Reset Calculator"
                        </button>
                    </footer>
                </div>
            </main>
        </div>
    }
}
