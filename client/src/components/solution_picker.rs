//! Dropdown over the reference-solution catalog, with a notes field.

use leptos::prelude::*;

use phscale::catalog;

use crate::state::calculator::CalculatorState;

/// Catalog dropdown for the Solutions tab.
///
/// Picking an entry applies its typical pH immediately (there is no
/// Calculate step) and prefills the notes textarea, which stays editable.
#[component]
pub fn SolutionPicker() -> impl IntoView {
    let calculator = expect_context::<RwSignal<CalculatorState>>();

    let on_change = move |ev| {
        let name = event_target_value(&ev);
        if !name.is_empty() {
            calculator.update(|c| c.select_solution(&name));
        }
    };

    view! {
        <div class="solution-picker">
            <label class="solution-picker__label" for="solution-select">
                "Common Acids and Bases"
            </label>
            <select
                id="solution-select"
                class="solution-picker__select"
                prop:value=move || {
                    calculator.get().selected_solution.unwrap_or_default().to_owned()
                }
                on:change=on_change
            >
                <option value="">"Choose a solution"</option>
                {catalog::solutions()
                    .iter()
                    .map(|solution| {
                        view! {
                            <option value=solution.name>
                                {format!("{} (pH {})", solution.name, solution.typical_ph)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <Show when=move || calculator.get().selected_solution.is_some()>
                <textarea
                    class="solution-picker__notes"
                    placeholder="Notes about this solution..."
                    prop:value=move || calculator.get().notes
                    on:input=move |ev| {
                        calculator.update(|c| c.notes = event_target_value(&ev));
                    }
                ></textarea>
            </Show>
        </div>
    }
}
