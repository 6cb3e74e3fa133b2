//! Collapsible informational sidebar: what pH is, the formulas, the scale.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Static reference sidebar next to the calculator card.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let expanded = move || ui.get().sidebar_expanded;
    let toggle = move |_| {
        ui.update(|u| u.sidebar_expanded = !u.sidebar_expanded);
    };

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !expanded()>
            <div class="sidebar__header">
                <span class="sidebar__title">"pH Calculator"</span>
                <button class="sidebar__toggle" on:click=toggle>
                    {move || if expanded() { "\u{25C0}" } else { "\u{25B6}" }}
                </button>
            </div>

            <Show when=expanded>
                <div class="sidebar__content">
                    <section class="sidebar__group">
                        <h3>"What is pH?"</h3>
                        <p>
                            "pH is a measure of how acidic or basic (alkaline) a \
                             solution is. The pH scale ranges from 0 to 14, with 7 \
                             being neutral."
                        </p>
                    </section>

                    <section class="sidebar__group">
                        <h3>"pH Formula"</h3>
                        <p class="sidebar__formula">"pH = -log\u{2081}\u{2080}[H\u{207a}]"</p>
                        <p class="sidebar__formula">"pOH = -log\u{2081}\u{2080}[OH\u{207b}]"</p>
                        <p class="sidebar__formula">"pH + pOH = 14"</p>
                    </section>

                    <section class="sidebar__group">
                        <h3>"pH Scale"</h3>
                        <ul>
                            <li>"pH < 7: Acidic"</li>
                            <li>"pH = 7: Neutral"</li>
                            <li>"pH > 7: Basic (Alkaline)"</li>
                        </ul>
                    </section>

                    <section class="sidebar__group">
                        <h3>"Ion Concentration"</h3>
                        <p>"For any aqueous solution at 25\u{b0}C:"</p>
                        <p class="sidebar__formula">
                            "[H\u{207a}] \u{d7} [OH\u{207b}] = 10\u{207b}\u{b9}\u{2074}"
                        </p>
                    </section>
                </div>
            </Show>
        </aside>
    }
}
