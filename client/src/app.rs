//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::calculator::CalculatorPage;
use crate::state::{calculator::CalculatorState, ui::UiState};

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let calculator = RwSignal::new(CalculatorState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(calculator);
    provide_context(ui);

    view! {
        <Title text="pH Calculator"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CalculatorPage/>
            </Routes>
        </Router>
    }
}
