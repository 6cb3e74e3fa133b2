#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: sidebar visibility.
///
/// Kept separate from [`super::calculator::CalculatorState`] so toggling
/// the sidebar does not re-render the calculator card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_expanded: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_expanded: true }
    }
}
