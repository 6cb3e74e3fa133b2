//! Reusable UI components for the calculator page.

pub mod input_panel;
pub mod method_tabs;
pub mod ph_readout;
pub mod ph_slider;
pub mod sidebar;
pub mod solution_picker;
