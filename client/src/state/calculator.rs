//! Calculator state: active input method, raw input text, and the
//! current pH.
//!
//! The four representations stay in sync through the pH: whenever a
//! conversion or the slider produces a new pH, the other input fields are
//! rewritten from it (concentrations in 7-digit scientific notation, pOH
//! with 7 fixed digits). A failed parse or conversion sets `error` and
//! leaves the previous pH on display.

#[cfg(test)]
#[path = "calculator_test.rs"]
mod calculator_test;

use phscale::consts::PH_MAX;
use phscale::{catalog, scale};

use crate::util::format;

/// Significant digits shown in the synced concentration and pOH fields.
const SIG_DIGITS: usize = 7;

/// Which input method is active in the calculator tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMethod {
    /// Hydrogen-ion concentration in mol/L.
    #[default]
    Hydrogen,
    /// Hydroxide-ion concentration in mol/L.
    Hydroxide,
    /// pOH value on the 0-14 scale.
    Poh,
    /// Pick a reference solution from the catalog.
    Solution,
}

impl InputMethod {
    /// Short label shown on the tab trigger.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hydrogen => "[H\u{207a}]",
            Self::Hydroxide => "[OH\u{207b}]",
            Self::Poh => "pOH",
            Self::Solution => "Solutions",
        }
    }
}

/// Full calculator state.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    /// Active input method (tab).
    pub method: InputMethod,
    /// Raw text of the hydrogen concentration field.
    pub hydrogen_input: String,
    /// Raw text of the hydroxide concentration field.
    pub hydroxide_input: String,
    /// Raw text of the pOH field.
    pub poh_input: String,
    /// Last successfully computed pH, always on the 0-14 scale.
    pub ph: f64,
    /// User-visible message for the last failed parse or conversion.
    pub error: Option<String>,
    /// Name of the catalog entry picked on the Solutions tab.
    pub selected_solution: Option<&'static str>,
    /// Free-form notes, prefilled from the selected solution.
    pub notes: String,
}

impl Default for CalculatorState {
    /// Neutral water: [H+] = [OH-] = 1e-7 mol/L, pOH = 7, pH = 7.
    fn default() -> Self {
        Self {
            method: InputMethod::default(),
            hydrogen_input: "0.0000001".to_owned(),
            hydroxide_input: "0.0000001".to_owned(),
            poh_input: "7".to_owned(),
            ph: 7.0,
            error: None,
            selected_solution: None,
            notes: String::new(),
        }
    }
}

impl CalculatorState {
    /// pOH derived from the current pH.
    #[must_use]
    pub fn poh(&self) -> f64 {
        PH_MAX - self.ph
    }

    /// Run the conversion for the active input method.
    pub fn calculate(&mut self) {
        match self.method {
            InputMethod::Hydrogen => self.calculate_from_hydrogen(),
            InputMethod::Hydroxide => self.calculate_from_hydroxide(),
            InputMethod::Poh => self.calculate_from_poh(),
            // Selection already applied the value; the button is hidden.
            InputMethod::Solution => {}
        }
    }

    /// Slider path: accept an on-scale pH and resync every representation.
    pub fn set_ph(&mut self, ph: f64) {
        self.ph = scale::clamp_to_scale(ph);
        self.sync_hydrogen_input();
        self.sync_hydroxide_input();
        self.sync_poh_input();
    }

    /// Apply a catalog entry: set its typical pH, resync the fields, and
    /// prefill the notes from its description and formula.
    ///
    /// Unknown names are ignored (the dropdown only offers catalog names).
    pub fn select_solution(&mut self, name: &str) {
        let Some(solution) = catalog::find(name) else {
            return;
        };
        self.selected_solution = Some(solution.name);
        self.set_ph(solution.typical_ph);

        if let Some(description) = solution.description {
            let formula_line = solution
                .formula
                .map_or(String::new(), |formula| format!("Formula: {formula}"));
            self.notes = format!("{}: {description}\n{formula_line}", solution.name);
        }
    }

    /// Restore the neutral-water default state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn calculate_from_hydrogen(&mut self) {
        let Ok(concentration) = self.hydrogen_input.trim().parse::<f64>() else {
            self.error = Some("Please enter a valid positive number".to_owned());
            return;
        };
        match scale::ph_from_hydrogen(concentration) {
            Ok(ph) => {
                self.error = None;
                self.ph = ph;
                self.sync_hydroxide_input();
                self.sync_poh_input();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn calculate_from_hydroxide(&mut self) {
        let Ok(concentration) = self.hydroxide_input.trim().parse::<f64>() else {
            self.error = Some("Please enter a valid positive number".to_owned());
            return;
        };
        match scale::ph_from_hydroxide(concentration) {
            Ok(ph) => {
                self.error = None;
                self.ph = ph;
                self.sync_hydrogen_input();
                self.sync_poh_input();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn calculate_from_poh(&mut self) {
        let Ok(poh) = self.poh_input.trim().parse::<f64>() else {
            self.error = Some("pOH must be between 0 and 14".to_owned());
            return;
        };
        match scale::ph_from_poh(poh) {
            Ok(ph) => {
                self.error = None;
                self.ph = ph;
                self.sync_hydrogen_input();
                self.sync_hydroxide_input();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    // The current pH is always on-scale, so the conversions below cannot
    // fail; the `if let` keeps the field untouched if that ever changes.

    fn sync_hydrogen_input(&mut self) {
        if let Ok(concentration) = scale::hydrogen_from_ph(self.ph) {
            self.hydrogen_input = format::exponential(concentration, SIG_DIGITS);
        }
    }

    fn sync_hydroxide_input(&mut self) {
        if let Ok(concentration) = scale::hydroxide_from_ph(self.ph) {
            self.hydroxide_input = format::exponential(concentration, SIG_DIGITS);
        }
    }

    fn sync_poh_input(&mut self) {
        self.poh_input = format::fixed(self.poh(), SIG_DIGITS);
    }
}
