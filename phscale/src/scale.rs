//! Conversions between pH, pOH, and ion concentrations.
//!
//! The four representations are algebraically equivalent at 25 degrees C:
//! `pH = -log10([H+])`, `pOH = -log10([OH-])`, `pH + pOH = 14`, and
//! `[H+] * [OH-] = 1e-14`. Concentration-to-pH conversions clamp their
//! result to the standard 0-14 display scale; pH-to-concentration
//! conversions instead reject out-of-scale input outright. That asymmetry
//! is intentional and relied upon by the UI.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use crate::consts::{NEUTRAL_BAND_HALF_WIDTH, PH_MAX, PH_MIN, PH_NEUTRAL};

/// Error returned when a caller-supplied value is outside its valid domain.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    /// An ion concentration was zero, negative, or not a number.
    #[error("concentration must be greater than 0 mol/L, got {0}")]
    NonPositiveConcentration(f64),
    /// A pH or pOH value was outside the standard 0-14 scale.
    #[error("value must be between 0 and 14, got {0}")]
    OutOfScale(f64),
}

/// Clamp a pH value to the standard 0-14 display scale.
///
/// Real solutions can fall outside this range in extreme cases, but the
/// calculator renders everything on the standard scale.
#[must_use]
pub fn clamp_to_scale(ph: f64) -> f64 {
    ph.clamp(PH_MIN, PH_MAX)
}

/// Compute pH from hydrogen-ion concentration: `pH = -log10([H+])`.
///
/// The result is clamped to the 0-14 scale.
///
/// # Errors
///
/// Returns [`InvalidInput::NonPositiveConcentration`] when `concentration`
/// is zero, negative, or NaN.
pub fn ph_from_hydrogen(concentration: f64) -> Result<f64, InvalidInput> {
    if concentration.is_nan() || concentration <= 0.0 {
        return Err(InvalidInput::NonPositiveConcentration(concentration));
    }
    Ok(clamp_to_scale(-concentration.log10()))
}

/// Compute pH from hydroxide-ion concentration: `pOH = -log10([OH-])`,
/// then `pH = 14 - pOH`.
///
/// The result is clamped to the 0-14 scale.
///
/// # Errors
///
/// Returns [`InvalidInput::NonPositiveConcentration`] when `concentration`
/// is zero, negative, or NaN.
pub fn ph_from_hydroxide(concentration: f64) -> Result<f64, InvalidInput> {
    if concentration.is_nan() || concentration <= 0.0 {
        return Err(InvalidInput::NonPositiveConcentration(concentration));
    }
    let poh = -concentration.log10();
    Ok(clamp_to_scale(PH_MAX - poh))
}

/// Compute pH from a pOH value: `pH = 14 - pOH`.
///
/// No clamping is applied; a valid pOH always yields a valid pH.
///
/// # Errors
///
/// Returns [`InvalidInput::OutOfScale`] when `poh` is outside 0-14.
pub fn ph_from_poh(poh: f64) -> Result<f64, InvalidInput> {
    if !(PH_MIN..=PH_MAX).contains(&poh) {
        return Err(InvalidInput::OutOfScale(poh));
    }
    Ok(PH_MAX - poh)
}

/// Compute hydrogen-ion concentration from pH: `[H+] = 10^(-pH)` mol/L.
///
/// # Errors
///
/// Returns [`InvalidInput::OutOfScale`] when `ph` is outside 0-14.
pub fn hydrogen_from_ph(ph: f64) -> Result<f64, InvalidInput> {
    if !(PH_MIN..=PH_MAX).contains(&ph) {
        return Err(InvalidInput::OutOfScale(ph));
    }
    Ok(10f64.powf(-ph))
}

/// Compute hydroxide-ion concentration from pH: `[OH-] = 10^(pH - 14)` mol/L.
///
/// # Errors
///
/// Returns [`InvalidInput::OutOfScale`] when `ph` is outside 0-14.
pub fn hydroxide_from_ph(ph: f64) -> Result<f64, InvalidInput> {
    if !(PH_MIN..=PH_MAX).contains(&ph) {
        return Err(InvalidInput::OutOfScale(ph));
    }
    Ok(10f64.powf(ph - PH_MAX))
}

/// Qualitative acidity class of a pH value, as shown in the result readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acidity {
    Acidic,
    Neutral,
    Basic,
}

impl Acidity {
    /// Label shown in the result readout.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Acidic => "Acidic",
            Self::Neutral => "Neutral",
            Self::Basic => "Basic (Alkaline)",
        }
    }
}

/// Classify a pH value relative to the neutral point.
///
/// Uses the same neutral band as the color ramp, so the textual label and
/// the display color never disagree.
#[must_use]
pub fn classify(ph: f64) -> Acidity {
    if (ph - PH_NEUTRAL).abs() <= NEUTRAL_BAND_HALF_WIDTH {
        Acidity::Neutral
    } else if ph < PH_NEUTRAL {
        Acidity::Acidic
    } else {
        Acidity::Basic
    }
}
