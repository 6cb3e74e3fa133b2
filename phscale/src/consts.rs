//! Shared numeric constants for the pH crate.

// ── Scale ───────────────────────────────────────────────────────

/// Lower bound of the standard pH display scale.
pub const PH_MIN: f64 = 0.0;

/// Upper bound of the standard pH display scale.
pub const PH_MAX: f64 = 14.0;

/// pH of a neutral aqueous solution at 25 degrees C.
pub const PH_NEUTRAL: f64 = 7.0;

// ── Chemistry ───────────────────────────────────────────────────

/// Ion product of water at 25 degrees C: [H+] * [OH-] in (mol/L)^2.
pub const ION_PRODUCT: f64 = 1e-14;

/// Hydrogen (and hydroxide) concentration of neutral water, in mol/L.
pub const NEUTRAL_CONCENTRATION: f64 = 1e-7;

// ── Display ─────────────────────────────────────────────────────

/// Half-width of the pH band treated as neutral by the color ramp and
/// the acidity classifier. Narrower than the slider step (0.1) so only
/// the detent at 7.0 and direct entries near it read as neutral.
pub const NEUTRAL_BAND_HALF_WIDTH: f64 = 0.05;
