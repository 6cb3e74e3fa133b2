//! Number formatting for the calculator displays.
//!
//! Concentrations are shown in scientific notation and pOH with fixed
//! fractional digits, both to 7 digits by convention.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format in scientific notation with `digits` fractional digits,
/// e.g. `exponential(1e-7, 7)` is `"1.0000000e-7"`.
#[must_use]
pub fn exponential(value: f64, digits: usize) -> String {
    format!("{value:.digits$e}")
}

/// Format with `digits` fixed fractional digits, e.g. `"7.0000000"`.
#[must_use]
pub fn fixed(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}
