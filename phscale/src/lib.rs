//! Core chemistry for the pH calculator.
//!
//! This crate owns the pure math and static data behind the calculator:
//! conversions between the four equivalent representations of acidity
//! (pH, pOH, hydrogen-ion concentration, hydroxide-ion concentration),
//! the piecewise pH-to-display-color ramp, and the read-only catalog of
//! common reference solutions. The UI layer parses user text, calls into
//! this crate, and renders the results.
//!
//! All functions are pure and deterministic, the catalog is immutable
//! static data, and nothing here blocks or performs I/O, so everything is
//! safe to call from any thread. All arithmetic assumes aqueous solutions
//! at 25 degrees C, where the ion product [H+]*[OH-] is 1e-14.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scale`] | Conversions between pH, pOH, and ion concentrations |
//! | [`color`] | Piecewise pH-to-display-color ramp |
//! | [`catalog`] | Read-only catalog of common acids and bases |
//! | [`consts`] | Shared numeric constants (scale bounds, neutral point, etc.) |

pub mod catalog;
pub mod color;
pub mod consts;
pub mod scale;
