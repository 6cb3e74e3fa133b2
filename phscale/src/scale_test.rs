#![allow(clippy::float_cmp)]

use super::*;

use crate::consts::{ION_PRODUCT, NEUTRAL_CONCENTRATION};

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Relative comparison for quantities spanning many orders of magnitude.
fn approx_eq_rel(a: f64, b: f64) -> bool {
    ((a - b) / b).abs() < 1e-9
}

// --- ph_from_hydrogen ---

#[test]
fn neutral_water_is_ph_seven() {
    let ph = ph_from_hydrogen(NEUTRAL_CONCENTRATION).unwrap();
    assert!(approx_eq(ph, 7.0));
}

#[test]
fn molar_acid_is_ph_zero() {
    let ph = ph_from_hydrogen(1.0).unwrap();
    assert!(approx_eq(ph, 0.0));
}

#[test]
fn millimolar_acid() {
    let ph = ph_from_hydrogen(1e-3).unwrap();
    assert!(approx_eq(ph, 3.0));
}

#[test]
fn zero_concentration_is_invalid() {
    assert_eq!(
        ph_from_hydrogen(0.0),
        Err(InvalidInput::NonPositiveConcentration(0.0))
    );
}

#[test]
fn negative_concentration_is_invalid() {
    assert_eq!(
        ph_from_hydrogen(-1.0),
        Err(InvalidInput::NonPositiveConcentration(-1.0))
    );
}

#[test]
fn nan_concentration_is_invalid() {
    assert!(matches!(
        ph_from_hydrogen(f64::NAN),
        Err(InvalidInput::NonPositiveConcentration(_))
    ));
}

#[test]
fn very_concentrated_acid_clamps_to_zero() {
    // 10 mol/L would be pH -1 on the raw formula.
    let ph = ph_from_hydrogen(10.0).unwrap();
    assert_eq!(ph, 0.0);
}

#[test]
fn vanishing_concentration_clamps_to_fourteen() {
    // 1e-20 mol/L would be pH 20 on the raw formula.
    let ph = ph_from_hydrogen(1e-20).unwrap();
    assert_eq!(ph, 14.0);
}

// --- ph_from_hydroxide ---

#[test]
fn neutral_hydroxide_is_ph_seven() {
    let ph = ph_from_hydroxide(1e-7).unwrap();
    assert!(approx_eq(ph, 7.0));
}

#[test]
fn molar_base_is_ph_fourteen() {
    let ph = ph_from_hydroxide(1.0).unwrap();
    assert!(approx_eq(ph, 14.0));
}

#[test]
fn hydroxide_zero_is_invalid() {
    assert_eq!(
        ph_from_hydroxide(0.0),
        Err(InvalidInput::NonPositiveConcentration(0.0))
    );
}

#[test]
fn concentrated_base_clamps_to_fourteen() {
    let ph = ph_from_hydroxide(10.0).unwrap();
    assert_eq!(ph, 14.0);
}

#[test]
fn vanishing_hydroxide_clamps_to_zero() {
    let ph = ph_from_hydroxide(1e-20).unwrap();
    assert_eq!(ph, 0.0);
}

// --- ph_from_poh ---

#[test]
fn poh_identity_at_integer_ph() {
    // Integer pH values survive 14 - (14 - ph) without rounding.
    for unit in 0..=14 {
        let ph = f64::from(unit);
        assert_eq!(ph_from_poh(14.0 - ph).unwrap(), ph);
    }
}

#[test]
fn poh_identity_across_scale() {
    for tenth in 0..=140 {
        let ph = f64::from(tenth) / 10.0;
        assert!(approx_eq(ph_from_poh(14.0 - ph).unwrap(), ph));
    }
}

#[test]
fn poh_below_scale_is_invalid() {
    assert_eq!(ph_from_poh(-0.1), Err(InvalidInput::OutOfScale(-0.1)));
}

#[test]
fn poh_above_scale_is_invalid() {
    assert_eq!(ph_from_poh(14.1), Err(InvalidInput::OutOfScale(14.1)));
}

#[test]
fn poh_nan_is_invalid() {
    assert!(matches!(
        ph_from_poh(f64::NAN),
        Err(InvalidInput::OutOfScale(_))
    ));
}

// --- hydrogen_from_ph / hydroxide_from_ph ---

#[test]
fn hydrogen_at_neutral() {
    let c = hydrogen_from_ph(7.0).unwrap();
    assert!(approx_eq_rel(c, 1e-7));
}

#[test]
fn hydroxide_at_neutral() {
    let c = hydroxide_from_ph(7.0).unwrap();
    assert!(approx_eq_rel(c, 1e-7));
}

#[test]
fn hydrogen_at_scale_ends() {
    assert!(approx_eq_rel(hydrogen_from_ph(0.0).unwrap(), 1.0));
    assert!(approx_eq_rel(hydrogen_from_ph(14.0).unwrap(), 1e-14));
}

#[test]
fn hydrogen_out_of_scale_is_invalid() {
    assert_eq!(hydrogen_from_ph(-0.5), Err(InvalidInput::OutOfScale(-0.5)));
    assert_eq!(hydrogen_from_ph(14.5), Err(InvalidInput::OutOfScale(14.5)));
}

#[test]
fn hydroxide_out_of_scale_is_invalid() {
    assert_eq!(hydroxide_from_ph(-0.5), Err(InvalidInput::OutOfScale(-0.5)));
    assert_eq!(hydroxide_from_ph(14.5), Err(InvalidInput::OutOfScale(14.5)));
}

// --- Algebraic identities ---

#[test]
fn ion_product_holds_across_scale() {
    for tenth in 0..=140 {
        let ph = f64::from(tenth) / 10.0;
        let product = hydrogen_from_ph(ph).unwrap() * hydroxide_from_ph(ph).unwrap();
        assert!(
            approx_eq_rel(product, ION_PRODUCT),
            "ion product off at pH {ph}: {product}"
        );
    }
}

#[test]
fn concentration_round_trip() {
    for &c in &[1.0, 0.1, 3.5e-4, 1e-7, 2.5e-11, 1e-14] {
        let back = hydrogen_from_ph(ph_from_hydrogen(c).unwrap()).unwrap();
        assert!(approx_eq_rel(back, c), "round trip drifted for {c}: {back}");
    }
}

#[test]
fn hydroxide_round_trip() {
    for &c in &[1.0, 2e-3, 1e-7, 4.2e-12] {
        let ph = ph_from_hydroxide(c).unwrap();
        let back = hydroxide_from_ph(ph).unwrap();
        assert!(approx_eq_rel(back, c), "round trip drifted for {c}: {back}");
    }
}

// --- clamp_to_scale ---

#[test]
fn clamp_passes_in_range_values() {
    assert_eq!(clamp_to_scale(7.3), 7.3);
}

#[test]
fn clamp_bounds() {
    assert_eq!(clamp_to_scale(-2.0), 0.0);
    assert_eq!(clamp_to_scale(20.0), 14.0);
}

// --- classify ---

#[test]
fn classify_acid() {
    assert_eq!(classify(2.0), Acidity::Acidic);
    assert_eq!(classify(6.9), Acidity::Acidic);
}

#[test]
fn classify_neutral_band() {
    assert_eq!(classify(7.0), Acidity::Neutral);
    assert_eq!(classify(6.96), Acidity::Neutral);
    assert_eq!(classify(7.04), Acidity::Neutral);
}

#[test]
fn classify_base() {
    assert_eq!(classify(7.1), Acidity::Basic);
    assert_eq!(classify(14.0), Acidity::Basic);
}

#[test]
fn acidity_labels() {
    assert_eq!(Acidity::Acidic.label(), "Acidic");
    assert_eq!(Acidity::Neutral.label(), "Neutral");
    assert_eq!(Acidity::Basic.label(), "Basic (Alkaline)");
}

// --- error display ---

#[test]
fn invalid_input_messages_name_the_value() {
    let err = ph_from_hydrogen(-1.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "concentration must be greater than 0 mol/L, got -1"
    );
    let err = ph_from_poh(15.0).unwrap_err();
    assert_eq!(err.to_string(), "value must be between 0 and 14, got 15");
}
