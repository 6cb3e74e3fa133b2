//! Read-only catalog of common acids and bases with their typical pH.
//!
//! The catalog is fixed at compile time and ordered for display: acids
//! ascending by pH, then neutral water, then bases ascending by pH. The
//! UI's Solutions tab renders it as a dropdown and looks entries up by
//! display name when the user picks one.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;

/// Whether a catalog entry is an acid or a base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionKind {
    Acid,
    Base,
}

/// A named reference solution with its typical pH.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    /// Display name, e.g. `"Lemon Juice"`.
    pub name: &'static str,
    /// Acid or base classification.
    pub kind: SolutionKind,
    /// Typical pH of the solution.
    pub typical_ph: f64,
    /// Chemical formula of the dominant species, if one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<&'static str>,
    /// One-line description shown in the notes field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

const SOLUTIONS: &[Solution] = &[
    // Acids
    Solution {
        name: "Battery Acid",
        kind: SolutionKind::Acid,
        typical_ph: 0.5,
        formula: Some("H\u{2082}SO\u{2084}"),
        description: Some("Sulfuric acid used in car batteries"),
    },
    Solution {
        name: "Gastric Acid",
        kind: SolutionKind::Acid,
        typical_ph: 1.5,
        formula: Some("HCl"),
        description: Some("Found in stomach acid"),
    },
    Solution {
        name: "Lemon Juice",
        kind: SolutionKind::Acid,
        typical_ph: 2.4,
        formula: Some("C\u{2086}H\u{2088}O\u{2087}"),
        description: Some("Citric acid in lemons"),
    },
    Solution {
        name: "Vinegar",
        kind: SolutionKind::Acid,
        typical_ph: 2.8,
        formula: Some("CH\u{2083}COOH"),
        description: Some("Acetic acid in vinegar"),
    },
    Solution {
        name: "Orange Juice",
        kind: SolutionKind::Acid,
        typical_ph: 3.5,
        formula: None,
        description: Some("Citrus juice"),
    },
    Solution {
        name: "Tomato Juice",
        kind: SolutionKind::Acid,
        typical_ph: 4.3,
        formula: None,
        description: Some("Slightly acidic fruit juice"),
    },
    Solution {
        name: "Black Coffee",
        kind: SolutionKind::Acid,
        typical_ph: 5.0,
        formula: None,
        description: Some("Brewed coffee without additives"),
    },
    Solution {
        name: "Urine",
        kind: SolutionKind::Acid,
        typical_ph: 6.0,
        formula: None,
        description: Some("Human urine is slightly acidic"),
    },
    Solution {
        name: "Milk",
        kind: SolutionKind::Acid,
        typical_ph: 6.5,
        formula: None,
        description: Some("Slightly acidic dairy product"),
    },
    // Neutral (catalogued under base, as upstream has it)
    Solution {
        name: "Pure Water",
        kind: SolutionKind::Base,
        typical_ph: 7.0,
        formula: Some("H\u{2082}O"),
        description: Some("Completely neutral"),
    },
    // Bases
    Solution {
        name: "Blood",
        kind: SolutionKind::Base,
        typical_ph: 7.4,
        formula: None,
        description: Some("Slightly basic human blood"),
    },
    Solution {
        name: "Seawater",
        kind: SolutionKind::Base,
        typical_ph: 8.0,
        formula: None,
        description: Some("Slightly basic ocean water"),
    },
    Solution {
        name: "Baking Soda",
        kind: SolutionKind::Base,
        typical_ph: 9.0,
        formula: Some("NaHCO\u{2083}"),
        description: Some("Sodium bicarbonate solution"),
    },
    Solution {
        name: "Milk of Magnesia",
        kind: SolutionKind::Base,
        typical_ph: 10.5,
        formula: Some("Mg(OH)\u{2082}"),
        description: Some("Magnesium hydroxide antacid"),
    },
    Solution {
        name: "Household Ammonia",
        kind: SolutionKind::Base,
        typical_ph: 11.0,
        formula: Some("NH\u{2083}"),
        description: Some("Cleaning solution"),
    },
    Solution {
        name: "Bleach",
        kind: SolutionKind::Base,
        typical_ph: 12.5,
        formula: Some("NaClO"),
        description: Some("Sodium hypochlorite cleaner"),
    },
    Solution {
        name: "Drain Cleaner",
        kind: SolutionKind::Base,
        typical_ph: 14.0,
        formula: Some("NaOH"),
        description: Some("Sodium hydroxide-based cleaner"),
    },
];

/// The fixed catalog, in display order.
#[must_use]
pub fn solutions() -> &'static [Solution] {
    SOLUTIONS
}

/// Look up a catalog entry by its display name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Solution> {
    SOLUTIONS.iter().find(|solution| solution.name == name)
}
