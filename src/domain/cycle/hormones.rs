//! Illustrative hormone levels per cycle phase.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::Phase;

/// Reproductive hormones tracked in the phase overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hormone {
    Estrogen,
    Progesterone,
    Fsh,
    Lh,
}

impl Hormone {
    pub const ALL: [Hormone; 4] = [
        Hormone::Estrogen,
        Hormone::Progesterone,
        Hormone::Fsh,
        Hormone::Lh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Hormone::Estrogen => "Estrogen",
            Hormone::Progesterone => "Progesterone",
            Hormone::Fsh => "FSH",
            Hormone::Lh => "LH",
        }
    }
}

impl fmt::Display for Hormone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Relative hormone level on a 0-100 scale. Not a lab value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HormoneLevel(u8);

impl HormoneLevel {
    const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Hormone levels for one phase.
pub type HormoneProfile = BTreeMap<Hormone, HormoneLevel>;

/// Fixed table: estrogen, progesterone, FSH, LH.
const fn levels(phase: Phase) -> [u8; 4] {
    match phase {
        Phase::Menstruation => [20, 10, 40, 20],
        Phase::Follicular => [60, 20, 70, 30],
        Phase::Ovulation => [90, 30, 90, 100],
        Phase::Luteal => [40, 90, 20, 20],
    }
}

/// Returns the illustrative hormone profile for a phase.
pub fn hormone_profile(phase: Phase) -> HormoneProfile {
    Hormone::ALL
        .into_iter()
        .zip(levels(phase))
        .map(|(hormone, level)| (hormone, HormoneLevel::new(level)))
        .collect()
}
