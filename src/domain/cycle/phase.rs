//! The four physiological phases of a menstrual cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A segment of the menstrual cycle, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Menstruation,
    Follicular,
    Ovulation,
    Luteal,
}

impl Phase {
    /// All phases in the order they occur within a cycle.
    pub const ALL: [Phase; 4] = [
        Phase::Menstruation,
        Phase::Follicular,
        Phase::Ovulation,
        Phase::Luteal,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Menstruation => "Menstruation",
            Phase::Follicular => "Follicular",
            Phase::Ovulation => "Ovulation",
            Phase::Luteal => "Luteal",
        }
    }

    /// Calendar color used by the presentation layer.
    pub fn display_color(&self) -> &'static str {
        match self {
            Phase::Menstruation => "red",
            Phase::Follicular => "green",
            Phase::Ovulation => "orange",
            Phase::Luteal => "purple",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
