//! Calorie formula revisions.
//!
//! Two revisions of the calorie formulas are in circulation. They differ in
//! the running offset and in how the walking speed term is divided, so both
//! are selectable here instead of being baked into the variants.

use clap::ValueEnum;

/// Offset applied to the running calorie term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RunningFormula {
    /// `18 * speed + 1.79`
    Legacy,
    /// `18 * speed - 20`
    #[default]
    Current,
}

impl RunningFormula {
    pub const fn offset(self) -> f64 {
        match self {
            Self::Legacy => 1.79,
            Self::Current => -20.0,
        }
    }
}

/// How `speed_ms^2 / height_m` is divided in the walking formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum WalkingDivision {
    #[default]
    True,
    Floor,
}

impl WalkingDivision {
    pub fn divide(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::True => lhs / rhs,
            Self::Floor => (lhs / rhs).floor(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormulaConfig {
    pub running: RunningFormula,
    pub walking: WalkingDivision,
}
