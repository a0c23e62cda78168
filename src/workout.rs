//! Workout model: shared distance/speed math and the per-activity calorie formulas.

mod running;
mod swimming;
mod walking;

pub use running::{Running, RunningParams};
pub use swimming::{Swimming, SwimmingParams};
pub use walking::{Walking, WalkingParams};

use crate::error::{Result, WorkoutError};
use crate::report::WorkoutReport;

/// Distance covered by one step, in metres.
pub const STEP_LENGTH_M: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Running,
    Walking,
    Swimming,
}

impl Activity {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

    /// Name shown in the rendered report.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }
}

/// Inputs every workout carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseInputs {
    /// Steps for running/walking, strokes for swimming.
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

pub trait Workout {
    fn activity(&self) -> Activity;

    fn inputs(&self) -> &BaseInputs;

    fn compute_calories(&self) -> Result<f64>;

    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    #[allow(clippy::cast_precision_loss)]
    fn distance_km(&self) -> f64 {
        self.inputs().action_count as f64 * self.step_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> Result<f64> {
        per_hour(self.distance_km(), self.inputs().duration_hours)
    }

    fn build_report(&self) -> Result<WorkoutReport> {
        let mean_speed_kmh = self.mean_speed_kmh()?;
        let calories = self.compute_calories()?;
        if !calories.is_finite() {
            return Err(WorkoutError::ArithmeticDomain("calories are not finite"));
        }

        Ok(WorkoutReport {
            activity_name: self.activity().display_name(),
            duration_hours: self.inputs().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh,
            calories,
        })
    }
}

/// Divides a quantity by a duration in hours, refusing zero or degenerate results.
pub(crate) fn per_hour(quantity: f64, duration_hours: f64) -> Result<f64> {
    if duration_hours == 0.0 {
        return Err(WorkoutError::ArithmeticDomain("duration is zero"));
    }
    let rate = quantity / duration_hours;
    if rate.is_finite() {
        Ok(rate)
    } else {
        Err(WorkoutError::ArithmeticDomain("speed is not finite"))
    }
}
