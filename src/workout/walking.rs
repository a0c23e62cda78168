use super::{Activity, BaseInputs, MIN_IN_H, Workout};
use crate::error::Result;
use crate::formula::WalkingDivision;

const WEIGHT_MULTIPLIER: f64 = 0.035;
const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MS: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingParams {
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    inputs: BaseInputs,
    height_cm: f64,
    division: WalkingDivision,
}

impl Walking {
    pub const fn new(params: WalkingParams, division: WalkingDivision) -> Self {
        Self {
            inputs: BaseInputs {
                action_count: params.action_count,
                duration_hours: params.duration_hours,
                weight_kg: params.weight_kg,
            },
            height_cm: params.height_cm,
            division,
        }
    }

    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Workout for Walking {
    fn activity(&self) -> Activity {
        Activity::Walking
    }

    fn inputs(&self) -> &BaseInputs {
        &self.inputs
    }

    fn compute_calories(&self) -> Result<f64> {
        let speed_ms = self.mean_speed_kmh()? * KMH_IN_MS;
        let height_m = self.height_cm / CM_IN_M;
        let minutes = self.inputs.duration_hours * MIN_IN_H;
        let weight = self.inputs.weight_kg;

        let speed_term = self.division.divide(speed_ms * speed_ms, height_m);
        Ok((WEIGHT_MULTIPLIER * weight + speed_term * SPEED_HEIGHT_MULTIPLIER * weight) * minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(division: WalkingDivision) -> Walking {
        Walking::new(
            WalkingParams {
                action_count: 9000,
                duration_hours: 1.0,
                weight_kg: 75.0,
                height_cm: 180.0,
            },
            division,
        )
    }

    #[test]
    fn true_division() {
        let kcal = sample(WalkingDivision::True).compute_calories().unwrap();
        assert_eq!(format!("{kcal:.3}"), "349.252");
    }

    #[test]
    fn floor_division() {
        let kcal = sample(WalkingDivision::Floor).compute_calories().unwrap();
        assert_eq!(format!("{kcal:.3}"), "288.000");
    }

    #[test]
    fn repeated_queries_leave_height_untouched() {
        let w = sample(WalkingDivision::True);
        let first = w.compute_calories().unwrap();
        let second = w.compute_calories().unwrap();
        assert!((first - second).abs() < f64::EPSILON);
        assert!((w.height_cm() - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn two_hour_walk_matches_reference() {
        let w = Walking::new(
            WalkingParams {
                action_count: 12_000,
                duration_hours: 2.0,
                weight_kg: 80.0,
                height_cm: 170.0,
            },
            WalkingDivision::True,
        );
        let report = w.build_report().unwrap();
        assert_eq!(report.activity_name, "SportsWalking");
        assert_eq!(format!("{:.3}", report.mean_speed_kmh), "3.900");
        assert_eq!(format!("{:.3}", report.calories), "528.504");
    }
}
