//! Activity code lookup and construction from flat sensor values.

use crate::error::{Result, WorkoutError};
use crate::formula::FormulaConfig;
use crate::report::WorkoutReport;
use crate::workout::{
    Activity, BaseInputs, Running, RunningParams, Swimming, SwimmingParams, Walking,
    WalkingParams, Workout,
};
use std::str::FromStr;

impl Activity {
    /// Short code used by the sensor packages.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::Walking => "WLK",
        }
    }

    /// Number of positional values the constructor expects.
    pub const fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }
}

impl FromStr for Activity {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.code() == code)
            .ok_or_else(|| WorkoutError::UnknownActivityCode(code.to_string()))
    }
}

/// A constructed workout of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyWorkout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl AnyWorkout {
    fn as_dyn(&self) -> &dyn Workout {
        match self {
            Self::Running(w) => w,
            Self::Walking(w) => w,
            Self::Swimming(w) => w,
        }
    }
}

impl Workout for AnyWorkout {
    fn activity(&self) -> Activity {
        self.as_dyn().activity()
    }

    fn inputs(&self) -> &BaseInputs {
        self.as_dyn().inputs()
    }

    fn compute_calories(&self) -> Result<f64> {
        self.as_dyn().compute_calories()
    }

    fn step_length_m(&self) -> f64 {
        self.as_dyn().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_dyn().distance_km()
    }

    fn mean_speed_kmh(&self) -> Result<f64> {
        self.as_dyn().mean_speed_kmh()
    }

    fn build_report(&self) -> Result<WorkoutReport> {
        self.as_dyn().build_report()
    }
}

type Factory = fn(&[f64], &FormulaConfig) -> Result<AnyWorkout>;

const fn factory(activity: Activity) -> Factory {
    match activity {
        Activity::Running => build_running,
        Activity::Walking => build_walking,
        Activity::Swimming => build_swimming,
    }
}

/// Look up `code` and build the matching workout from `values`.
///
/// Values are positional: count, duration (h), weight (kg), then
/// height (cm) for walking or pool length (m) and pool lengths for swimming.
pub fn create_workout(code: &str, values: &[f64], config: &FormulaConfig) -> Result<AnyWorkout> {
    let activity: Activity = code.parse()?;
    if values.len() != activity.arity() {
        return Err(WorkoutError::ArityMismatch {
            code: activity.code(),
            expected: activity.arity(),
            got: values.len(),
        });
    }
    factory(activity)(values, config)
}

fn build_running(v: &[f64], config: &FormulaConfig) -> Result<AnyWorkout> {
    let params = RunningParams {
        action_count: whole_count(v[0])?,
        duration_hours: v[1],
        weight_kg: v[2],
    };
    Ok(AnyWorkout::Running(Running::new(params, config.running)))
}

fn build_walking(v: &[f64], config: &FormulaConfig) -> Result<AnyWorkout> {
    let params = WalkingParams {
        action_count: whole_count(v[0])?,
        duration_hours: v[1],
        weight_kg: v[2],
        height_cm: v[3],
    };
    Ok(AnyWorkout::Walking(Walking::new(params, config.walking)))
}

fn build_swimming(v: &[f64], _config: &FormulaConfig) -> Result<AnyWorkout> {
    let params = SwimmingParams {
        action_count: whole_count(v[0])?,
        duration_hours: v[1],
        weight_kg: v[2],
        pool_length_m: v[3],
        pool_lengths_count: whole_count(v[4])?,
    };
    Ok(AnyWorkout::Swimming(Swimming::new(params)))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_count(value: f64) -> Result<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(WorkoutError::InvalidCount(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{RunningFormula, WalkingDivision};

    #[test]
    fn codes_round_trip() {
        for activity in Activity::ALL {
            assert_eq!(activity.code().parse::<Activity>().unwrap(), activity);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = create_workout("XYZ", &[1.0, 1.0, 1.0], &FormulaConfig::default()).unwrap_err();
        assert_eq!(err, WorkoutError::UnknownActivityCode("XYZ".into()));
        assert!("run".parse::<Activity>().is_err());
    }

    #[test]
    fn arity_is_checked_per_activity() {
        let cfg = FormulaConfig::default();
        let err = create_workout("WLK", &[9000.0, 1.0, 75.0], &cfg).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::ArityMismatch {
                code: "WLK",
                expected: 4,
                got: 3
            }
        );
        assert!(create_workout("RUN", &[1.0, 1.0, 1.0, 1.0], &cfg).is_err());
        assert!(create_workout("SWM", &[], &cfg).is_err());
    }

    #[test]
    fn fractional_count_is_rejected() {
        let err =
            create_workout("RUN", &[10.5, 1.0, 75.0], &FormulaConfig::default()).unwrap_err();
        assert_eq!(err, WorkoutError::InvalidCount(10.5));
        assert!(create_workout("RUN", &[-1.0, 1.0, 75.0], &FormulaConfig::default()).is_err());
    }

    #[test]
    fn count_past_u64_range_is_rejected() {
        let two_pow_64 = 18_446_744_073_709_551_616.0_f64;
        assert_eq!(whole_count(two_pow_64), Err(WorkoutError::InvalidCount(two_pow_64)));
        assert!(whole_count(f64::INFINITY).is_err());
        assert_eq!(whole_count(9_007_199_254_740_992.0), Ok(9_007_199_254_740_992));
    }

    #[test]
    fn dispatch_matches_direct_construction() {
        let cfg = FormulaConfig {
            running: RunningFormula::Legacy,
            walking: WalkingDivision::Floor,
        };

        let run = create_workout("RUN", &[15000.0, 1.0, 75.0], &cfg).unwrap();
        let direct = Running::new(
            RunningParams {
                action_count: 15000,
                duration_hours: 1.0,
                weight_kg: 75.0,
            },
            RunningFormula::Legacy,
        );
        assert_eq!(run, AnyWorkout::Running(direct));

        let walk = create_workout("WLK", &[9000.0, 1.0, 75.0, 180.0], &cfg).unwrap();
        let direct = Walking::new(
            WalkingParams {
                action_count: 9000,
                duration_hours: 1.0,
                weight_kg: 75.0,
                height_cm: 180.0,
            },
            WalkingDivision::Floor,
        );
        assert_eq!(walk, AnyWorkout::Walking(direct));

        let swim = create_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], &cfg).unwrap();
        let AnyWorkout::Swimming(s) = &swim else {
            panic!("expected swimming, got {swim:?}");
        };
        assert_eq!(s.inputs().action_count, 720);
        assert_eq!(s.pool_lengths_count(), 40);
        assert!((s.pool_length_m() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn any_workout_delegates_overrides() {
        let swim = create_workout(
            "SWM",
            &[720.0, 1.0, 80.0, 25.0, 40.0],
            &FormulaConfig::default(),
        )
        .unwrap();
        assert!((swim.step_length_m() - 1.38).abs() < f64::EPSILON);
        assert!((swim.mean_speed_kmh().unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(swim.activity(), Activity::Swimming);
    }
}
