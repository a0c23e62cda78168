use super::{Activity, BaseInputs, M_IN_KM, Workout, per_hour};
use crate::error::Result;

/// Distance covered by one stroke, in metres.
pub const STROKE_LENGTH_M: f64 = 1.38;
const SPEED_OFFSET: f64 = 1.1;
const WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingParams {
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_lengths_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    inputs: BaseInputs,
    pool_length_m: f64,
    pool_lengths_count: u64,
}

impl Swimming {
    pub const fn new(params: SwimmingParams) -> Self {
        Self {
            inputs: BaseInputs {
                action_count: params.action_count,
                duration_hours: params.duration_hours,
                weight_kg: params.weight_kg,
            },
            pool_length_m: params.pool_length_m,
            pool_lengths_count: params.pool_lengths_count,
        }
    }

    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub const fn pool_lengths_count(&self) -> u64 {
        self.pool_lengths_count
    }
}

impl Workout for Swimming {
    fn activity(&self) -> Activity {
        Activity::Swimming
    }

    fn inputs(&self) -> &BaseInputs {
        &self.inputs
    }

    fn step_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    // Speed comes from pool laps, not strokes.
    #[allow(clippy::cast_precision_loss)]
    fn mean_speed_kmh(&self) -> Result<f64> {
        let swum_km = self.pool_length_m * self.pool_lengths_count as f64 / M_IN_KM;
        per_hour(swum_km, self.inputs.duration_hours)
    }

    fn compute_calories(&self) -> Result<f64> {
        let speed = self.mean_speed_kmh()?;
        Ok((speed + SPEED_OFFSET)
            * WEIGHT_MULTIPLIER
            * self.inputs.weight_kg
            * self.inputs.duration_hours)
    }
}
