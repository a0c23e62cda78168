use super::{Activity, BaseInputs, M_IN_KM, MIN_IN_H, Workout};
use crate::error::Result;
use crate::formula::RunningFormula;

const SPEED_MULTIPLIER: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningParams {
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    inputs: BaseInputs,
    formula: RunningFormula,
}

impl Running {
    pub const fn new(params: RunningParams, formula: RunningFormula) -> Self {
        Self {
            inputs: BaseInputs {
                action_count: params.action_count,
                duration_hours: params.duration_hours,
                weight_kg: params.weight_kg,
            },
            formula,
        }
    }
}

impl Workout for Running {
    fn activity(&self) -> Activity {
        Activity::Running
    }

    fn inputs(&self) -> &BaseInputs {
        &self.inputs
    }

    fn compute_calories(&self) -> Result<f64> {
        let speed = self.mean_speed_kmh()?;
        let BaseInputs {
            duration_hours,
            weight_kg,
            ..
        } = self.inputs;

        Ok(
            (SPEED_MULTIPLIER * speed + self.formula.offset()) * weight_kg / M_IN_KM
                * (duration_hours * MIN_IN_H),
        )
    }
}
