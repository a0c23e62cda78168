use serde::Serialize;
use std::fmt;

/// Computed metrics for a single workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutReport {
    pub activity_name: &'static str,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl WorkoutReport {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.activity_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}
