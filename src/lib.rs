pub mod batch;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod formula;
pub mod report;
pub mod utils;
pub mod workout;

pub use dispatch::{AnyWorkout, create_workout};
pub use error::{Result, WorkoutError};
pub use formula::{FormulaConfig, RunningFormula, WalkingDivision};
pub use report::WorkoutReport;
pub use workout::{Activity, Workout};
