use crate::formula::{RunningFormula, WalkingDivision};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "trenirovka",
    about = "Compute distance, speed and calories for workout sensor packages"
)]
pub struct Cli {
    /// JSON file with packages, e.g. `[["RUN", [15000, 1, 75]]]`.
    ///
    /// When omitted the built-in sample batch is used.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Running calorie revision
    #[arg(long, value_enum, default_value_t = RunningFormula::Current)]
    pub running_formula: RunningFormula,

    /// Division used by the walking speed term
    #[arg(long, value_enum, default_value_t = WalkingDivision::True)]
    pub walking_division: WalkingDivision,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
