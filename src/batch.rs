//! Batches of sensor packages, evaluated independently of one another.

use crate::dispatch::create_workout;
use crate::error::Result;
use crate::formula::FormulaConfig;
use crate::report::WorkoutReport;
use crate::workout::Workout;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One sensor package: an activity code and its positional values.
///
/// Serialized as a two-element array, e.g. `["RUN", [15000, 1, 75]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<f64>)", into = "(String, Vec<f64>)")]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl From<(String, Vec<f64>)> for Package {
    fn from((code, values): (String, Vec<f64>)) -> Self {
        Self { code, values }
    }
}

impl From<Package> for (String, Vec<f64>) {
    fn from(p: Package) -> Self {
        (p.code, p.values)
    }
}

impl From<(&str, &[f64])> for Package {
    fn from((code, values): (&str, &[f64])) -> Self {
        Self {
            code: code.to_string(),
            values: values.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub package: Package,
    pub result: Result<WorkoutReport>,
}

pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::from(("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0][..])),
        Package::from(("RUN", &[15000.0, 1.0, 75.0][..])),
        Package::from(("WLK", &[9000.0, 1.0, 75.0, 180.0][..])),
    ]
}

pub fn evaluate(package: &Package, config: &FormulaConfig) -> Result<WorkoutReport> {
    create_workout(&package.code, &package.values, config)?.build_report()
}

/// Evaluate every package in order. A failing package yields an error
/// outcome without affecting the others.
pub fn process(packages: Vec<Package>, config: &FormulaConfig) -> Vec<Outcome> {
    packages
        .into_iter()
        .map(|package| {
            let result = evaluate(&package, config);
            match &result {
                Ok(report) => tracing::debug!(
                    code = %package.code,
                    calories = report.calories,
                    "package evaluated"
                ),
                Err(e) => tracing::warn!(
                    code = %package.code,
                    values = ?package.values,
                    err = %e,
                    "package rejected"
                ),
            }
            Outcome { package, result }
        })
        .collect()
}

/// Read a JSON array of packages from `path`.
pub fn load_packages(path: &Path) -> anyhow::Result<Vec<Package>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading packages: {}", path.display()))?;
    let packages: Vec<Package> = serde_json::from_str(&text)
        .with_context(|| format!("parsing packages: {}", path.display()))?;

    tracing::info!(path = %path.display(), packages = packages.len(), "loaded packages");
    Ok(packages)
}
