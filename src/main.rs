#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use std::io;
use trenirovka::{FormulaConfig, batch, cli, utils};

#[macro_use]
extern crate trenirovka;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let config = FormulaConfig {
        running: cli.running_formula,
        walking: cli.walking_division,
    };

    let packages = match &cli.input {
        Some(path) => batch::load_packages(path)?,
        None => batch::sample_packages(),
    };
    dlog!(
        "packages={} running={:?} walking={:?}",
        packages.len(),
        config.running,
        config.walking
    );

    let outcomes = batch::process(packages, &config);

    let mut stdout = io::stdout().lock();
    match cli.format {
        cli::Format::Text => utils::write_text(&mut stdout, &outcomes)?,
        cli::Format::Json => utils::write_json(&mut stdout, &outcomes)?,
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} packages failed", outcomes.len());
    }

    Ok(())
}
