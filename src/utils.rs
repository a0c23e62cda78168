use crate::batch::Outcome;
use anyhow::Result;
use std::io::Write;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging on stderr.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let level = level_name(verbose, quiet);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,trenirovka={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

fn level_name(verbose: u8, quiet: u8) -> &'static str {
    match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    }
}

/// Write one rendered line per successful outcome.
pub fn write_text(out: &mut impl Write, outcomes: &[Outcome]) -> Result<()> {
    for report in outcomes.iter().filter_map(|o| o.result.as_ref().ok()) {
        writeln!(out, "{report}")?;
    }
    Ok(())
}

/// Write successful outcomes as a pretty JSON array of reports.
pub fn write_json(out: &mut impl Write, outcomes: &[Outcome]) -> Result<()> {
    let reports: Vec<_> = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .collect();
    serde_json::to_writer_pretty(&mut *out, &reports)?;
    writeln!(out)?;
    Ok(())
}
