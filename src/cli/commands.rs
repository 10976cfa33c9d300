use std::io::Write;

use anyhow::Context;
use tracing::{debug, warn};

use crate::core::forecast;
use crate::error::{ForecastError, ForecastResult};
use crate::types::{ForecastInput, ForecastRecord};

/// Positional tokens consumed by a forecast
const REQUIRED_ARGS: usize = 2;

/// Parse one positional token as a real number.
///
/// Surrounding whitespace is ignored, and single underscores between digits
/// group them (`1_000.5`).
pub fn parse_number(token: &str) -> ForecastResult<f64> {
    let trimmed = token.trim();
    strip_digit_separators(trimmed)
        .as_deref()
        .unwrap_or(trimmed)
        .parse::<f64>()
        .map_err(|source| ForecastError::InvalidNumber {
            token: token.to_string(),
            source,
        })
}

/// Remove `_` separators when every one of them sits between two ASCII digits.
///
/// Returns `None` when there is nothing to strip or a separator is misplaced;
/// a misplaced `_` is left in so the parse fails.
fn strip_digit_separators(token: &str) -> Option<String> {
    if !token.contains('_') {
        return None;
    }
    let bytes = token.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    well_placed.then(|| token.replace('_', ""))
}

/// Validate the positional tokens and parse the first two into a [`ForecastInput`].
pub fn parse_input<S: AsRef<str>>(args: &[S]) -> ForecastResult<ForecastInput> {
    if args.len() < REQUIRED_ARGS {
        return Err(ForecastError::InvalidArguments);
    }
    if args.len() > REQUIRED_ARGS {
        warn!(
            ignored = args.len() - REQUIRED_ARGS,
            "extra arguments ignored"
        );
    }

    let current_revenue = parse_number(args[0].as_ref())?;
    let growth_rate = parse_number(args[1].as_ref())?;
    Ok(ForecastInput::new(current_revenue, growth_rate))
}

/// Parse, compute and build the success record.
pub fn try_run<S: AsRef<str>>(args: &[S]) -> ForecastResult<ForecastRecord> {
    let input = parse_input(args)?;
    debug!(
        current_revenue = input.current_revenue,
        growth_rate = input.growth_rate,
        "parsed forecast input"
    );

    let projected = forecast::forecast(&input)?;
    debug!(forecast = projected, "computed forecast");

    Ok(ForecastRecord::success(input, projected))
}

/// Execute the predict command.
///
/// Never fails: every error becomes an error record.
pub fn run<S: AsRef<str>>(args: &[S]) -> ForecastRecord {
    try_run(args).unwrap_or_else(|err| {
        debug!(error = %err, "forecast failed");
        ForecastRecord::from(err)
    })
}

/// Write `record` to `out` as one JSON line.
pub fn emit<W: Write>(mut out: W, record: &ForecastRecord) -> anyhow::Result<()> {
    let line = record
        .to_json()
        .context("Failed to serialize result record")?;
    writeln!(out, "{line}").context("Failed to write result record")?;
    out.flush().context("Failed to flush result record")?;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
