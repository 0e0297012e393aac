//! Tabular output for projections

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::projection::{Projection, ScenarioResult};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Flattened result row for CSV output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultRow<'a> {
    key: char,
    label: &'a str,
    npv: f64,
    terminal: f64,
    irr: Option<f64>,
    recommended: bool,
}

/// Write one CSV row per simulated year
pub fn write_yearly_csv<W: Write>(writer: W, projection: &Projection) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in &projection.yearly_data {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write one CSV row per strategy, flagging the recommended one
pub fn write_results_csv<W: Write>(writer: W, projection: &Projection) -> Result<(), ReportError> {
    let best = projection.recommended().map(|r| r.strategy);
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in &projection.results {
        csv_writer.serialize(result_row(result, best == Some(result.strategy)))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn result_row(result: &ScenarioResult, recommended: bool) -> ResultRow<'_> {
    ResultRow {
        key: result.strategy.key(),
        label: &result.label,
        npv: result.npv,
        terminal: result.terminal,
        irr: result.irr,
        recommended,
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$1,222,000` or `-$5,300`
///
/// Non-finite values render as `-`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
