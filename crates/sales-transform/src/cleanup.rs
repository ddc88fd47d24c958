//! Dataset-specific cleanup rules.

use polars::prelude::*;
use serde::Serialize;

use sales_model::CleanupRule;

use crate::datetime::{parse_date_value, to_iso_date};
use crate::error::Result;
use crate::frame::{has_column, require_column};

/// Outcome of [`apply_cleanup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub rule: CleanupRule,
    /// False when the rule is `None` or its column is absent.
    pub applied: bool,
    /// Cells whose value changed.
    pub changed: usize,
    /// Non-blank cells that could not be parsed as dates.
    pub unparsed: usize,
}

fn text_values(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let col = require_column(df, column)?.cast(&DataType::String)?;
    Ok(col
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Lower-cases and trims every value of a text column.
///
/// Returns the new frame and the number of cells that changed.
pub fn lowercase_trim(df: &DataFrame, column: &str) -> Result<(DataFrame, usize)> {
    let values = text_values(df, column)?;
    let mut changed = 0;
    let cleaned: Vec<Option<String>> = values
        .into_iter()
        .map(|value| {
            value.map(|text| {
                let normalized = text.trim().to_lowercase();
                if normalized != text {
                    changed += 1;
                }
                normalized
            })
        })
        .collect();

    let mut out = df.clone();
    out.with_column(Series::new(column.into(), cleaned))?;
    Ok((out, changed))
}

/// Parses a column into ISO `YYYY-MM-DD` dates.
///
/// Unparseable values become null. Returns the new frame, the number of
/// cells rewritten, and the number of non-blank cells that failed to parse.
pub fn parse_dates(df: &DataFrame, column: &str) -> Result<(DataFrame, usize, usize)> {
    let values = text_values(df, column)?;
    let mut changed = 0;
    let mut unparsed = 0;
    let parsed: Vec<Option<String>> = values
        .into_iter()
        .map(|value| {
            let text = value?;
            match parse_date_value(&text) {
                Some(date) => {
                    let iso = to_iso_date(date);
                    if iso != text {
                        changed += 1;
                    }
                    Some(iso)
                }
                None => {
                    if !text.trim().is_empty() {
                        unparsed += 1;
                    }
                    None
                }
            }
        })
        .collect();

    let mut out = df.clone();
    out.with_column(Series::new(column.into(), parsed))?;
    Ok((out, changed, unparsed))
}

/// Applies a dataset's cleanup rule.
///
/// A rule whose column is absent leaves the frame untouched and reports
/// `applied: false`.
pub fn apply_cleanup(df: &DataFrame, rule: &CleanupRule) -> Result<(DataFrame, CleanupReport)> {
    let mut report = CleanupReport {
        rule: rule.clone(),
        applied: false,
        changed: 0,
        unparsed: 0,
    };

    let out = match rule {
        CleanupRule::None => df.clone(),
        CleanupRule::LowercaseTrim { column } if has_column(df, column) => {
            let (out, changed) = lowercase_trim(df, column)?;
            report.applied = true;
            report.changed = changed;
            out
        }
        CleanupRule::ParseDates { column } if has_column(df, column) => {
            let (out, changed, unparsed) = parse_dates(df, column)?;
            report.applied = true;
            report.changed = changed;
            report.unparsed = unparsed;
            out
        }
        CleanupRule::LowercaseTrim { .. } | CleanupRule::ParseDates { .. } => df.clone(),
    };

    Ok((out, report))
}
