//! Missing-value handling: literal fills and reward imputation.

use polars::prelude::*;
use serde::Serialize;

use sales_common::{any_to_f64, any_to_i64, any_to_string, is_missing};
use sales_model::{MissingValueRules, RewardRule};

use crate::error::Result;
use crate::frame::{column_names, count_missing, has_column};

/// Cells filled with a literal value in one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillCount {
    pub column: String,
    pub value: String,
    pub filled: usize,
}

/// Corrections applied by the reward rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewardCorrection {
    /// Missing rewards replaced by the truncated amount.
    pub imputed: usize,
    /// Rewards above twice the amount replaced by the truncated amount.
    pub clamped: usize,
}

/// What [`handle_missing_values`] changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissingValueReport {
    /// Missing cells per column before any rule ran.
    pub before: Vec<(String, usize)>,
    /// Missing cells per column after all rules ran.
    pub after: Vec<(String, usize)>,
    pub fills: Vec<FillCount>,
    /// `None` when the reward or amount column is absent.
    pub reward: Option<RewardCorrection>,
}

impl MissingValueReport {
    /// Total number of cells filled by literal rules.
    pub fn total_filled(&self) -> usize {
        self.fills.iter().map(|fill| fill.filled).sum()
    }
}

/// Counts missing cells (null, blank, NaN) per column, in column order.
pub fn missing_counts(df: &DataFrame) -> Result<Vec<(String, usize)>> {
    df.get_columns()
        .iter()
        .map(|col| Ok((col.name().to_string(), count_missing(col)?)))
        .collect()
}

/// Applies the configured missing-value rules.
///
/// Rules run in a fixed order: per-column literal fills, the reward rule,
/// then the catch-all fill. A rule whose columns are absent is skipped.
pub fn handle_missing_values(
    df: &DataFrame,
    rules: &MissingValueRules,
) -> Result<(DataFrame, MissingValueReport)> {
    let mut out = df.clone();
    let mut report = MissingValueReport {
        before: missing_counts(df)?,
        ..MissingValueReport::default()
    };

    for fill in &rules.fills {
        if !has_column(&out, &fill.column) {
            continue;
        }
        let filled = fill_column(&mut out, &fill.column, &fill.value)?;
        report.fills.push(FillCount {
            column: fill.column.clone(),
            value: fill.value.clone(),
            filled,
        });
    }

    if let Some(reward) = &rules.reward {
        report.reward = apply_reward_rule(&mut out, reward)?;
    }

    if let Some(value) = &rules.fill_remaining {
        for name in column_names(&out) {
            let filled = fill_column(&mut out, &name, value)?;
            if filled > 0 {
                report.fills.push(FillCount {
                    column: name,
                    value: value.clone(),
                    filled,
                });
            }
        }
    }

    report.after = missing_counts(&out)?;
    Ok((out, report))
}

/// Replaces missing cells of `column` with `value`, keeping the column's
/// numeric type when the value parses as that type.
fn fill_column(df: &mut DataFrame, column: &str, value: &str) -> Result<usize> {
    let col = df.column(column)?;
    let missing = count_missing(col)?;
    if missing == 0 {
        return Ok(0);
    }

    let dtype = col.dtype().clone();
    let name: PlSmallStr = column.into();
    let series = if let (true, Ok(fill)) = (dtype.is_integer(), value.trim().parse::<i64>()) {
        let mut values: Vec<Option<i64>> = Vec::with_capacity(col.len());
        for idx in 0..col.len() {
            let cell = col.get(idx)?;
            values.push(if is_missing(&cell) {
                Some(fill)
            } else {
                any_to_i64(cell)
            });
        }
        Series::new(name, values)
    } else if let (true, Ok(fill)) = (dtype.is_float(), value.trim().parse::<f64>()) {
        let mut values: Vec<Option<f64>> = Vec::with_capacity(col.len());
        for idx in 0..col.len() {
            let cell = col.get(idx)?;
            values.push(if is_missing(&cell) {
                Some(fill)
            } else {
                any_to_f64(cell)
            });
        }
        Series::new(name, values)
    } else {
        let mut values: Vec<Option<String>> = Vec::with_capacity(col.len());
        for idx in 0..col.len() {
            let cell = col.get(idx)?;
            values.push(Some(if is_missing(&cell) {
                value.to_string()
            } else {
                any_to_string(cell)
            }));
        }
        Series::new(name, values)
    };

    df.with_column(series)?;
    Ok(missing)
}

/// Imputes and clamps the reward column against the amount column.
///
/// Clamping is evaluated after imputation, so an imputed value can also be
/// counted as clamped when the amount is negative.
fn apply_reward_rule(df: &mut DataFrame, rule: &RewardRule) -> Result<Option<RewardCorrection>> {
    if !has_column(df, &rule.reward_column) || !has_column(df, &rule.amount_column) {
        return Ok(None);
    }

    let amount_col = df.column(&rule.amount_column)?;
    let reward_col = df.column(&rule.reward_column)?;
    let mut amounts = Vec::with_capacity(df.height());
    let mut rewards = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        amounts.push(any_to_f64(amount_col.get(idx)?));
        rewards.push(any_to_f64(reward_col.get(idx)?));
    }

    let mut correction = RewardCorrection::default();
    for (reward, amount) in rewards.iter_mut().zip(&amounts) {
        if let (None, Some(amount)) = (*reward, amount) {
            *reward = Some(amount.trunc());
            correction.imputed += 1;
        }
    }
    for (reward, amount) in rewards.iter_mut().zip(&amounts) {
        if let (Some(value), Some(amount)) = (*reward, amount)
            && value > 2.0 * amount
        {
            *reward = Some(amount.trunc());
            correction.clamped += 1;
        }
    }

    if correction.imputed + correction.clamped > 0 {
        let name: PlSmallStr = rule.reward_column.as_str().into();
        let integral = rewards.iter().flatten().all(|value| value.fract() == 0.0);
        let series = if integral {
            let values: Vec<Option<i64>> = rewards
                .iter()
                .map(|value| value.map(|v| v as i64))
                .collect();
            Series::new(name, values)
        } else {
            Series::new(name, rewards)
        };
        df.with_column(series)?;
    }

    Ok(Some(correction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales() -> DataFrame {
        DataFrame::new(vec![
            Column::new("SaleAmount".into(), vec![Some(19.99), Some(10.0), Some(39.1), None]),
            Column::new("BonusPoints".into(), vec![None, Some(50i64), Some(39), None]),
            Column::new(
                "PaymentType".into(),
                vec![Some("Card"), None, Some(" "), Some("Cash")],
            ),
        ])
        .unwrap()
    }

    fn rewards(df: &DataFrame) -> Vec<Option<i64>> {
        df.column("BonusPoints")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_standard_rules() {
        let (out, report) = handle_missing_values(&sales(), &MissingValueRules::standard()).unwrap();

        assert_eq!(rewards(&out), vec![Some(19), Some(10), Some(39), None]);
        assert_eq!(
            report.reward,
            Some(RewardCorrection {
                imputed: 1,
                clamped: 1
            })
        );

        let payment: Vec<Option<&str>> = out
            .column("PaymentType")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(
            payment,
            vec![Some("Card"), Some("Unknown"), Some("Unknown"), Some("Cash")]
        );
        assert_eq!(report.total_filled(), 2);
    }

    #[test]
    fn test_missing_counts_before_and_after() {
        let (_, report) = handle_missing_values(&sales(), &MissingValueRules::standard()).unwrap();
        assert_eq!(
            report.before,
            vec![
                ("SaleAmount".to_string(), 1),
                ("BonusPoints".to_string(), 2),
                ("PaymentType".to_string(), 2),
            ]
        );
        assert_eq!(
            report.after,
            vec![
                ("SaleAmount".to_string(), 1),
                ("BonusPoints".to_string(), 1),
                ("PaymentType".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_fill_count_matches_missing_counts() {
        let df = DataFrame::new(vec![Column::new(
            "PaymentType".into(),
            vec![Some("NaN"), Some(" "), None, Some("Card")],
        )])
        .unwrap();

        let (out, report) = handle_missing_values(&df, &MissingValueRules::standard()).unwrap();

        let payment: Vec<Option<&str>> = out
            .column("PaymentType")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(
            payment,
            vec![Some("NaN"), Some("Unknown"), Some("Unknown"), Some("Card")]
        );
        assert_eq!(report.total_filled(), 2);
        assert_eq!(report.before, vec![("PaymentType".to_string(), 2)]);
        assert_eq!(report.after, vec![("PaymentType".to_string(), 0)]);
    }

    #[test]
    fn test_reward_rule_with_custom_columns() {
        let df = DataFrame::new(vec![
            Column::new("Amount".into(), vec![Some(7.8), Some(3.0)]),
            Column::new("Points".into(), vec![None, Some(9i64)]),
        ])
        .unwrap();
        let rules = MissingValueRules::none().with_reward(Some(RewardRule::new("Points", "Amount")));

        let (out, report) = handle_missing_values(&df, &rules).unwrap();

        let points: Vec<Option<i64>> = out
            .column("Points")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(points, vec![Some(7), Some(3)]);
        assert_eq!(
            report.reward,
            Some(RewardCorrection {
                imputed: 1,
                clamped: 1
            })
        );
    }

    #[test]
    fn test_reward_rule_skipped_without_columns() {
        let df = DataFrame::new(vec![Column::new("ProductID".into(), vec![101i64])]).unwrap();
        let (out, report) = handle_missing_values(&df, &MissingValueRules::standard()).unwrap();
        assert!(report.reward.is_none());
        assert!(report.fills.is_empty());
        assert!(out.equals(&df));
    }

    #[test]
    fn test_reward_at_bound_is_kept() {
        let df = DataFrame::new(vec![
            Column::new("SaleAmount".into(), vec![10.0]),
            Column::new("BonusPoints".into(), vec![20i64]),
        ])
        .unwrap();
        let (out, report) = handle_missing_values(&df, &MissingValueRules::standard()).unwrap();
        assert_eq!(rewards(&out), vec![Some(20)]);
        assert_eq!(report.reward, Some(RewardCorrection::default()));
    }

    #[test]
    fn test_fill_remaining_keeps_numeric_types() {
        let df = DataFrame::new(vec![
            Column::new("StoreID".into(), vec![Some(401i64), None]),
            Column::new("Region".into(), vec![None, Some("East")]),
        ])
        .unwrap();
        let rules = MissingValueRules::none().with_fill_remaining(Some("0".to_string()));

        let (out, report) = handle_missing_values(&df, &rules).unwrap();

        let stores: Vec<Option<i64>> = out
            .column("StoreID")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(stores, vec![Some(401), Some(0)]);
        let regions: Vec<Option<&str>> = out
            .column("Region")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(regions, vec![Some("0"), Some("East")]);
        assert_eq!(report.total_filled(), 2);
    }

    #[test]
    fn test_fractional_rewards_stay_float() {
        let df = DataFrame::new(vec![
            Column::new("SaleAmount".into(), vec![Some(10.0), Some(5.0)]),
            Column::new("BonusPoints".into(), vec![Some(2.5), None]),
        ])
        .unwrap();
        let (out, _) = handle_missing_values(&df, &MissingValueRules::standard()).unwrap();
        let values: Vec<Option<f64>> = out
            .column("BonusPoints")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(values, vec![Some(2.5), Some(5.0)]);
    }
}
