//! Extension points for outlier removal, format standardization, and
//! validation.
//!
//! Each hook is a [`RuleSet`]. An empty rule set returns its input
//! unchanged, which is what the pipeline uses today.

use std::fmt;

use polars::prelude::DataFrame;
use serde::Serialize;

use crate::error::Result;

/// A single frame-to-frame rule plugged into a hook.
pub trait FrameRule: Send + Sync {
    /// Short name used in reports and logs.
    fn name(&self) -> &str;

    /// Returns the transformed frame.
    fn apply(&self, df: &DataFrame) -> Result<DataFrame>;
}

/// Which hook a rule set is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HookStage {
    Outliers,
    Formats,
    Validation,
}

impl HookStage {
    pub fn as_str(self) -> &'static str {
        match self {
            HookStage::Outliers => "outliers",
            HookStage::Formats => "formats",
            HookStage::Validation => "validation",
        }
    }
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a hook did to the frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookReport {
    pub stage: HookStage,
    pub rules_applied: Vec<String>,
    pub rows_before: usize,
    pub rows_after: usize,
}

/// Ordered list of rules run by one hook.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn FrameRule>>,
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: impl FrameRule + 'static) -> Self {
        self.push(rule);
        self
    }

    pub fn push(&mut self, rule: impl FrameRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule in order, feeding each the previous rule's output.
    pub fn apply(&self, stage: HookStage, df: &DataFrame) -> Result<(DataFrame, HookReport)> {
        let mut out = df.clone();
        let mut rules_applied = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            out = rule.apply(&out)?;
            rules_applied.push(rule.name().to_string());
        }
        let report = HookReport {
            stage,
            rules_applied,
            rows_before: df.height(),
            rows_after: out.height(),
        };
        Ok((out, report))
    }
}

/// Outlier-removal hook.
pub fn remove_outliers(df: &DataFrame, rules: &RuleSet) -> Result<(DataFrame, HookReport)> {
    rules.apply(HookStage::Outliers, df)
}

/// Format-standardization hook.
pub fn standardize_formats(df: &DataFrame, rules: &RuleSet) -> Result<(DataFrame, HookReport)> {
    rules.apply(HookStage::Formats, df)
}

/// Validation hook. Rules reject a frame by returning an error.
pub fn validate_data(df: &DataFrame, rules: &RuleSet) -> Result<(DataFrame, HookReport)> {
    rules.apply(HookStage::Validation, df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use polars::prelude::{BooleanChunked, Column, NewChunkedArray};

    struct DropNegativeAmounts;

    impl FrameRule for DropNegativeAmounts {
        fn name(&self) -> &str {
            "drop_negative_amounts"
        }

        fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
            let keep: Vec<bool> = df
                .column("SaleAmount")?
                .f64()?
                .into_iter()
                .map(|amount| amount.is_some_and(|a| a >= 0.0))
                .collect();
            let mask = BooleanChunked::from_slice("keep".into(), &keep);
            Ok(df.filter(&mask)?)
        }
    }

    struct RejectEmpty;

    impl FrameRule for RejectEmpty {
        fn name(&self) -> &str {
            "reject_empty"
        }

        fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
            if df.height() == 0 {
                return Err(TransformError::Rule {
                    rule: self.name().to_string(),
                    message: "no rows".to_string(),
                });
            }
            Ok(df.clone())
        }
    }

    fn amounts() -> DataFrame {
        DataFrame::new(vec![Column::new("SaleAmount".into(), vec![5.0, -1.0, 7.5])]).unwrap()
    }

    #[test]
    fn test_empty_rule_set_is_identity() {
        let df = amounts();
        let (out, report) = remove_outliers(&df, &RuleSet::new()).unwrap();
        assert!(out.equals(&df));
        assert_eq!(report.stage, HookStage::Outliers);
        assert!(report.rules_applied.is_empty());
        assert_eq!(report.rows_before, 3);
        assert_eq!(report.rows_after, 3);
    }

    #[test]
    fn test_rules_run_in_order() {
        let rules = RuleSet::new()
            .with_rule(DropNegativeAmounts)
            .with_rule(RejectEmpty);
        assert_eq!(format!("{rules:?}"), r#"["drop_negative_amounts", "reject_empty"]"#);

        let (out, report) = standardize_formats(&amounts(), &rules).unwrap();
        assert_eq!(out.height(), 2);
        assert_eq!(
            report.rules_applied,
            vec!["drop_negative_amounts", "reject_empty"]
        );
        assert_eq!(report.rows_after, 2);
    }

    #[test]
    fn test_validation_rule_error_propagates() {
        let rules = RuleSet::new().with_rule(RejectEmpty);
        let empty = amounts().head(Some(0));
        let result = validate_data(&empty, &rules);
        assert!(matches!(result, Err(TransformError::Rule { rule, .. }) if rule == "reject_empty"));
    }
}
