//! The ordered cleaning pipeline.

use polars::prelude::DataFrame;
use serde::Serialize;

use sales_model::{CleanupRule, DatasetConfig, DatasetKind, MissingValueRules};

use crate::cleanup::apply_cleanup;
use crate::columns::trim_column_names;
use crate::dedupe::remove_duplicates;
use crate::error::Result;
use crate::frame::column_names;
use crate::hooks::{FrameRule, RuleSet, remove_outliers, standardize_formats, validate_data};
use crate::missing::handle_missing_values;
use crate::observer::{CleaningEvent, CleaningObserver};

/// Counts collected over one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CleaningSummary {
    pub dataset: DatasetKind,
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns_renamed: usize,
    pub duplicates_removed: usize,
    pub values_filled: usize,
    pub rewards_imputed: usize,
    pub rewards_clamped: usize,
    pub dates_unparsed: usize,
}

impl CleaningSummary {
    fn new(dataset: DatasetKind, rows_in: usize) -> Self {
        Self {
            dataset,
            rows_in,
            rows_out: rows_in,
            columns_renamed: 0,
            duplicates_removed: 0,
            values_filled: 0,
            rewards_imputed: 0,
            rewards_clamped: 0,
            dates_unparsed: 0,
        }
    }
}

/// Cleaned frame plus the run summary.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub frame: DataFrame,
    pub summary: CleaningSummary,
}

/// Cleaning steps for one dataset, in the order they run.
#[derive(Debug)]
pub struct CleaningPipeline {
    dataset: DatasetKind,
    missing: MissingValueRules,
    outliers: RuleSet,
    formats: RuleSet,
    validation: RuleSet,
    cleanup: CleanupRule,
}

impl CleaningPipeline {
    /// A pipeline with no fill rules, empty hooks, and no cleanup.
    pub fn new(dataset: DatasetKind) -> Self {
        Self {
            dataset,
            missing: MissingValueRules::none(),
            outliers: RuleSet::new(),
            formats: RuleSet::new(),
            validation: RuleSet::new(),
            cleanup: CleanupRule::None,
        }
    }

    /// Builds the pipeline described by a dataset configuration.
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(config.kind)
            .with_missing_rules(config.missing.clone())
            .with_cleanup(config.cleanup.clone())
    }

    pub fn with_missing_rules(mut self, rules: MissingValueRules) -> Self {
        self.missing = rules;
        self
    }

    pub fn with_cleanup(mut self, rule: CleanupRule) -> Self {
        self.cleanup = rule;
        self
    }

    pub fn with_outlier_rule(mut self, rule: impl FrameRule + 'static) -> Self {
        self.outliers.push(rule);
        self
    }

    pub fn with_format_rule(mut self, rule: impl FrameRule + 'static) -> Self {
        self.formats.push(rule);
        self
    }

    pub fn with_validation_rule(mut self, rule: impl FrameRule + 'static) -> Self {
        self.validation.push(rule);
        self
    }

    pub fn dataset(&self) -> DatasetKind {
        self.dataset
    }

    /// Runs every step and reports each one to `observer`.
    pub fn run(&self, df: &DataFrame, observer: &mut dyn CleaningObserver) -> Result<CleaningOutcome> {
        let dataset = self.dataset;
        let mut summary = CleaningSummary::new(dataset, df.height());
        observer.on_event(&CleaningEvent::Started {
            dataset,
            rows: df.height(),
            columns: column_names(df),
        });

        let (frame, renames) = trim_column_names(df)?;
        summary.columns_renamed = renames.len();
        observer.on_event(&CleaningEvent::ColumnsTrimmed { dataset, renames });

        let (frame, removed) = remove_duplicates(&frame)?;
        summary.duplicates_removed = removed;
        observer.on_event(&CleaningEvent::DuplicatesRemoved {
            dataset,
            removed,
            rows: frame.height(),
        });

        let (frame, report) = handle_missing_values(&frame, &self.missing)?;
        summary.values_filled = report.total_filled();
        if let Some(reward) = report.reward {
            summary.rewards_imputed = reward.imputed;
            summary.rewards_clamped = reward.clamped;
        }
        observer.on_event(&CleaningEvent::MissingValuesHandled { dataset, report });

        let (frame, report) = remove_outliers(&frame, &self.outliers)?;
        observer.on_event(&CleaningEvent::HookApplied { dataset, report });
        let (frame, report) = standardize_formats(&frame, &self.formats)?;
        observer.on_event(&CleaningEvent::HookApplied { dataset, report });
        let (frame, report) = validate_data(&frame, &self.validation)?;
        observer.on_event(&CleaningEvent::HookApplied { dataset, report });

        let (frame, report) = apply_cleanup(&frame, &self.cleanup)?;
        summary.dates_unparsed = report.unparsed;
        observer.on_event(&CleaningEvent::CleanupApplied { dataset, report });

        summary.rows_out = frame.height();
        observer.on_event(&CleaningEvent::Finished { dataset, summary });
        Ok(CleaningOutcome { frame, summary })
    }
}
