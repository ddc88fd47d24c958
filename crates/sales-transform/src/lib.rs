//! Cleaning pipeline for raw sales extracts.
//!
//! Every step is a pure function from a DataFrame to a new DataFrame plus a
//! report describing what changed. The steps never log; the
//! [`CleaningPipeline`] forwards each report to a [`CleaningObserver`]
//! supplied by the caller.
//!
//! # Overview
//!
//! Steps run in a fixed order:
//! 1. **Column names**: strip surrounding whitespace ([`trim_column_names`])
//! 2. **Duplicates**: drop exact duplicate rows ([`remove_duplicates`])
//! 3. **Missing values**: literal fills and reward imputation ([`handle_missing_values`])
//! 4. **Hooks**: outlier removal, format standardization, validation ([`RuleSet`])
//! 5. **Dataset cleanup**: lower-case/trim a text column or parse dates ([`apply_cleanup`])
//!
//! # Example
//!
//! ```ignore
//! use sales_model::DatasetConfig;
//! use sales_transform::{CleaningPipeline, TracingObserver};
//!
//! let pipeline = CleaningPipeline::from_config(&DatasetConfig::sales());
//! let outcome = pipeline.run(&raw_df, &mut TracingObserver)?;
//! println!("{} rows kept", outcome.frame.height());
//! ```

mod cleanup;
mod columns;
mod datetime;
mod dedupe;
mod error;
mod frame;
mod hooks;
mod missing;
mod observer;
mod pipeline;

// Error type
pub use error::{Result, TransformError};

// Cleaning steps
pub use cleanup::{CleanupReport, apply_cleanup, lowercase_trim, parse_dates};
pub use columns::{ColumnRename, trim_column_names};
pub use datetime::{parse_date_value, to_iso_date};
pub use dedupe::remove_duplicates;
pub use hooks::{
    FrameRule, HookReport, HookStage, RuleSet, remove_outliers, standardize_formats,
    validate_data,
};
pub use missing::{
    FillCount, MissingValueReport, RewardCorrection, handle_missing_values, missing_counts,
};

// Pipeline and observability
pub use observer::{CleaningEvent, CleaningObserver, RecordingObserver, TracingObserver};
pub use pipeline::{CleaningOutcome, CleaningPipeline, CleaningSummary};
