//! Observers receive one event per cleaning step.
//!
//! The cleaning functions never log; the pipeline hands their reports to a
//! [`CleaningObserver`]. [`TracingObserver`] writes them as structured log
//! lines and [`RecordingObserver`] keeps them for inspection.

use tracing::{info, warn};

use sales_model::DatasetKind;

use crate::cleanup::CleanupReport;
use crate::columns::ColumnRename;
use crate::hooks::HookReport;
use crate::missing::MissingValueReport;
use crate::pipeline::CleaningSummary;

/// A step of the cleaning pipeline finished.
#[derive(Debug, Clone, PartialEq)]
pub enum CleaningEvent {
    Started {
        dataset: DatasetKind,
        rows: usize,
        columns: Vec<String>,
    },
    ColumnsTrimmed {
        dataset: DatasetKind,
        renames: Vec<ColumnRename>,
    },
    DuplicatesRemoved {
        dataset: DatasetKind,
        removed: usize,
        rows: usize,
    },
    MissingValuesHandled {
        dataset: DatasetKind,
        report: MissingValueReport,
    },
    HookApplied {
        dataset: DatasetKind,
        report: HookReport,
    },
    CleanupApplied {
        dataset: DatasetKind,
        report: CleanupReport,
    },
    Finished {
        dataset: DatasetKind,
        summary: CleaningSummary,
    },
}

/// Receives pipeline events.
pub trait CleaningObserver {
    fn on_event(&mut self, event: &CleaningEvent);
}

/// Writes each event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CleaningObserver for TracingObserver {
    fn on_event(&mut self, event: &CleaningEvent) {
        match event {
            CleaningEvent::Started {
                dataset,
                rows,
                columns,
            } => {
                info!(
                    %dataset,
                    rows,
                    columns = %columns.join(", "),
                    "starting data cleaning"
                );
            }
            CleaningEvent::ColumnsTrimmed { dataset, renames } => {
                for rename in renames {
                    info!(%dataset, from = %rename.from, to = %rename.to, "renamed column");
                }
                info!(%dataset, renamed = renames.len(), "cleaned column names");
            }
            CleaningEvent::DuplicatesRemoved {
                dataset,
                removed,
                rows,
            } => {
                info!(%dataset, removed, rows, "removed duplicate rows");
            }
            CleaningEvent::MissingValuesHandled { dataset, report } => {
                for (column, count) in report.before.iter().filter(|(_, count)| *count > 0) {
                    info!(%dataset, column = %column, missing = count, "missing values before handling");
                }
                for fill in &report.fills {
                    info!(
                        %dataset,
                        column = %fill.column,
                        value = %fill.value,
                        filled = fill.filled,
                        "filled missing values"
                    );
                }
                if let Some(reward) = report.reward {
                    info!(
                        %dataset,
                        imputed = reward.imputed,
                        clamped = reward.clamped,
                        "applied reward rule"
                    );
                }
                for (column, count) in report.after.iter().filter(|(_, count)| *count > 0) {
                    info!(%dataset, column = %column, missing = count, "missing values after handling");
                }
            }
            CleaningEvent::HookApplied { dataset, report } => {
                info!(
                    %dataset,
                    stage = %report.stage,
                    rules = report.rules_applied.len(),
                    rows_before = report.rows_before,
                    rows_after = report.rows_after,
                    "applied hook"
                );
            }
            CleaningEvent::CleanupApplied { dataset, report } => match report.rule.column() {
                Some(column) if !report.applied => {
                    warn!(%dataset, column, "cleanup column not found, skipping");
                }
                Some(column) => {
                    info!(
                        %dataset,
                        column,
                        changed = report.changed,
                        unparsed = report.unparsed,
                        "applied cleanup rule"
                    );
                    if report.unparsed > 0 {
                        warn!(%dataset, column, unparsed = report.unparsed, "unparseable dates set to missing");
                    }
                }
                None => {}
            },
            CleaningEvent::Finished { dataset, summary } => {
                info!(
                    %dataset,
                    rows_in = summary.rows_in,
                    rows_out = summary.rows_out,
                    "data cleaning complete"
                );
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<CleaningEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CleaningEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<CleaningEvent> {
        self.events
    }
}

impl CleaningObserver for RecordingObserver {
    fn on_event(&mut self, event: &CleaningEvent) {
        self.events.push(event.clone());
    }
}
