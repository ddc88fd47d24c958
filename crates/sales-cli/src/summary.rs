use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sales_warehouse::LoadSummary;

use crate::types::{DatasetOutcome, DatasetStatus, PrepareReport, Report};

/// How reports are printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    #[default]
    Table,
    Json,
}

pub fn print_report(report: &Report, format: SummaryFormat) -> serde_json::Result<()> {
    match format {
        SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        SummaryFormat::Table => match report {
            Report::Prepare(prepare) => print_prepare_summary(prepare),
            Report::Load(load) => print_load_summary(load),
            Report::Run(run) => {
                print_prepare_summary(&run.prepare);
                print_load_summary(&run.load);
            }
        },
    }
    Ok(())
}

pub fn print_prepare_summary(report: &PrepareReport) {
    println!("{}", prepare_table(report));
    for outcome in &report.datasets {
        if let DatasetStatus::Skipped { reason } = &outcome.status {
            eprintln!("- {}: {reason}", outcome.dataset);
        }
    }
}

pub fn print_load_summary(summary: &LoadSummary) {
    println!("Warehouse: {}", summary.warehouse_path.display());
    println!("{}", load_table(summary));
}

pub fn prepare_table(report: &PrepareReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Status"),
        header_cell("Rows In"),
        header_cell("Rows Out"),
        header_cell("Duplicates"),
        header_cell("Filled"),
        header_cell("Imputed"),
        header_cell("Clamped"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for outcome in &report.datasets {
        table.add_row(dataset_row(outcome));
    }
    table
}

pub fn load_table(summary: &LoadSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Source"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for load in &summary.tables {
        table.add_row(vec![
            Cell::new(load.table).add_attribute(Attribute::Bold),
            count_cell(Some(load.rows), Color::Green),
            match &load.source {
                Some(path) => Cell::new(path.display()),
                None => dim_cell("-"),
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total_rows()).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn dataset_row(outcome: &DatasetOutcome) -> Vec<Cell> {
    let name = Cell::new(outcome.dataset).add_attribute(Attribute::Bold);
    match (&outcome.status, &outcome.cleaning) {
        (DatasetStatus::Prepared { output }, Some(summary)) => vec![
            name,
            Cell::new("prepared").fg(Color::Green),
            Cell::new(summary.rows_in),
            Cell::new(summary.rows_out),
            count_cell(Some(summary.duplicates_removed), Color::Yellow),
            count_cell(Some(summary.values_filled), Color::Yellow),
            count_cell(Some(summary.rewards_imputed), Color::Yellow),
            count_cell(Some(summary.rewards_clamped), Color::Yellow),
            Cell::new(output.display()),
        ],
        (DatasetStatus::Prepared { output }, None) => {
            let mut row = vec![name, Cell::new("prepared").fg(Color::Green)];
            row.extend((0..6).map(|_| dim_cell("-")));
            row.push(Cell::new(output.display()));
            row
        }
        (DatasetStatus::Skipped { .. }, _) => {
            let mut row = vec![name, Cell::new("skipped").fg(Color::Red)];
            row.extend((0..7).map(|_| dim_cell("-")));
            row
        }
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
