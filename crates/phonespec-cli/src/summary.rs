//! Terminal rendering of records and reports.

use std::collections::BTreeSet;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use phonespec_model::{Column, PhoneRecord};
use phonespec_stats::{DatasetReport, ReleaseMismatch};

/// Placeholder shown for missing values.
const MISSING: &str = "-";

pub fn print_report(report: &DatasetReport) {
    println!("Total phones loaded: {}", report.total_records);
    println!();
    for (idx, record) in report.preview.iter().enumerate() {
        println!("Phone #{}: {record}", idx + 1);
    }
    if !report.preview.is_empty() {
        println!();
    }
    println!("Weight statistics:");
    println!("{}", statistics_table(report));
    println!();
    println!("Dataset questions:");
    println!("{}", questions_table(report));
    if let Some(table) = mismatch_table(&report.release_mismatches) {
        println!();
        println!("Announced and released in different years:");
        println!("{table}");
    }
}

pub fn print_unique(column: &str, values: &BTreeSet<Option<String>>) {
    println!("{}", unique_table(column, values));
}

pub fn print_records<'a>(records: impl IntoIterator<Item = &'a PhoneRecord>) {
    for record in records {
        println!("{}", record_table(record));
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn text_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell(MISSING),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Formats a weight in grams with two decimals.
pub fn format_grams(value: f64) -> String {
    format!("{value:.2} g")
}

pub fn statistics_table(report: &DatasetReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let weight = report.weight.as_ref();
    let grams = |value: Option<f64>| match value {
        Some(value) => Cell::new(format_grams(value)),
        None => dim_cell(MISSING),
    };
    table.add_row(vec![
        Cell::new("Phones with weight"),
        Cell::new(weight.map_or(0, |summary| summary.count)),
    ]);
    table.add_row(vec![
        Cell::new("Mean weight"),
        grams(weight.map(|summary| summary.mean)),
    ]);
    table.add_row(vec![
        Cell::new("Median weight"),
        grams(weight.map(|summary| summary.median)),
    ]);
    table.add_row(vec![
        Cell::new("Std deviation"),
        grams(weight.map(|summary| summary.std_dev)),
    ]);
    table.add_row(vec![
        Cell::new("Most common status"),
        text_cell(report.mode_status.as_deref()),
    ]);
    table
}

pub fn questions_table(report: &DatasetReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Question"), header_cell("Answer")]);
    apply_table_style(&mut table);
    let heaviest = match &report.heaviest_manufacturer {
        Some(entry) => Cell::new(format!(
            "{} ({})",
            entry.oem,
            format_grams(entry.average_weight)
        )),
        None => dim_cell(MISSING),
    };
    let busiest = match &report.busiest_year {
        Some(entry) => Cell::new(format!("{} ({} phones)", entry.year, entry.count)),
        None => dim_cell(MISSING),
    };
    table.add_row(vec![
        Cell::new("OEM with highest average weight"),
        heaviest,
    ]);
    table.add_row(vec![
        Cell::new("Announced and released in different years"),
        Cell::new(report.release_mismatches.len()),
    ]);
    table.add_row(vec![
        Cell::new("Phones with a single feature sensor"),
        Cell::new(report.single_sensor_count),
    ]);
    table.add_row(vec![Cell::new("Busiest launch year after 1999"), busiest]);
    table
}

pub fn mismatch_table(mismatches: &[ReleaseMismatch]) -> Option<Table> {
    if mismatches.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("OEM"),
        header_cell("Model"),
        header_cell("Announced"),
        header_cell("Released"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for mismatch in mismatches {
        table.add_row(vec![
            text_cell(mismatch.oem.as_deref()),
            text_cell(mismatch.model.as_deref()),
            Cell::new(mismatch.announced),
            Cell::new(mismatch.released),
        ]);
    }
    Some(table)
}

/// Lists distinct values; missing values are shown last as `(missing)`.
pub fn unique_table(column: &str, values: &BTreeSet<Option<String>>) -> Table {
    let label = Column::parse(column).map_or(column, |column| column.label());
    let mut table = Table::new();
    table.set_header(vec![header_cell(label)]);
    apply_table_style(&mut table);
    for value in values.iter().flatten() {
        table.add_row(vec![Cell::new(value)]);
    }
    if values.contains(&None) {
        table.add_row(vec![dim_cell("(missing)")]);
    }
    table
}

/// Two-column attribute/value view of a single record.
pub fn record_table(record: &PhoneRecord) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Attribute"), header_cell("Value")]);
    apply_table_style(&mut table);
    let number = |value: Option<String>| match value {
        Some(value) => Cell::new(value),
        None => dim_cell(MISSING),
    };
    let rows: [(&str, Cell); 12] = [
        ("OEM", text_cell(record.oem.as_deref())),
        ("Model", text_cell(record.model.as_deref())),
        (
            "Launch announced",
            number(record.launch_announced.map(|year| year.to_string())),
        ),
        ("Launch status", text_cell(record.launch_status.as_deref())),
        ("Body dimensions", text_cell(record.body_dimensions.as_deref())),
        (
            "Body weight",
            number(record.body_weight.map(|weight| format!("{weight} g"))),
        ),
        ("Body SIM", text_cell(record.body_sim.as_deref())),
        ("Display type", text_cell(record.display_type.as_deref())),
        (
            "Display size",
            number(record.display_size.map(|size| format!("{size}\""))),
        ),
        (
            "Display resolution",
            text_cell(record.display_resolution.as_deref()),
        ),
        ("Feature sensors", text_cell(record.feat_sensors.as_deref())),
        ("Platform OS", text_cell(record.platform_os.as_deref())),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), value]);
    }
    table
}
