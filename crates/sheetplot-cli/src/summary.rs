use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sheetplot_chart::ChartKind;
use sheetplot_cli::pipeline::{ChartOutcome, InspectOutcome, NormalizeOutcome};
use sheetplot_model::{CellValue, format_number};

pub fn print_normalize_summary(outcome: &NormalizeOutcome, preview_rows: usize) {
    println!("Source: {}", outcome.source.display());
    println!(
        "Rows: {}  Columns: {}  ({} bytes, sha256 {}, {} ms)",
        outcome.table.total_rows,
        outcome.table.total_columns,
        outcome.fingerprint.size,
        short_checksum(&outcome.fingerprint.sha256),
        outcome.duration_ms
    );
    if outcome.table.headers.is_empty() || preview_rows == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(
        outcome
            .table
            .headers
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for record in outcome.table.rows.iter().take(preview_rows) {
        table.add_row(
            outcome
                .table
                .headers
                .iter()
                .map(|header| value_cell(record.get(header)))
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
    if outcome.table.total_rows > preview_rows {
        println!("({preview_rows} of {} rows shown)", outcome.table.total_rows);
    }
}

pub fn print_inspect_summary(outcome: &InspectOutcome) {
    println!("Source: {}", outcome.source.display());
    println!(
        "Sheets: {}  ({} bytes, sha256 {})",
        outcome.workbook.sheets.len(),
        outcome.fingerprint.size,
        short_checksum(&outcome.fingerprint.sha256)
    );
    if outcome.workbook.sheets.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in &outcome.workbook.sheets {
        table.add_row(vec![
            Cell::new(&sheet.name),
            Cell::new(sheet.rows),
            Cell::new(sheet.columns),
        ]);
    }
    println!("{table}");
}

pub fn print_series_summary(outcome: &ChartOutcome) {
    let series = &outcome.series;
    println!(
        "{} chart: {} by {}",
        kind_label(series.kind),
        series.y_axis,
        series.x_axis
    );
    if series.values.is_empty() {
        println!("(no data points)");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell(&series.x_axis), header_cell(&series.y_axis)]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, value) in series.labels.iter().zip(&series.values) {
        let label_cell = if label.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(label)
        };
        table.add_row(vec![label_cell, Cell::new(format_number(*value))]);
    }
    println!("{table}");
    if let Some(summary) = &outcome.summary {
        println!(
            "Points: {}  Avg: {:.2}  Min: {}  Max: {}",
            summary.count,
            summary.mean,
            format_number(summary.min),
            format_number(summary.max)
        );
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: Option<&CellValue>) -> Cell {
    match value {
        Some(CellValue::Number(number)) => {
            Cell::new(format_number(*number)).set_alignment(CellAlignment::Right)
        }
        Some(CellValue::Text(text)) => Cell::new(text),
        Some(CellValue::Null) | None => dim_cell("null"),
    }
}

fn kind_label(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar => "Bar",
        ChartKind::Line => "Line",
        ChartKind::Pie => "Pie",
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

fn short_checksum(checksum: &str) -> &str {
    &checksum[..checksum.len().min(12)]
}
