use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use sheetplot_model::{CellValue, ProcessingError, RawSheet, Result, SheetInfo};
use tracing::debug;

/// Sheet inventory of a workbook, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookInfo {
    pub sheets: Vec<SheetInfo>,
}

/// Read the first worksheet of a workbook into a [`RawSheet`].
///
/// Rows that are entirely empty in the file are dropped here; rows that
/// only look blank (whitespace, empty strings) survive for validation
/// to judge.
pub fn read_first_sheet(path: &Path) -> Result<RawSheet> {
    let mut workbook =
        open_workbook_auto(path).map_err(|error| ProcessingError::Parse(error.to_string()))?;
    let sheet_names = workbook.sheet_names().to_vec();
    let Some(first) = sheet_names.first() else {
        return Err(ProcessingError::Parse("workbook contains no sheets".to_string()));
    };
    let range = workbook
        .worksheet_range(first)
        .map_err(|error| ProcessingError::Parse(error.to_string()))?;

    let mut sheet = RawSheet::new(first.clone());
    for row in range.rows() {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        sheet.push_row(row.iter().map(map_cell).collect());
    }
    debug!(sheet = %sheet.name, rows = sheet.rows.len(), "read first worksheet");
    Ok(sheet)
}

/// List every worksheet with its used-range dimensions. A workbook with
/// no sheets yields an empty list rather than an error.
pub fn inspect(path: &Path) -> Result<WorkbookInfo> {
    let mut workbook =
        open_workbook_auto(path).map_err(|error| ProcessingError::Parse(error.to_string()))?;
    let mut sheets = Vec::new();
    for name in workbook.sheet_names().to_vec() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|error| ProcessingError::Parse(error.to_string()))?;
        let (rows, columns) = range.get_size();
        sheets.push(SheetInfo { name, rows, columns });
    }
    debug!(sheets = sheets.len(), "inspected workbook");
    Ok(WorkbookInfo { sheets })
}

fn map_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(flag) => CellValue::text(if *flag { "TRUE" } else { "FALSE" }),
        // Raw Excel serial; calendar rendering is left to consumers.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
        Data::Error(error) => CellValue::Text(format!("#{error:?}")),
    }
}
