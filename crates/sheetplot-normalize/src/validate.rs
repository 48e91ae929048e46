use sheetplot_model::{CellValue, ProcessingError, RawSheet, Result};
use tracing::debug;

/// True when every cell in the row is null or an empty string.
pub fn is_blank_row(row: &[CellValue]) -> bool {
    row.iter().all(CellValue::is_blank)
}

/// Check that a sheet is usable and strip its blank rows.
///
/// The first row is the header slot and must be present before any
/// filtering happens. Blank rows are dropped silently; if nothing
/// remains below the header slot afterwards, the sheet has no data.
pub fn validate(sheet: RawSheet) -> Result<Vec<Vec<CellValue>>> {
    let RawSheet { name, rows } = sheet;
    if rows.is_empty() {
        return Err(ProcessingError::InvalidFormat);
    }
    if rows[0].is_empty() {
        return Err(ProcessingError::MissingHeaders);
    }
    let kept: Vec<Vec<CellValue>> = rows.into_iter().filter(|row| !is_blank_row(row)).collect();
    // A header row alone is no data.
    if kept.len() < 2 {
        return Err(ProcessingError::EmptyData);
    }
    debug!(sheet = %name, rows = kept.len(), "validated sheet");
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use sheetplot_model::ErrorKind;

    use super::*;

    fn sheet_of(rows: Vec<Vec<CellValue>>) -> RawSheet {
        RawSheet {
            name: "Sheet1".to_string(),
            rows,
        }
    }

    #[test]
    fn empty_sheet_is_invalid_format() {
        let error = validate(sheet_of(vec![])).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn empty_first_row_is_missing_headers() {
        let rows = vec![vec![], vec![CellValue::text("x")]];
        let error = validate(sheet_of(rows)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingHeaders);
    }

    #[test]
    fn header_with_only_blank_rows_is_empty_data() {
        let rows = vec![
            vec![CellValue::text("A"), CellValue::text("B")],
            vec![CellValue::text(""), CellValue::Null],
            vec![CellValue::text(""), CellValue::text("")],
        ];
        let error = validate(sheet_of(rows)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::EmptyData);
    }

    #[test]
    fn all_blank_rows_are_empty_data() {
        let rows = vec![vec![CellValue::Null]];
        let error = validate(sheet_of(rows)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::EmptyData);
    }

    #[test]
    fn blank_rows_are_dropped_not_reported() {
        let rows = vec![
            vec![CellValue::text("A")],
            vec![CellValue::Null],
            vec![CellValue::text("x")],
        ];
        let kept = validate(sheet_of(rows)).unwrap();
        assert_eq!(kept, vec![vec![CellValue::text("A")], vec![CellValue::text("x")]]);
    }

    #[test]
    fn whitespace_only_cells_are_not_blank() {
        let rows = vec![vec![CellValue::text("A")], vec![CellValue::text(" ")]];
        let kept = validate(sheet_of(rows)).unwrap();
        assert_eq!(kept.len(), 2);
    }
}
