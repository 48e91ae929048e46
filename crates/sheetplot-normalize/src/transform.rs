use std::collections::BTreeMap;

use sheetplot_model::{
    CellValue, NormalizationOptions, NormalizedTable, ProcessingError, Result, parse_numeral,
};

/// Build a keyed table from validated rows.
///
/// The first row supplies the column names, rendered to text verbatim.
/// Every later row becomes one record keyed by those names: short rows
/// pad with null, extra cells beyond the header width are ignored, and
/// cleanup passes apply per cell in a fixed order (trim, then numeric
/// coercion, then empty-string removal).
pub fn transform(
    rows: Vec<Vec<CellValue>>,
    options: NormalizationOptions,
) -> Result<NormalizedTable> {
    let mut iter = rows.into_iter();
    let Some(header_row) = iter.next() else {
        return Err(ProcessingError::Transform("no header row present".to_string()));
    };
    let headers: Vec<String> = header_row.iter().map(CellValue::render).collect();

    let mut records = Vec::new();
    for row in iter {
        let mut cells = row.into_iter();
        let mut record = BTreeMap::new();
        for header in &headers {
            let value = cells.next().unwrap_or(CellValue::Null);
            record.insert(header.clone(), transform_cell(value, options));
        }
        records.push(record);
    }

    let total_rows = records.len();
    let total_columns = headers.len();
    Ok(NormalizedTable {
        headers,
        rows: records,
        total_rows,
        total_columns,
    })
}

fn transform_cell(value: CellValue, options: NormalizationOptions) -> CellValue {
    let value = if options.trim_strings {
        match value {
            CellValue::Text(text) => CellValue::Text(text.trim().to_string()),
            other => other,
        }
    } else {
        value
    };
    let value = if options.convert_numbers {
        match value {
            CellValue::Text(text) => match parse_numeral(&text) {
                Some(number) => CellValue::Number(number),
                None => CellValue::Text(text),
            },
            other => other,
        }
    } else {
        value
    };
    if options.remove_empty_strings {
        if let CellValue::Text(text) = &value {
            if text.is_empty() {
                return CellValue::Null;
            }
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|cell| CellValue::text(*cell)).collect()
    }

    fn cell<'t>(table: &'t NormalizedTable, row: usize, key: &str) -> &'t CellValue {
        &table.rows[row][key]
    }

    #[test]
    fn keys_rows_by_header_names() {
        let rows = vec![text_row(&["Name", "Age"]), text_row(&["Bob", "30"])];
        let table = transform(rows, NormalizationOptions::default()).unwrap();

        assert_eq!(table.headers, vec!["Name", "Age"]);
        assert_eq!(table.total_rows, 1);
        assert_eq!(table.total_columns, 2);
        assert_eq!(cell(&table, 0, "Name"), &CellValue::text("Bob"));
        assert_eq!(cell(&table, 0, "Age"), &CellValue::text("30"));
    }

    #[test]
    fn trims_and_converts_cell_text() {
        let rows = vec![text_row(&["Name", "Age"]), text_row(&[" Bob ", " 30 "])];
        let table = transform(rows, NormalizationOptions::all()).unwrap();

        assert_eq!(cell(&table, 0, "Name"), &CellValue::text("Bob"));
        assert_eq!(cell(&table, 0, "Age"), &CellValue::number(30));
    }

    #[test]
    fn short_rows_pad_with_null() {
        let rows = vec![text_row(&["A", "B", "C"]), text_row(&["x"])];
        let table = transform(rows, NormalizationOptions::default()).unwrap();

        assert_eq!(cell(&table, 0, "A"), &CellValue::text("x"));
        assert_eq!(cell(&table, 0, "B"), &CellValue::Null);
        assert_eq!(cell(&table, 0, "C"), &CellValue::Null);
    }

    #[test]
    fn extra_cells_beyond_the_headers_are_ignored() {
        let rows = vec![text_row(&["A"]), text_row(&["x", "y"])];
        let table = transform(rows, NormalizationOptions::default()).unwrap();

        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(cell(&table, 0, "A"), &CellValue::text("x"));
    }

    #[test]
    fn empty_strings_become_null_only_when_asked() {
        let rows = vec![text_row(&["A"]), text_row(&[""])];

        let kept = transform(rows.clone(), NormalizationOptions::default()).unwrap();
        assert_eq!(cell(&kept, 0, "A"), &CellValue::text(""));

        let removed = transform(rows, NormalizationOptions {
            remove_empty_strings: true,
            ..NormalizationOptions::default()
        })
        .unwrap();
        assert_eq!(cell(&removed, 0, "A"), &CellValue::Null);
    }

    #[test]
    fn whitespace_trims_down_to_null() {
        let rows = vec![text_row(&["A"]), text_row(&["   "])];
        let table = transform(rows, NormalizationOptions::all()).unwrap();

        assert_eq!(cell(&table, 0, "A"), &CellValue::Null);
    }

    #[test]
    fn blanks_never_coerce_to_zero() {
        let rows = vec![
            text_row(&["A", "B"]),
            vec![CellValue::text(""), CellValue::Null],
        ];
        let table = transform(rows, NormalizationOptions {
            convert_numbers: true,
            ..NormalizationOptions::default()
        })
        .unwrap();

        assert_eq!(cell(&table, 0, "A"), &CellValue::text(""));
        assert_eq!(cell(&table, 0, "B"), &CellValue::Null);
    }

    #[test]
    fn numerals_stay_text_with_conversion_off() {
        let rows = vec![text_row(&["A"]), text_row(&["30"])];
        let table = transform(rows, NormalizationOptions::default()).unwrap();

        assert_eq!(cell(&table, 0, "A"), &CellValue::text("30"));
    }

    #[test]
    fn duplicate_headers_keep_the_last_value() {
        let rows = vec![text_row(&["A", "A"]), text_row(&["x", "y"])];
        let table = transform(rows, NormalizationOptions::default()).unwrap();

        assert_eq!(table.total_columns, 2);
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(cell(&table, 0, "A"), &CellValue::text("y"));
    }

    #[test]
    fn numeric_headers_render_without_fraction() {
        let rows = vec![vec![CellValue::number(2024)], text_row(&["x"])];
        let table = transform(rows, NormalizationOptions::default()).unwrap();

        assert_eq!(table.headers, vec!["2024"]);
    }

    #[test]
    fn header_only_input_yields_an_empty_table() {
        let table = transform(vec![text_row(&["A"])], NormalizationOptions::default()).unwrap();

        assert_eq!(table.total_rows, 0);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn no_rows_at_all_is_a_transform_error() {
        let error = transform(vec![], NormalizationOptions::default()).unwrap_err();
        assert!(error.to_string().contains("no header row present"));
    }
}
