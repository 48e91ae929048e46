use std::path::PathBuf;

use rust_xlsxwriter::{Workbook, Worksheet};
use sheetplot_model::{CellValue, ErrorKind, NormalizationOptions};
use sheetplot_normalize::normalize;
use tempfile::TempDir;

fn fixture(build: impl FnOnce(&mut Worksheet)) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.xlsx");
    let mut workbook = Workbook::new();
    build(workbook.add_worksheet());
    workbook.save(&path).unwrap();
    (dir, path)
}

#[test]
fn normalizes_a_typical_sheet() {
    let (_dir, path) = fixture(|sheet| {
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "Age").unwrap();
        sheet.write_string(1, 0, " Bob ").unwrap();
        sheet.write_string(1, 1, " 30 ").unwrap();
        sheet.write_string(2, 0, "Ann").unwrap();
        sheet.write_number(2, 1, 41.0).unwrap();
    });

    let table = normalize(&path, NormalizationOptions::all()).unwrap();

    assert_eq!(table.headers, vec!["Name", "Age"]);
    assert_eq!(table.total_rows, 2);
    assert_eq!(table.total_columns, 2);
    assert_eq!(table.rows[0]["Name"], CellValue::text("Bob"));
    assert_eq!(table.rows[0]["Age"], CellValue::number(30));
    assert_eq!(table.rows[1]["Age"], CellValue::number(41));
}

#[test]
fn gap_rows_vanish_from_the_table() {
    let (_dir, path) = fixture(|sheet| {
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(1, 0, "Bob").unwrap();
        sheet.write_string(3, 0, "Ann").unwrap();
    });

    let table = normalize(&path, NormalizationOptions::default()).unwrap();

    assert_eq!(table.total_rows, 2);
    assert_eq!(table.rows[1]["Name"], CellValue::text("Ann"));
}

#[test]
fn header_only_sheet_is_empty_data() {
    let (_dir, path) = fixture(|sheet| {
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "Age").unwrap();
    });

    let error = normalize(&path, NormalizationOptions::default()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::EmptyData);
}

#[test]
fn empty_worksheet_is_invalid_format() {
    let (_dir, path) = fixture(|_sheet| {});

    let error = normalize(&path, NormalizationOptions::default()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidFormat);
}

#[test]
fn short_rows_pad_to_the_header_width() {
    let (_dir, path) = fixture(|sheet| {
        sheet.write_string(0, 0, "A").unwrap();
        sheet.write_string(0, 1, "B").unwrap();
        sheet.write_string(0, 2, "C").unwrap();
        sheet.write_string(1, 0, "x").unwrap();
    });

    let table = normalize(&path, NormalizationOptions::default()).unwrap();

    assert_eq!(table.rows[0]["A"], CellValue::text("x"));
    assert_eq!(table.rows[0]["B"], CellValue::Null);
    assert_eq!(table.rows[0]["C"], CellValue::Null);
}

#[test]
fn reads_only_the_first_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multi.xlsx");
    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet();
    first.write_string(0, 0, "Name").unwrap();
    first.write_string(1, 0, "Bob").unwrap();
    let second = workbook.add_worksheet();
    second.write_string(0, 0, "Ignored").unwrap();
    second.write_string(1, 0, "Nope").unwrap();
    workbook.save(&path).unwrap();

    let table = normalize(&path, NormalizationOptions::default()).unwrap();

    assert_eq!(table.headers, vec!["Name"]);
    assert_eq!(table.rows[0]["Name"], CellValue::text("Bob"));
}

#[test]
fn missing_file_is_a_parse_error() {
    let error = normalize(
        std::path::Path::new("/nonexistent/book.xlsx"),
        NormalizationOptions::default(),
    )
    .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Parse);
}
