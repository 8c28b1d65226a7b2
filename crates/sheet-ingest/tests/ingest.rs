use std::io::Write;
use std::path::Path;

use sheet_ingest::{IngestError, check_file_size, load_sheet, read_workbook};
use sheet_model::CellValue;
use tempfile::{NamedTempFile, TempDir};

fn write_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_csv_upload() {
    let file = write_file(
        ".csv",
        "Name,Email,Phone,ID\nAlice,a@x.com,1234567890,1\nbob,bad,123,1\n",
    );
    let sheet = load_sheet(file.path()).unwrap();

    assert_eq!(sheet.headers, vec!["Name", "Email", "Phone", "ID"]);
    assert_eq!(sheet.row_count(), 2);
    assert_eq!(sheet.records[1].get("Phone"), &CellValue::from("123"));
}

#[test]
fn loads_json_upload_with_typed_cells() {
    let file = write_file(
        ".json",
        r#"{"sheets": [{"name": "Staff", "rows": [["Name", "Age", "Active"], ["Alice", 30, true], ["Bob", null, false]]}]}"#,
    );
    let sheet = load_sheet(file.path()).unwrap();

    assert_eq!(sheet.name, "Staff");
    assert_eq!(sheet.records[0].get("Age"), &CellValue::Number(30.0));
    assert_eq!(sheet.records[1].get("Age"), &CellValue::Empty);
    assert_eq!(sheet.records[1].get("Active"), &CellValue::Bool(false));
}

#[test]
fn multi_sheet_workbooks_are_rejected() {
    let file = write_file(
        ".json",
        r#"{"sheets": [
            {"name": "A", "rows": [["Name"], ["Al"]]},
            {"name": "B", "rows": [["Name"], ["Bo"]]}
        ]}"#,
    );
    assert_eq!(read_workbook(file.path()).unwrap().sheets.len(), 2);
    let err = load_sheet(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::MultipleSheets { count: 2 }));
}

#[test]
fn sheet_count_is_checked_before_headers() {
    let file = write_file(
        ".json",
        r#"{"sheets": [
            {"name": "A", "rows": [["Name"], ["Al"]]},
            {"name": "Notes", "rows": [["x", ""], ["1", "2"]]}
        ]}"#,
    );
    let err = load_sheet(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::MultipleSheets { count: 2 }));
}

#[test]
fn single_json_sheet_with_blank_header_is_a_model_error() {
    let file = write_file(
        ".json",
        r#"{"sheets": [{"name": "Notes", "rows": [["x", ""], ["1", "2"]]}]}"#,
    );
    let err = load_sheet(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::Model { .. }));
}

#[test]
fn header_only_csv_is_empty() {
    let file = write_file(".csv", "Name,Email\n");
    let err = load_sheet(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::EmptySheet { .. }));
}

#[test]
fn empty_file_is_empty_sheet() {
    let file = write_file(".csv", "");
    let err = load_sheet(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::EmptySheet { .. }));
}

#[test]
fn duplicate_headers_are_rejected() {
    let file = write_file(".csv", "ID,ID\n1,2\n");
    let err = load_sheet(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::Model { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = write_file(".json", "{not json");
    let err = load_sheet(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::JsonParse { .. }));
}

#[test]
fn unknown_extension_is_unsupported() {
    let file = write_file(".xlsx", "PK");
    let err = read_workbook(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = load_sheet(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn size_limit_is_enforced() {
    let file = write_file(".csv", "Name\nAlice\n");
    assert!(check_file_size(file.path(), 1024).is_ok());
    let err = check_file_size(file.path(), 4).unwrap_err();
    assert!(matches!(err, IngestError::FileTooLarge { max_size: 4, .. }));
    assert!(check_file_size(Path::new("/definitely/not/here.csv"), 4).is_err());
}
