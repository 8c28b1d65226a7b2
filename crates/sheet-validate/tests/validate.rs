//! End-to-end validation scenarios.

use sheet_model::{Record, Sheet};
use sheet_validate::{
    ErrorKind, ValidationError, ValidationOutcome, ValidationSummary, validate, validate_sheet,
};

fn people_headers() -> Vec<String> {
    ["Name", "Email", "Phone", "ID"]
        .iter()
        .map(|h| (*h).to_string())
        .collect()
}

fn person(name: &str, email: &str, phone: &str, id: &str) -> Record {
    Record::new()
        .with("Name", name)
        .with("Email", email)
        .with("Phone", phone)
        .with("ID", id)
}

#[test]
fn bad_upload_reports_every_error_and_no_dataset() {
    let sheet = Sheet::new(
        "People",
        people_headers(),
        vec![
            person("Alice", "a@x.com", "1234567890", "1"),
            person("bob", "bad", "123", "1"),
        ],
    )
    .unwrap();

    let outcome = validate_sheet(&sheet);
    assert!(!outcome.is_valid());
    assert!(outcome.dataset().is_none());

    let errors = outcome.errors();
    let summary: Vec<(ErrorKind, usize, &str, &str)> = errors
        .iter()
        .map(|e| (e.kind(), e.row(), e.column(), e.cell_address()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ErrorKind::Email, 3, "Email", "B3"),
            (ErrorKind::Phone, 3, "Phone", "C3"),
            (ErrorKind::Unique, 3, "ID", "D3"),
        ]
    );
    assert_eq!(
        errors[2].message(),
        "Duplicate value '1' in ID (first seen in row 2)"
    );
}

#[test]
fn clean_upload_is_sorted_by_name() {
    let sheet = Sheet::new(
        "People",
        people_headers(),
        vec![
            person("Bob", "bob@x.com", "(555) 000-1111", "2"),
            person("alice", "alice@x.com", "5550002222", "1"),
        ],
    )
    .unwrap();

    let ValidationOutcome::Valid(dataset) = validate_sheet(&sheet) else {
        panic!("expected a clean dataset");
    };
    assert_eq!(dataset.sort_key(), Some("Name"));
    let names: Vec<String> = dataset
        .records()
        .iter()
        .map(|r| r.get("Name").to_string())
        .collect();
    assert_eq!(names, vec!["alice", "Bob"]);
}

#[test]
fn missing_cells_are_blank_errors() {
    let records = vec![Record::new().with("Name", "Alice")];
    let errors = validate(&people_headers(), &records);

    let kinds: Vec<ErrorKind> = errors.iter().map(ValidationError::kind).collect();
    assert_eq!(
        kinds,
        vec![ErrorKind::Blank, ErrorKind::Blank, ErrorKind::Blank]
    );
    assert_eq!(errors[0].message(), "Email is required");
}

#[test]
fn date_and_numeric_columns() {
    let headers = vec!["Start Date".to_string(), "Age".to_string()];
    let records = vec![
        Record::new().with("Start Date", "2024-02-29").with("Age", "41"),
        Record::new().with("Start Date", "2023-02-29").with("Age", "forty"),
    ];
    let errors = validate(&headers, &records);

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].kind(), ErrorKind::Date);
    assert_eq!(errors[0].cell_address(), "A3");
    assert_eq!(errors[0].message(), "'2023-02-29' is not a valid date");
    assert_eq!(errors[1].kind(), ErrorKind::Numeric);
    assert_eq!(errors[1].cell_address(), "B3");
}

#[test]
fn uniqueness_errors_group_by_column() {
    let headers = vec!["Student ID".to_string(), "Registration".to_string()];
    let records = vec![
        Record::new().with("Student ID", "S1").with("Registration", "R1"),
        Record::new().with("Student ID", "S1").with("Registration", "R1"),
        Record::new().with("Student ID", "S1").with("Registration", "R2"),
    ];
    let errors = validate(&headers, &records);

    let found: Vec<(&str, usize)> = errors.iter().map(|e| (e.column(), e.row())).collect();
    assert_eq!(
        found,
        vec![("Student ID", 3), ("Student ID", 4), ("Registration", 3)]
    );
}

#[test]
fn summary_counts_errors() {
    let records = vec![
        person("Alice", "bad", "1", "1"),
        person("", "a@x.com", "1234567890", "1"),
    ];
    let errors = validate(&people_headers(), &records);
    let summary = ValidationSummary::from_errors(&errors);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.count(ErrorKind::Email), 1);
    assert_eq!(summary.count(ErrorKind::Phone), 1);
    assert_eq!(summary.count(ErrorKind::Blank), 1);
    assert_eq!(summary.count(ErrorKind::Unique), 1);
    assert_eq!(summary.rows_affected, 2);
    assert_eq!(summary.by_column.get("ID"), Some(&1));
}

#[test]
fn errors_serialize_for_callers() {
    let errors = validate(&people_headers(), &[person("Al", "bad", "1234567890", "9")]);
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json[0]["cellAddress"], "B2");
    assert_eq!(json[0]["row"], 2);
    assert_eq!(json[0]["column"], "Email");
    assert_eq!(json[0]["kind"], "email");
}
