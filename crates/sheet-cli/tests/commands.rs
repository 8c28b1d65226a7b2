use std::fs;
use std::path::PathBuf;

use sheet_cli::commands::{build_search_config, run_rules, run_search, run_validate};
use sheet_cli::types::{SearchOptions, SearchPreset, SearchRun};
use sheet_validate::{ErrorKind, RuleKind};
use tempfile::TempDir;

fn write_upload(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const CLEAN: &str = "Name,Email,Phone,ID\n\
                     Bob,bob@example.com,5551234567,2\n\
                     alice,alice@example.com,5559876543,1\n\
                     Carla,carla@example.com,5550001111,3\n";

const DIRTY: &str = "Name,Email,Phone,ID\n\
                     Alice,a@x.com,1234567890,1\n\
                     bob,bad,123,1\n";

#[test]
fn validate_clean_upload_sorts_by_name() {
    let dir = TempDir::new().unwrap();
    let path = write_upload(&dir, "people.csv", CLEAN);

    let outcome = run_validate(&path).unwrap();
    let dataset = outcome.dataset().expect("clean upload is valid");
    let names: Vec<String> = dataset
        .records()
        .iter()
        .map(|record| record.get("Name").to_string())
        .collect();
    assert_eq!(names, vec!["alice", "Bob", "Carla"]);
    assert_eq!(dataset.sort_key(), Some("Name"));
}

#[test]
fn validate_dirty_upload_reports_cells() {
    let dir = TempDir::new().unwrap();
    let path = write_upload(&dir, "people.csv", DIRTY);

    let outcome = run_validate(&path).unwrap();
    assert!(!outcome.is_valid());
    let cells: Vec<(&str, ErrorKind)> = outcome
        .errors()
        .iter()
        .map(|error| (error.cell_address(), error.kind()))
        .collect();
    assert_eq!(
        cells,
        vec![
            ("B3", ErrorKind::Email),
            ("C3", ErrorKind::Phone),
            ("D3", ErrorKind::Unique),
        ]
    );
}

#[test]
fn validate_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let error = run_validate(&dir.path().join("absent.csv")).unwrap_err();
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn search_is_blocked_by_validation_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_upload(&dir, "people.csv", DIRTY);

    let run = run_search(&path, &["alice".to_string()], &SearchOptions::default()).unwrap();
    match run {
        SearchRun::Blocked(errors) => assert_eq!(errors.len(), 3),
        SearchRun::Matches(_) => panic!("search ran on an invalid upload"),
    }
}

#[test]
fn search_finds_rows_with_a_typo() {
    let dir = TempDir::new().unwrap();
    let path = write_upload(&dir, "people.csv", CLEAN);

    let run = run_search(&path, &["carl".to_string()], &SearchOptions::default()).unwrap();
    let SearchRun::Matches(matches) = run else {
        panic!("clean upload was blocked");
    };
    assert_eq!(matches.headers, vec!["Name", "Email", "Phone", "ID"]);
    assert_eq!(matches.matches.len(), 1);
    let first = &matches.matches[0];
    assert_eq!(first.record.get("Name").to_string(), "Carla");
    assert_eq!(first.hit.row, 2);
}

#[test]
fn search_merges_queries_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_upload(&dir, "people.csv", CLEAN);
    let queries = vec!["carla".to_string(), "bob".to_string(), "carla".to_string()];

    let SearchRun::Matches(matches) =
        run_search(&path, &queries, &SearchOptions::default()).unwrap()
    else {
        panic!("clean upload was blocked");
    };
    let names: Vec<String> = matches
        .matches
        .iter()
        .map(|row| row.record.get("Name").to_string())
        .collect();
    assert_eq!(names, vec!["Carla", "Bob"]);
}

#[test]
fn search_json_flattens_hit_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_upload(&dir, "people.csv", CLEAN);

    let SearchRun::Matches(matches) =
        run_search(&path, &["bob".to_string()], &SearchOptions::default()).unwrap()
    else {
        panic!("clean upload was blocked");
    };
    let json = serde_json::to_value(&matches).unwrap();
    let first = &json["matches"][0];
    assert_eq!(first["column"], "Name");
    assert_eq!(first["edits"], 0);
    assert_eq!(first["record"]["Name"]["value"], "Bob");
}

#[test]
fn rules_classify_column_names() {
    let rows = run_rules(&[
        "Work Email".to_string(),
        "Mobile".to_string(),
        "Notes".to_string(),
    ]);
    assert!(rows[0].rules.contains(RuleKind::Email));
    assert!(rows[1].rules.contains(RuleKind::Phone));
    assert!(rows[2].rules.is_empty());
}

#[test]
fn search_config_applies_preset_then_overrides() {
    let options = SearchOptions {
        preset: SearchPreset::Strict,
        max_edits: Some(3),
        case_sensitive: true,
        ..SearchOptions::default()
    };
    let config = build_search_config(&options).unwrap();
    assert_eq!(config.threshold, 0.2);
    assert_eq!(config.max_edits, 3);
    assert!(!config.ignore_case);
}

#[test]
fn search_config_rejects_out_of_range_threshold() {
    let options = SearchOptions {
        threshold: Some(1.5),
        ..SearchOptions::default()
    };
    assert!(build_search_config(&options).is_err());
}
