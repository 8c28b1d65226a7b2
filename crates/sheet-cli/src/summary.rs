use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::json;

use sheet_model::{CellValue, Record};
use sheet_validate::{
    ErrorKind, ValidatedDataset, ValidationError, ValidationOutcome, ValidationSummary,
};

use crate::cli::OutputFormatArg;
use sheet_cli::types::{RuleRow, SearchMatches, SearchRun};

pub fn print_validation(outcome: &ValidationOutcome, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Json => {
            let value = match outcome {
                ValidationOutcome::Valid(dataset) => json!({ "valid": true, "dataset": dataset }),
                ValidationOutcome::Invalid(errors) => json!({
                    "valid": false,
                    "summary": ValidationSummary::from_errors(errors),
                    "errors": errors,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormatArg::Table => match outcome {
            ValidationOutcome::Valid(dataset) => print_dataset(dataset),
            ValidationOutcome::Invalid(errors) => print_errors(errors),
        },
    }
    Ok(())
}

pub fn print_search(run: &SearchRun, format: OutputFormatArg) -> Result<()> {
    match (run, format) {
        (SearchRun::Blocked(errors), OutputFormatArg::Json) => {
            let value = json!({
                "blocked": true,
                "summary": ValidationSummary::from_errors(errors),
                "errors": errors,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        (SearchRun::Blocked(errors), OutputFormatArg::Table) => {
            eprintln!("Search skipped: the upload has validation errors.");
            print_errors(errors);
        }
        (SearchRun::Matches(matches), OutputFormatArg::Json) => {
            println!("{}", serde_json::to_string_pretty(matches)?);
        }
        (SearchRun::Matches(matches), OutputFormatArg::Table) => print_matches(matches),
    }
    Ok(())
}

pub fn print_rules(rows: &[RuleRow], format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormatArg::Table => {
            let mut table = Table::new();
            table.set_header(vec![header_cell("Column"), header_cell("Rules")]);
            apply_table_style(&mut table);
            for row in rows {
                let rules = if row.rules.is_empty() {
                    dim_cell(&row.rules)
                } else {
                    Cell::new(&row.rules)
                };
                table.add_row(vec![Cell::new(&row.column), rules]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

fn print_dataset(dataset: &ValidatedDataset) {
    println!("Valid: {} rows", dataset.len());
    if let Some(sort_key) = dataset.sort_key() {
        println!("Sorted by: {sort_key}");
    }
    if dataset.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(
        dataset
            .headers()
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for record in dataset.records() {
        table.add_row(record_cells(record, dataset.headers()));
    }
    println!("{table}");
}

fn print_errors(errors: &[ValidationError]) {
    let summary = ValidationSummary::from_errors(errors);
    println!(
        "Invalid: {} errors in {} rows",
        summary.total, summary.rows_affected
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Cell"),
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for error in errors {
        table.add_row(vec![
            Cell::new(error.cell_address())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(error.row()),
            Cell::new(error.column()),
            kind_cell(error.kind()),
            Cell::new(error.message()),
        ]);
    }
    println!("{table}");
}

fn print_matches(matches: &SearchMatches) {
    println!(
        "{} matching rows for {} queries",
        matches.matches.len(),
        matches.queries.len()
    );
    if matches.matches.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(
        match_header_labels(&matches.headers)
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &matches.matches {
        let score = Cell::new(format!("{:.2}", row.hit.matched.score));
        let score = if row.hit.matched.edits == 0 {
            score.fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            score.fg(Color::Yellow)
        };
        let mut cells = vec![Cell::new(row.hit.row + 1), Cell::new(&row.hit.column), score];
        cells.extend(record_cells(&row.record, &matches.headers));
        table.add_row(cells);
    }
    println!("{table}");
}

/// `#` is the 1-based position in the sorted dataset, not a spreadsheet row.
fn match_header_labels(headers: &[String]) -> Vec<&str> {
    let mut labels = vec!["#", "Matched", "Score"];
    labels.extend(headers.iter().map(String::as_str));
    labels
}

fn record_cells(record: &Record, headers: &[String]) -> Vec<Cell> {
    headers
        .iter()
        .map(|header| match record.get(header) {
            CellValue::Empty => dim_cell("-"),
            value => Cell::new(value),
        })
        .collect()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: ErrorKind) -> Cell {
    match kind {
        ErrorKind::Blank => Cell::new(kind.label()).fg(Color::Yellow),
        ErrorKind::Unique => Cell::new(kind.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        _ => Cell::new(kind.label()).fg(Color::Red),
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
