use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use sheet_ingest::load_sheet;
use sheet_search::{SearchConfig, SearchIndex};
use sheet_validate::{ValidationOutcome, classify, validate_sheet};

use crate::logging::redact_value;
use crate::types::{MatchRow, RuleRow, SearchMatches, SearchOptions, SearchPreset, SearchRun};

/// Decode and validate one upload.
pub fn run_validate(path: &Path) -> Result<ValidationOutcome> {
    let span = info_span!("validate_file", path = %path.display());
    let _guard = span.enter();

    let sheet = load_sheet(path).with_context(|| format!("load {}", path.display()))?;
    let outcome = validate_sheet(&sheet);
    info!(valid = outcome.is_valid(), errors = outcome.errors().len(), "upload checked");
    Ok(outcome)
}

/// Decode, validate, index, and search one upload.
///
/// Validation errors block the search; they are returned, not raised.
pub fn run_search(path: &Path, queries: &[String], options: &SearchOptions) -> Result<SearchRun> {
    let span = info_span!("search_file", path = %path.display(), queries = queries.len());
    let _guard = span.enter();

    let config = build_search_config(options)?;
    let dataset = match run_validate(path)? {
        ValidationOutcome::Valid(dataset) => dataset,
        ValidationOutcome::Invalid(errors) => return Ok(SearchRun::Blocked(errors)),
    };

    for query in queries {
        debug!(query = redact_value(query), "query");
    }

    let index = SearchIndex::from_dataset(&dataset, config);
    let matches = index
        .search_many_scored(queries)
        .into_iter()
        .filter_map(|hit| {
            let record = index.record(&hit)?.clone();
            Some(MatchRow { hit, record })
        })
        .collect::<Vec<_>>();
    info!(matches = matches.len(), "search complete");

    Ok(SearchRun::Matches(SearchMatches {
        headers: dataset.headers().to_vec(),
        queries: queries.to_vec(),
        matches,
    }))
}

/// Classify column names without loading any data.
pub fn run_rules(columns: &[String]) -> Vec<RuleRow> {
    columns
        .iter()
        .map(|column| RuleRow {
            column: column.clone(),
            rules: classify(column),
        })
        .collect()
}

/// Resolve a preset plus explicit overrides into a checked configuration.
pub fn build_search_config(options: &SearchOptions) -> Result<SearchConfig> {
    let mut config = match options.preset {
        SearchPreset::Default => SearchConfig::default(),
        SearchPreset::Strict => SearchConfig::strict(),
        SearchPreset::Relaxed => SearchConfig::relaxed(),
    };
    if let Some(threshold) = options.threshold {
        config.threshold = threshold;
    }
    if let Some(max_edits) = options.max_edits {
        config.max_edits = max_edits;
    }
    if let Some(min_query_chars) = options.min_query_chars {
        config.min_query_chars = min_query_chars;
    }
    config = config.with_ignore_case(!options.case_sensitive);
    config.validate().context("invalid search options")?;
    Ok(config)
}
