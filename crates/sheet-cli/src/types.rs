use serde::Serialize;
use sheet_model::Record;
use sheet_search::SearchHit;
use sheet_validate::{RuleSet, ValidationError};

/// Named tolerance presets for the search command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPreset {
    #[default]
    Default,
    Strict,
    Relaxed,
}

/// Search tolerance as requested on the command line.
///
/// Explicit values override the preset.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub preset: SearchPreset,
    pub threshold: Option<f64>,
    pub max_edits: Option<usize>,
    pub case_sensitive: bool,
    pub min_query_chars: Option<usize>,
}

/// A matched row together with why it matched.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRow {
    #[serde(flatten)]
    pub hit: SearchHit,
    pub record: Record,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatches {
    pub headers: Vec<String>,
    pub queries: Vec<String>,
    pub matches: Vec<MatchRow>,
}

/// Result of the search command.
#[derive(Debug, Clone)]
pub enum SearchRun {
    /// The upload failed validation, so nothing was indexed.
    Blocked(Vec<ValidationError>),
    Matches(SearchMatches),
}

/// One column name and the rules it was classified into.
#[derive(Debug, Clone, Serialize)]
pub struct RuleRow {
    pub column: String,
    pub rules: RuleSet,
}
