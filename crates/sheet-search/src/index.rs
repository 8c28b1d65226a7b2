//! Search index and ranking.

use std::collections::HashSet;

use serde::Serialize;
use sheet_model::Record;
use sheet_validate::ValidatedDataset;
use tracing::debug;

use crate::config::SearchConfig;
use crate::score::{FieldMatch, match_field};

/// A ranked match: the row, the field that matched best, and how well.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Position of the row in the indexed slice.
    pub row: usize,
    /// Header of the best-matching field.
    pub column: String,
    #[serde(flatten)]
    pub matched: FieldMatch,
}

impl SearchHit {
    /// Human-readable description of why the row matched.
    pub fn explain(&self) -> String {
        let edits = match self.matched.edits {
            0 => "exact".to_string(),
            1 => "1 edit".to_string(),
            n => format!("{n} edits"),
        };
        format!(
            "{}: {} (score {:.2}, coverage {:.0}%)",
            self.column,
            edits,
            self.matched.score,
            self.matched.coverage * 100.0
        )
    }
}

#[derive(Debug, Clone)]
struct IndexedField {
    column: usize,
    text: Vec<char>,
}

/// Normalized field text for every row, built once per dataset.
#[derive(Debug, Clone)]
pub struct SearchIndex<'a> {
    config: SearchConfig,
    headers: Vec<String>,
    rows: &'a [Record],
    fields: Vec<Vec<IndexedField>>,
}

impl<'a> SearchIndex<'a> {
    /// Index `rows` over the given headers. Blank fields are not indexed.
    pub fn build<S: AsRef<str>>(rows: &'a [Record], headers: &[S], config: SearchConfig) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.as_ref().to_string()).collect();
        let fields: Vec<Vec<IndexedField>> = rows
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .enumerate()
                    .filter_map(|(column, header)| {
                        let value = record.get(header);
                        if value.is_blank() {
                            return None;
                        }
                        Some(IndexedField {
                            column,
                            text: config.normalize(&value.to_string()),
                        })
                    })
                    .collect()
            })
            .collect();

        debug!(
            rows = rows.len(),
            columns = headers.len(),
            fields = fields.iter().map(Vec::len).sum::<usize>(),
            "search index built"
        );

        Self {
            config,
            headers,
            rows,
            fields,
        }
    }

    /// Index every column of a validated dataset.
    pub fn from_dataset(dataset: &'a ValidatedDataset, config: SearchConfig) -> Self {
        Self::build(dataset.records(), dataset.headers(), config)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ranked hits for one query, best first.
    ///
    /// Blank queries return nothing. Ties on score and coverage keep row order.
    pub fn search_scored(&self, query: &str) -> Vec<SearchHit> {
        let query = self.config.normalize(query);
        if query.is_empty() || query.len() < self.config.min_query_chars {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .fields
            .iter()
            .enumerate()
            .filter_map(|(row, fields)| {
                let (column, matched) = self.best_field(&query, fields)?;
                Some(SearchHit {
                    row,
                    column: self.headers[column].clone(),
                    matched,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.matched.rank_cmp(&b.matched).then(a.row.cmp(&b.row)));
        debug!(query_chars = query.len(), hits = hits.len(), "search finished");
        hits
    }

    /// Matching rows for one query, best first.
    pub fn search(&self, query: &str) -> Vec<&'a Record> {
        self.records_for(self.search_scored(query))
    }

    /// Union of several queries' hits, each row once.
    ///
    /// Rows appear in query order, then rank order within a query.
    pub fn search_many_scored<S: AsRef<str>>(&self, queries: &[S]) -> Vec<SearchHit> {
        let mut seen = HashSet::new();
        queries
            .iter()
            .flat_map(|query| self.search_scored(query.as_ref()))
            .filter(|hit| seen.insert(hit.row))
            .collect()
    }

    pub fn search_many<S: AsRef<str>>(&self, queries: &[S]) -> Vec<&'a Record> {
        self.records_for(self.search_many_scored(queries))
    }

    /// The indexed row behind a hit.
    pub fn record(&self, hit: &SearchHit) -> Option<&'a Record> {
        self.rows.get(hit.row)
    }

    fn records_for(&self, hits: Vec<SearchHit>) -> Vec<&'a Record> {
        hits.iter().filter_map(|hit| self.record(hit)).collect()
    }

    fn best_field(&self, query: &[char], fields: &[IndexedField]) -> Option<(usize, FieldMatch)> {
        fields
            .iter()
            .filter_map(|field| {
                match_field(query, &field.text, &self.config).map(|m| (field.column, m))
            })
            .min_by(|a, b| a.1.rank_cmp(&b.1).then(a.0.cmp(&b.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::new().with("Name", "Alice").with("City", "Boston"),
            Record::new().with("Name", "Bob").with("City", "Austin"),
            Record::new().with("Name", "Alicia").with("City", ""),
        ]
    }

    #[test]
    fn blank_query_matches_nothing() {
        let rows = rows();
        let index = SearchIndex::build(&rows, &["Name", "City"], SearchConfig::default());
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
    }

    #[test]
    fn best_field_is_reported() {
        let rows = rows();
        let index = SearchIndex::build(&rows, &["Name", "City"], SearchConfig::default());
        let hits = index.search_scored("austin");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].row, 1);
        assert_eq!(hits[0].column, "City");
        assert_eq!(hits[0].explain(), "City: exact (score 0.00, coverage 100%)");
    }

    #[test]
    fn min_query_chars_filters_short_queries() {
        let rows = rows();
        let config = SearchConfig::default().with_min_query_chars(3);
        let index = SearchIndex::build(&rows, &["Name"], config);
        assert!(index.search("al").is_empty());
        assert_eq!(index.search("ali").len(), 2);
    }

    #[test]
    fn only_listed_headers_are_searched() {
        let rows = rows();
        let index = SearchIndex::build(&rows, &["Name"], SearchConfig::default());
        assert!(index.search("boston").is_empty());
    }
}
