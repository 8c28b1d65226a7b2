//! Ordering of validated rows.

use sheet_model::Record;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const SORT_KEYWORDS: &[&str] = &["name", "title"];

/// Pick the column to sort by: the first header mentioning a name or title,
/// otherwise the first header.
pub fn choose_sort_column<S: AsRef<str>>(headers: &[S]) -> Option<&str> {
    headers
        .iter()
        .map(|header| header.as_ref())
        .find(|header| {
            let lower = header.to_lowercase();
            SORT_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .or_else(|| headers.first().map(|header| header.as_ref()))
}

/// Stable sort by the collation key of `column`; blanks sort as "".
pub fn sort_records(records: &mut [Record], column: &str) {
    records.sort_by_cached_key(|record| collation_key(&record.get(column).to_string()));
}

/// Accents are ignored first, then break ties, so "Émile" sorts with the
/// e's and just after "emile". Case never affects the order.
fn collation_key(text: &str) -> (String, String) {
    let lower = text.to_lowercase();
    let base = lower.nfd().filter(|c| !is_combining_mark(*c)).collect();
    (base, lower)
}
