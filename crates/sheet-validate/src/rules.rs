//! Column classification.
//!
//! A column name is matched case-insensitively against fixed keyword lists.
//! Every list that matches contributes its rule, so one column can carry
//! several rules at once ("Unique Phone ID" is both phone and identity).

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A semantic rule attached to a column.
///
/// Declaration order is the order field rules run in for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Email,
    Phone,
    Numeric,
    Date,
    /// Drives the uniqueness pass rather than a per-cell check.
    Identity,
}

impl RuleKind {
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Email,
        RuleKind::Phone,
        RuleKind::Numeric,
        RuleKind::Date,
        RuleKind::Identity,
    ];

    /// Lowercase keywords that select this rule when found in a column name.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            RuleKind::Email => &["email"],
            RuleKind::Phone => &["phone", "mobile"],
            RuleKind::Numeric => &["age", "number", "numeric"],
            RuleKind::Date => &["date"],
            RuleKind::Identity => &["id", "registration", "unique"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RuleKind::Email => "email",
            RuleKind::Phone => "phone",
            RuleKind::Numeric => "numeric",
            RuleKind::Date => "date",
            RuleKind::Identity => "identity",
        }
    }

    /// True for rules checked cell by cell.
    pub fn is_field_rule(self) -> bool {
        !matches!(self, RuleKind::Identity)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of rules that apply to one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet(BTreeSet<RuleKind>);

impl RuleSet {
    pub fn contains(&self, rule: RuleKind) -> bool {
        self.0.contains(&rule)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.0.iter().copied()
    }

    /// Rules applied per cell, in application order.
    pub fn field_rules(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.iter().filter(|rule| rule.is_field_rule())
    }

    pub fn is_identity(&self) -> bool {
        self.contains(RuleKind::Identity)
    }
}

impl FromIterator<RuleKind> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let labels: Vec<&str> = self.iter().map(RuleKind::label).collect();
        f.write_str(&labels.join(", "))
    }
}

/// Classify a column name into the rules that apply to it.
pub fn classify(column: &str) -> RuleSet {
    let lower = column.to_lowercase();
    RuleKind::ALL
        .into_iter()
        .filter(|rule| rule.keywords().iter().any(|kw| lower.contains(kw)))
        .collect()
}

/// A header together with its classified rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedColumn {
    pub index: usize,
    pub name: String,
    pub rules: RuleSet,
}

/// Classification of every header of a sheet, in header order.
#[derive(Debug, Clone, Default)]
pub struct ColumnRules {
    columns: Vec<ClassifiedColumn>,
}

impl ColumnRules {
    pub fn classify_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            columns: headers
                .iter()
                .enumerate()
                .map(|(index, name)| ClassifiedColumn {
                    index,
                    name: name.as_ref().to_string(),
                    rules: classify(name.as_ref()),
                })
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedColumn> {
        self.columns.iter()
    }

    /// Columns that take part in the uniqueness pass.
    pub fn identity_columns(&self) -> impl Iterator<Item = &ClassifiedColumn> {
        self.columns.iter().filter(|c| c.rules.is_identity())
    }

    pub fn get(&self, name: &str) -> Option<&ClassifiedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }
}
