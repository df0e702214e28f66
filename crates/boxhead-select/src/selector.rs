//! Selector expressions.
//!
//! A [`ColumnSelector`] describes a set of columns without naming every one.
//! Resolving it against a [`Boxhead`] yields the matching identities in a
//! deterministic order, ready to hand to any directive.

use boxhead::{Boxhead, ColumnKind, Columns};
use regex::Regex;
use tracing::trace;

use crate::error::{Result, SelectError};

/// A column selection predicate.
///
/// Explicit names resolve in the order given and must exist. Pattern and kind
/// selectors resolve in boxhead order and may match nothing.
#[derive(Debug, Clone)]
pub enum ColumnSelector {
    /// One column by identity.
    Name(String),
    /// Several columns by identity, in the order listed.
    Names(Vec<String>),
    /// Identities starting with the prefix.
    StartsWith(String),
    /// Identities ending with the suffix.
    EndsWith(String),
    /// Identities containing the substring.
    Contains(String),
    /// Identities matching the regex.
    Matches(Regex),
    /// Columns of one kind.
    Kind(ColumnKind),
    /// Every column.
    Everything,
    /// Left matches, then right matches not already selected.
    Union(Box<ColumnSelector>, Box<ColumnSelector>),
    /// Left matches that right also selects.
    Intersect(Box<ColumnSelector>, Box<ColumnSelector>),
    /// Columns the inner selector does not select, in boxhead order.
    Not(Box<ColumnSelector>),
}

impl ColumnSelector {
    pub fn name(name: impl Into<String>) -> Self {
        ColumnSelector::Name(name.into())
    }

    pub fn names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        ColumnSelector::Names(names.into_iter().map(Into::into).collect())
    }

    pub fn starts_with(prefix: impl Into<String>) -> Self {
        ColumnSelector::StartsWith(prefix.into())
    }

    pub fn ends_with(suffix: impl Into<String>) -> Self {
        ColumnSelector::EndsWith(suffix.into())
    }

    pub fn contains(needle: impl Into<String>) -> Self {
        ColumnSelector::Contains(needle.into())
    }

    /// Compile `pattern` into a regex selector.
    pub fn matches(pattern: &str) -> Result<Self> {
        Ok(ColumnSelector::Matches(Regex::new(pattern)?))
    }

    pub fn kind(kind: ColumnKind) -> Self {
        ColumnSelector::Kind(kind)
    }

    pub fn everything() -> Self {
        ColumnSelector::Everything
    }

    pub fn or(self, other: ColumnSelector) -> Self {
        ColumnSelector::Union(Box::new(self), Box::new(other))
    }

    pub fn and(self, other: ColumnSelector) -> Self {
        ColumnSelector::Intersect(Box::new(self), Box::new(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        ColumnSelector::Not(Box::new(self))
    }

    /// Resolve against `boxhead` into an ordered, duplicate-free list.
    pub fn resolve(&self, boxhead: &Boxhead) -> Result<Vec<String>> {
        let vars = match self {
            ColumnSelector::Name(name) => vec![require(boxhead, name)?],
            ColumnSelector::Names(names) => {
                let mut out: Vec<String> = Vec::with_capacity(names.len());
                for name in names {
                    let var = require(boxhead, name)?;
                    if !out.contains(&var) {
                        out.push(var);
                    }
                }
                out
            }
            ColumnSelector::StartsWith(prefix) => where_var(boxhead, |v| v.starts_with(prefix)),
            ColumnSelector::EndsWith(suffix) => where_var(boxhead, |v| v.ends_with(suffix)),
            ColumnSelector::Contains(needle) => where_var(boxhead, |v| v.contains(needle)),
            ColumnSelector::Matches(regex) => where_var(boxhead, |v| regex.is_match(v)),
            ColumnSelector::Kind(kind) => boxhead
                .iter()
                .filter(|c| c.kind == *kind)
                .map(|c| c.var.clone())
                .collect(),
            ColumnSelector::Everything => boxhead.vars(),
            ColumnSelector::Union(left, right) => {
                let mut out = left.resolve(boxhead)?;
                for var in right.resolve(boxhead)? {
                    if !out.contains(&var) {
                        out.push(var);
                    }
                }
                out
            }
            ColumnSelector::Intersect(left, right) => {
                let keep = right.resolve(boxhead)?;
                let mut out = left.resolve(boxhead)?;
                out.retain(|var| keep.contains(var));
                out
            }
            ColumnSelector::Not(inner) => {
                let drop = inner.resolve(boxhead)?;
                where_var(boxhead, |v| !drop.iter().any(|d| d == v))
            }
        };
        trace!(selector = ?self, matched = vars.len(), "resolved selector");
        Ok(vars)
    }

    /// Resolve into a [`Columns`] selection for a directive.
    pub fn resolve_columns(&self, boxhead: &Boxhead) -> Result<Columns> {
        self.resolve(boxhead).map(Columns::from)
    }
}

impl From<&str> for ColumnSelector {
    fn from(name: &str) -> Self {
        ColumnSelector::name(name)
    }
}

impl From<String> for ColumnSelector {
    fn from(name: String) -> Self {
        ColumnSelector::Name(name)
    }
}

impl From<Vec<&str>> for ColumnSelector {
    fn from(names: Vec<&str>) -> Self {
        ColumnSelector::names(names)
    }
}

fn require(boxhead: &Boxhead, name: &str) -> Result<String> {
    if boxhead.contains(name) {
        Ok(name.to_string())
    } else {
        Err(SelectError::UnknownColumn {
            name: name.to_string(),
        })
    }
}

fn where_var(boxhead: &Boxhead, predicate: impl Fn(&str) -> bool) -> Vec<String> {
    boxhead
        .iter()
        .filter(|c| predicate(&c.var))
        .map(|c| c.var.clone())
        .collect()
}
