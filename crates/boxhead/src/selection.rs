//! Resolved column selections and move targets.
//!
//! Directives take a [`Columns`]: an ordered list of column identities that
//! has already been resolved. Single names, arrays, slices and vectors all
//! convert into it, so callers rarely name the type:
//!
//! ```rust
//! use boxhead::Columns;
//!
//! let one: Columns = "num".into();
//! let many: Columns = ["num", "char"].into();
//! assert_eq!(one.as_slice(), ["num"]);
//! assert_eq!(many.len(), 2);
//! ```
//!
//! Predicate selectors are evaluated outside this crate and hand over their
//! result as a `Vec<String>`.

use serde::{Deserialize, Serialize};

/// An ordered list of column identities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Columns(Vec<String>);

impl Columns {
    /// An empty selection.
    pub fn none() -> Self {
        Columns(Vec::new())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Drops repeated identities, keeping the first occurrence.
    pub fn dedup(self) -> Self {
        let mut out: Vec<String> = Vec::with_capacity(self.0.len());
        for name in self.0 {
            if !out.contains(&name) {
                out.push(name);
            }
        }
        Columns(out)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Columns {
    fn from(name: &str) -> Self {
        Columns(vec![name.to_string()])
    }
}

impl From<String> for Columns {
    fn from(name: String) -> Self {
        Columns(vec![name])
    }
}

impl From<Vec<String>> for Columns {
    fn from(names: Vec<String>) -> Self {
        Columns(names)
    }
}

impl From<Vec<&str>> for Columns {
    fn from(names: Vec<&str>) -> Self {
        Columns(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Columns {
    fn from(names: &[&str]) -> Self {
        Columns(names.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[String]> for Columns {
    fn from(names: &[String]) -> Self {
        Columns(names.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Columns {
    fn from(names: [&str; N]) -> Self {
        Columns(names.iter().map(|s| s.to_string()).collect())
    }
}

impl FromIterator<String> for Columns {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Columns(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Where moved columns land.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveTarget {
    /// Before every other column.
    Start,
    /// After every other column.
    End,
    /// Immediately after the named anchor column.
    After(String),
}

impl From<&str> for MoveTarget {
    fn from(anchor: &str) -> Self {
        MoveTarget::After(anchor.to_string())
    }
}

impl From<String> for MoveTarget {
    fn from(anchor: String) -> Self {
        MoveTarget::After(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let cols: Columns = ["c", "b", "c", "a", "b"].into();
        assert_eq!(cols.dedup().as_slice(), ["c", "b", "a"]);
    }

    #[test]
    fn test_anchor_from_str() {
        assert_eq!(MoveTarget::from("b"), MoveTarget::After("b".into()));
    }
}
