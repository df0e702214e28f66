//! Spanner descriptors and the spanner registry.
//!
//! A spanner is a header band drawn above a set of columns. Spanners live on
//! numbered levels: level 0 sits directly above the column labels and higher
//! levels stack on top. Two spanners on the same level never share a column.
//!
//! # Placement
//!
//! [`Spanners::next_level`] is first-fit: it scans levels upward from 0 and
//! returns the first one whose occupied columns are disjoint from the
//! candidate's. An unoccupied level always qualifies, so the scan always ends.
//!
//! ```rust
//! use boxhead::{SpannerInfo, Spanners};
//!
//! let spanners = Spanners::new([
//!     SpannerInfo::new("a", 0, ["col1"]),
//!     SpannerInfo::new("b", 1, ["col2"]),
//! ]);
//! assert_eq!(spanners.next_level(&["col1"]), 1);
//! assert_eq!(spanners.next_level(&["col2"]), 2);
//! assert_eq!(spanners.next_level(&["col3"]), 0);
//! ```

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{BoxheadError, Result};

/// Descriptor for a single spanner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpannerInfo {
    /// Unique id, used when composing spanners of spanners.
    pub spanner_id: String,
    /// Vertical level; 0 is nearest the column labels.
    pub spanner_level: usize,
    /// Label as given by the caller, opaque until built.
    pub spanner_label: String,
    /// Covered columns, in the order they were selected.
    pub vars: Vec<String>,
    /// Display text produced by a build pass.
    #[serde(default)]
    pub built: Option<String>,
}

impl SpannerInfo {
    /// A spanner whose label equals its id.
    pub fn new<S: Into<String>>(
        spanner_id: impl Into<String>,
        spanner_level: usize,
        vars: impl IntoIterator<Item = S>,
    ) -> Self {
        let spanner_id = spanner_id.into();
        SpannerInfo {
            spanner_label: spanner_id.clone(),
            spanner_id,
            spanner_level,
            vars: vars.into_iter().map(Into::into).collect(),
            built: None,
        }
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.spanner_label = label.into();
        self
    }

    /// Set the built display text.
    pub fn built(mut self, built: impl Into<String>) -> Self {
        self.built = Some(built.into());
        self
    }

    /// Text to display: the built text, or the raw label before a build pass.
    pub fn built_label(&self) -> &str {
        self.built.as_deref().unwrap_or(&self.spanner_label)
    }

    pub fn covers(&self, var: &str) -> bool {
        self.vars.iter().any(|v| v == var)
    }
}

/// Ordered registry of spanners.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spanners {
    spanners: Vec<SpannerInfo>,
}

impl Spanners {
    pub fn new(spanners: impl IntoIterator<Item = SpannerInfo>) -> Self {
        Spanners {
            spanners: spanners.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.spanners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spanners.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpannerInfo> {
        self.spanners.iter()
    }

    pub fn as_slice(&self) -> &[SpannerInfo] {
        &self.spanners
    }

    /// Look up a spanner by id.
    pub fn get(&self, spanner_id: &str) -> Option<&SpannerInfo> {
        self.spanners.iter().find(|s| s.spanner_id == spanner_id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.spanners.iter().map(|s| s.spanner_id.as_str()).collect()
    }

    /// Distinct levels in use, ascending.
    pub fn levels(&self) -> BTreeSet<usize> {
        self.spanners.iter().map(|s| s.spanner_level).collect()
    }

    pub fn max_level(&self) -> Option<usize> {
        self.spanners.iter().map(|s| s.spanner_level).max()
    }

    /// Spanners on `level`, in registry order.
    pub fn at_level(&self, level: usize) -> impl Iterator<Item = &SpannerInfo> {
        self.spanners
            .iter()
            .filter(move |s| s.spanner_level == level)
    }

    /// A registry with `spanner` appended; existing entries keep their order.
    pub fn append(&self, spanner: SpannerInfo) -> Spanners {
        let mut spanners = self.spanners.clone();
        spanners.push(spanner);
        Spanners { spanners }
    }

    /// A registry holding only the spanners matching `predicate`.
    pub fn filter(&self, predicate: impl Fn(&SpannerInfo) -> bool) -> Spanners {
        Spanners {
            spanners: self
                .spanners
                .iter()
                .filter(|s| predicate(s))
                .cloned()
                .collect(),
        }
    }

    /// A registry with the spanner at `index` replaced in place.
    pub fn replace(&self, index: usize, spanner: SpannerInfo) -> Result<Spanners> {
        if index >= self.spanners.len() {
            return Err(BoxheadError::IndexOutOfBounds {
                index,
                len: self.spanners.len(),
            });
        }
        let mut spanners = self.spanners.clone();
        spanners[index] = spanner;
        Ok(Spanners { spanners })
    }

    /// A registry where every spanner's built text is `build(spanner)`.
    pub fn built_with(&self, build: impl Fn(&SpannerInfo) -> String) -> Spanners {
        Spanners {
            spanners: self
                .spanners
                .iter()
                .map(|s| {
                    let built = build(s);
                    s.clone().built(built)
                })
                .collect(),
        }
    }

    /// Lowest level whose spanners share no column with `vars`.
    pub fn next_level<S: AsRef<str>>(&self, vars: &[S]) -> usize {
        self.next_level_from(vars, 0)
    }

    /// Like [`next_level`](Self::next_level) but never below `floor`.
    pub fn next_level_from<S: AsRef<str>>(&self, vars: &[S], floor: usize) -> usize {
        let wanted: HashSet<&str> = vars.iter().map(|v| v.as_ref()).collect();
        let mut level = floor;
        loop {
            let occupied = self
                .at_level(level)
                .flat_map(|s| s.vars.iter())
                .any(|v| wanted.contains(v.as_str()));
            if !occupied {
                return level;
            }
            level += 1;
        }
    }

    /// Union of the columns of the given spanners, in registry order.
    ///
    /// Fails on the first id that is not registered.
    pub fn vars_of<S: AsRef<str>>(&self, spanner_ids: &[S]) -> Result<Vec<String>> {
        let ids: Vec<&str> = spanner_ids.iter().map(|id| id.as_ref()).collect();
        if let Some(missing) = ids.iter().find(|id| self.get(id).is_none()) {
            return Err(BoxheadError::unknown_spanner(*missing));
        }
        let mut vars: Vec<String> = Vec::new();
        for spanner in &self.spanners {
            if !ids.contains(&spanner.spanner_id.as_str()) {
                continue;
            }
            for var in &spanner.vars {
                if !vars.contains(var) {
                    vars.push(var.clone());
                }
            }
        }
        Ok(vars)
    }

    /// True when no two spanners on one level share a column.
    pub fn levels_are_disjoint(&self) -> bool {
        self.levels().into_iter().all(|level| {
            let mut seen: HashSet<&str> = HashSet::new();
            self.at_level(level)
                .flat_map(|s| s.vars.iter())
                .all(|v| seen.insert(v.as_str()))
        })
    }
}

impl<'a> IntoIterator for &'a Spanners {
    type Item = &'a SpannerInfo;
    type IntoIter = std::slice::Iter<'a, SpannerInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.spanners.iter()
    }
}
