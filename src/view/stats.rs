// src/view/stats.rs
//
// Summary numbers over any record collection, plus the dropdown option
// lists. Both are recomputed from scratch; collections are small.

use std::collections::{BTreeSet, HashSet};

use crate::record::{AffiliationRule, Record};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub nation_count: usize,
    pub iiif_count: usize,
    pub project_count: usize,
}

impl Stats {
    pub fn from_records<'a, I>(records: I, rule: AffiliationRule) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut total = 0;
        let mut iiif_count = 0;
        let mut nations: HashSet<&str> = HashSet::new();
        let mut projects: HashSet<&str> = HashSet::new();

        for r in records {
            total += 1;
            nations.insert(&r.nation);
            if r.iiif.is_true() {
                iiif_count += 1;
            }
            if let Some(p) = r.project(rule) {
                projects.insert(p);
            }
        }

        Self {
            total,
            nation_count: nations.len(),
            iiif_count,
            project_count: projects.len(),
        }
    }

    /// The "Showing N" count.
    #[inline]
    pub fn showing(&self) -> usize { self.total }
}

/// Values offered by the nation and project dropdowns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub nations: Vec<String>,
    pub projects: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[Record], rule: AffiliationRule) -> Self {
        Self {
            nations: distinct_nations(records),
            projects: distinct_projects(records, rule),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nations.is_empty() && self.projects.is_empty()
    }
}

/// Distinct nations, ascending.
pub fn distinct_nations(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.nation.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Distinct project names of affiliated records, ascending.
pub fn distinct_projects(records: &[Record], rule: AffiliationRule) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.project(rule))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
