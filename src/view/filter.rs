// src/view/filter.rs
//
// Filter selections and the per-record predicate. A record is visible when
// it passes all five checks: search, nation, project, IIIF, free license.

use std::fmt;

use crate::config::consts::ALL_LABEL;
use crate::record::{AffiliationRule, Record};

/// Dropdown selection: the "All" sentinel or one concrete value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// `"All"` maps to the sentinel; anything else is a concrete value.
    pub fn parse(value: &str) -> Self {
        if value == ALL_LABEL { Choice::All } else { Choice::Only(value.to_string()) }
    }

    pub fn is_all(&self) -> bool { matches!(self, Choice::All) }

    pub fn label(&self) -> &str {
        match self {
            Choice::All => ALL_LABEL,
            Choice::Only(v) => v,
        }
    }

    /// `All` accepts everything; `Only` needs an exact match on a present value.
    pub fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(want) => value == Some(want.as_str()),
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self { Choice::parse(value) }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub nation: Choice,
    pub project: Choice,
    pub require_iiif: bool,
    pub require_free: bool,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// Shallow merge: only fields set in `patch` change.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(v) = patch.search_term { self.search_term = v; }
        if let Some(v) = patch.nation { self.nation = v; }
        if let Some(v) = patch.project { self.project = v; }
        if let Some(v) = patch.require_iiif { self.require_iiif = v; }
        if let Some(v) = patch.require_free { self.require_free = v; }
    }

    /// Compile into a predicate; the search term is normalized once.
    pub fn matcher(&self, rule: AffiliationRule) -> Matcher<'_> {
        let term = self.search_term.trim().to_lowercase();
        Matcher { filters: self, term, rule }
    }
}

/// Partial update for [`FilterState`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search_term: Option<String>,
    pub nation: Option<Choice>,
    pub project: Option<Choice>,
    pub require_iiif: Option<bool>,
    pub require_free: Option<bool>,
}

impl FilterPatch {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn nation(mut self, choice: impl Into<Choice>) -> Self {
        self.nation = Some(choice.into());
        self
    }

    pub fn project(mut self, choice: impl Into<Choice>) -> Self {
        self.project = Some(choice.into());
        self
    }

    pub fn iiif(mut self, on: bool) -> Self {
        self.require_iiif = Some(on);
        self
    }

    pub fn free(mut self, on: bool) -> Self {
        self.require_free = Some(on);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterPatch::default()
    }
}

/// A [`FilterState`] ready to test records.
pub struct Matcher<'a> {
    filters: &'a FilterState,
    term: String,
    rule: AffiliationRule,
}

impl Matcher<'_> {
    pub fn matches(&self, r: &Record) -> bool {
        self.matches_search(r)
            && self.matches_nation(r)
            && self.matches_project(r)
            && self.matches_iiif(r)
            && self.matches_free(r)
    }

    /// Blank term passes. Otherwise any of library, city, nation or the raw
    /// project name must contain it; a missing field only fails itself.
    pub fn matches_search(&self, r: &Record) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let hit = |field: Option<&str>| {
            field.is_some_and(|v| v.to_lowercase().contains(&self.term))
        };
        hit(Some(r.library.as_str()))
            || hit(r.city.as_deref())
            || hit(Some(r.nation.as_str()))
            || hit(r.is_part_of_project_name.as_deref())
    }

    pub fn matches_nation(&self, r: &Record) -> bool {
        self.filters.nation.accepts(Some(r.nation.as_str()))
    }

    pub fn matches_project(&self, r: &Record) -> bool {
        self.filters.project.accepts(r.project(self.rule))
    }

    pub fn matches_iiif(&self, r: &Record) -> bool {
        !self.filters.require_iiif || r.iiif.is_true()
    }

    pub fn matches_free(&self, r: &Record) -> bool {
        !self.filters.require_free || r.free_license.is_true()
    }
}
