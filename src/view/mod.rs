// src/view/mod.rs
//
// The dashboard's single source of truth.
//
// - ViewModel: owns the loaded records plus the current sort and filter
//              selections. Records are only ever reordered, never edited.
// - DerivedView: what a presenter draws after each operation. Holds row
//                indexes into the view model's records (no row copies),
//                the stats of the visible rows, and the sort indicator.
//
// Every operation recomputes the whole view. There is no incremental state
// to keep in sync, and datasets are a few hundred rows.

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::{Choice, FilterPatch, FilterState};
pub use sort::{SortDirection, SortKey, SortState};
pub use stats::{FilterOptions, Stats};

use crate::record::{AffiliationRule, Record};

#[derive(Clone, Debug, Default)]
pub struct ViewModel {
    records: Vec<Record>,
    sort: SortState,
    filters: FilterState,
    options: FilterOptions,
    rule: AffiliationRule,
}

impl ViewModel {
    pub fn new() -> Self { Self::default() }

    pub fn with_rule(rule: AffiliationRule) -> Self {
        Self { rule, ..Self::default() }
    }

    /// Replace the dataset. Records are ordered by display name, filters and
    /// sort are reset, and dropdown options are derived from the full set.
    pub fn initialize(&mut self, mut records: Vec<Record>) -> DerivedView<'_> {
        records.sort_by(|a, b| sort::locale_cmp(&a.library, &b.library));
        self.options = FilterOptions::from_records(&records, self.rule);
        self.records = records;
        self.filters = FilterState::default();
        self.sort = SortState::default();

        logd!(
            "View: initialized rows={} nations={} projects={}",
            self.records.len(),
            self.options.nations.len(),
            self.options.projects.len()
        );

        let mut view = self.derive();
        view.options = Some(&self.options);
        view
    }

    /// Activate `key` (or flip its direction) and reorder the records.
    /// Current filters stay in force.
    pub fn set_sort(&mut self, key: SortKey) -> DerivedView<'_> {
        self.sort.toggle(key);
        sort::sort_records(&mut self.records, self.sort);
        logd!("View: sort {} {}", key, self.sort.direction.short());
        self.derive()
    }

    /// Merge `patch` into the filters.
    pub fn set_filter(&mut self, patch: FilterPatch) -> DerivedView<'_> {
        self.filters.apply(patch);
        logd!("View: filters {:?}", self.filters);
        self.derive()
    }

    /// Back to default filters; sort is kept.
    pub fn clear_filters(&mut self) -> DerivedView<'_> {
        self.filters = FilterState::default();
        logd!("View: filters cleared");
        self.derive()
    }

    /// The current view, without changing any state.
    pub fn view(&self) -> DerivedView<'_> {
        self.derive()
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn filters(&self) -> &FilterState { &self.filters }
    pub fn sort(&self) -> SortState { self.sort }
    pub fn options(&self) -> &FilterOptions { &self.options }
    pub fn rule(&self) -> AffiliationRule { self.rule }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    fn derive(&self) -> DerivedView<'_> {
        let matcher = self.filters.matcher(self.rule);
        let row_ix: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| matcher.matches(r))
            .map(|(i, _)| i)
            .collect();

        let stats = Stats::from_records(row_ix.iter().map(|&i| &self.records[i]), self.rule);

        DerivedView {
            row_ix,
            records: &self.records,
            stats,
            sort: self.sort,
            rule: self.rule,
            options: None,
        }
    }
}

/// Visible rows for one state of the view model.
#[derive(Clone, Debug)]
pub struct DerivedView<'a> {
    /// Positions of visible rows in the view model's records, in display order
    pub row_ix: Vec<usize>,
    records: &'a [Record],
    pub stats: Stats,
    pub sort: SortState,
    pub rule: AffiliationRule,
    /// Dropdown values; only set by `initialize`
    pub options: Option<&'a FilterOptions>,
}

impl<'a> DerivedView<'a> {
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a visible row by display position.
    pub fn row(&self, i: usize) -> Option<&'a Record> {
        let records = self.records;
        self.row_ix.get(i).and_then(|&ix| records.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = self.records;
        self.row_ix.iter().map(move |&ix| &records[ix])
    }

    /// Display names in order; handy for logs and assertions.
    pub fn libraries(&self) -> Vec<&'a str> {
        self.iter().map(|r| r.library.as_str()).collect()
    }

    /// Materialize owned rows (for export boundaries).
    pub fn to_owned_rows(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }

    /// Drop the borrow so the result can live in long-lived UI state.
    pub fn detach(&self) -> ViewSnapshot {
        ViewSnapshot { row_ix: self.row_ix.clone(), stats: self.stats, sort: self.sort }
    }
}

/// Owned counterpart of [`DerivedView`]. Only valid until the next
/// view model operation, which may reorder records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub row_ix: Vec<usize>,
    pub stats: Stats,
    pub sort: SortState,
}

impl ViewSnapshot {
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
}
