//! The catalog core: filtering, deterministic ordering and the incremental
//! pagination window over the in-memory programme dataset.
//!
//! [`Catalog`] owns the loaded records, the current [`FilterInput`] snapshot
//! and the derived view. Any dataset or filter change rebuilds the view in
//! full and resets the pagination window; nothing is patched incrementally.

mod filters;
pub mod normalize;
mod suggest;

pub use filters::{
    DurationBand, FilterInput, matches_duration, matches_paid, matches_query, matches_region,
};
pub use suggest::build_suggestions;

use crate::types::Program;

use self::normalize::normalize;

/// Number of additional results revealed by each "load more".
pub const PAGE_SIZE: usize = 4;

/// Stateful facade over the programme dataset.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<Program>,
    filter: FilterInput,
    /// Indices into `records`, filtered and sorted.
    view: Vec<usize>,
    visible_count: usize,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        let mut catalog = Self::default();
        catalog.rebuild_view();
        catalog
    }

    /// Replace the dataset and rebuild the view from scratch.
    pub fn set_dataset(&mut self, records: Vec<Program>) {
        self.records = records;
        self.rebuild_view();
    }

    /// Snapshot a new filter input and rebuild the view from scratch.
    pub fn set_filter(&mut self, filter: FilterInput) {
        self.filter = filter;
        self.rebuild_view();
    }

    pub fn filter(&self) -> &FilterInput {
        &self.filter
    }

    pub fn records(&self) -> &[Program] {
        &self.records
    }

    /// Reveal the next page. The count is clamped only at the slicing
    /// boundary, so repeated advances past the end are harmless.
    pub fn advance_page(&mut self) {
        self.visible_count += PAGE_SIZE;
    }

    /// Every record passing the current filter, in view order.
    pub fn view(&self) -> impl Iterator<Item = &Program> {
        self.view.iter().map(|&index| &self.records[index])
    }

    #[must_use]
    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// The currently revealed window of the view.
    pub fn visible(&self) -> impl Iterator<Item = &Program> {
        self.view
            .iter()
            .take(self.visible_count)
            .map(|&index| &self.records[index])
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// True when advancing further would reveal nothing new.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.visible_count >= self.view.len()
    }

    /// Unique normalized-deduplicated region labels across the dataset, in
    /// first-seen order. Drives the interactive region selector.
    #[must_use]
    pub fn region_labels(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let mut labels = Vec::new();
        for program in &self.records {
            for region in &program.region {
                let key = normalize(region);
                if !key.is_empty() && !seen.contains(&key) {
                    seen.push(key);
                    labels.push(region.clone());
                }
            }
        }
        labels
    }

    fn rebuild_view(&mut self) {
        let mut view: Vec<usize> = (0..self.records.len())
            .filter(|&index| self.filter.matches(&self.records[index]))
            .collect();
        view.sort_unstable_by(|&a, &b| {
            let (a, b) = (&self.records[a], &self.records[b]);
            normalize(a.company_text())
                .cmp(&normalize(b.company_text()))
                .then_with(|| normalize(a.title_text()).cmp(&normalize(b.title_text())))
        });
        self.view = view;
        self.visible_count = PAGE_SIZE;
    }
}
