//! View-scoped filter state.

use crate::domain::types::PageNumber;
use crate::filters::FilterSet;

/// Holds the working filter record of one list view.
///
/// Updates are synchronous; propagating them to the server is the job of the
/// owning view. Every local edit bumps [`FilterStore::revision`].
#[derive(Debug, Clone)]
pub struct FilterStore<F: FilterSet> {
    defaults: F,
    current: F,
    revision: u64,
}

impl<F: FilterSet> FilterStore<F> {
    pub fn new(defaults: F) -> Self {
        Self {
            current: defaults.clone(),
            defaults,
            revision: 0,
        }
    }

    /// Replaces the defaults and merges the server filters over them.
    pub fn initialize(&mut self, defaults: F, server_filters: &F) {
        self.defaults = defaults;
        self.rehydrate(server_filters);
    }

    /// Re-applies a canonical server echo over the current defaults.
    ///
    /// Not counted as a local edit.
    pub fn rehydrate(&mut self, server_filters: &F) {
        let mut merged = self.defaults.clone();
        merged.overlay(server_filters);
        self.current = merged;
    }

    pub fn current(&self) -> &F {
        &self.current
    }

    pub fn defaults(&self) -> &F {
        &self.defaults
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set(&mut self, field: F::Field) {
        self.current.apply(field);
        self.touch();
    }

    pub fn set_page(&mut self, page: PageNumber) {
        self.current.set_page(page);
        self.touch();
    }

    /// Back to defaults, keeping the page size and returning to the first page.
    pub fn clear(&mut self) {
        let per_page = self.current.per_page();
        let mut cleared = self.defaults.clone();
        cleared.set_per_page(per_page);
        cleared.set_page(PageNumber::FIRST);
        self.current = cleared;
        self.touch();
    }

    /// Swaps in a whole record, e.g. one restored from history.
    pub fn replace(&mut self, filters: F) {
        self.current = filters;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
