//! Project activity page state.
//!
//! Pages are appended as the user asks for more; changing the category
//! filter starts over from the first page.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use wire::{ActivityOptions, Analysis, Paging, ProjectActivityResponse};

/// Analyses requested per page.
pub const PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityState {
    pub analyses: Vec<Analysis>,
    pub paging: Option<Paging>,
    pub category: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ActivityState {
    /// Options for the next page under the current filter.
    #[must_use]
    pub fn next_page(&self) -> ActivityOptions {
        let page_index = self.paging.map_or(1, |p| p.page_index + 1);
        ActivityOptions { category: self.category.clone(), page_index: Some(page_index), page_size: Some(PAGE_SIZE) }
    }

    /// Whether the server reported more analyses than are loaded.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.paging.is_some_and(|p| (self.analyses.len() as u64) < p.total)
    }

    /// Switch the category filter and drop everything loaded so far.
    pub fn set_category(&mut self, category: Option<String>) {
        *self = Self { category: category.filter(|c| !c.is_empty()), ..Self::default() };
    }

    /// Mark a request as in flight.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a page fetched with `requested`.
    ///
    /// Responses for a filter that is no longer selected are ignored. Page 1
    /// replaces the list, later pages are appended.
    pub fn apply(&mut self, requested: &ActivityOptions, response: ProjectActivityResponse) {
        if requested.category != self.category {
            log::debug!("dropping activity page for stale filter {:?}", requested.category);
            return;
        }
        if response.paging.page_index <= 1 {
            self.analyses = response.analyses;
        } else {
            self.analyses.extend(response.analyses);
        }
        self.paging = Some(response.paging);
        self.loading = false;
    }

    /// Record a failed fetch for `requested`.
    pub fn fail(&mut self, requested: &ActivityOptions, message: String) {
        if requested.category != self.category {
            return;
        }
        self.loading = false;
        self.error = Some(message);
    }
}
