use grid_logging::grid_debug;

use crate::presenter;
use crate::view_model::GridViewModel;
use crate::{FetchId, Page, ProgressiveSelection, SelectionStore};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    page: Page,
    requested_page: u32,
    latest_fetch: Option<FetchId>,
    next_fetch_id: FetchId,
    loading: bool,
    selection: SelectionStore,
    progressive: ProgressiveSelection,
    count_input: String,
    last_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> GridViewModel {
        let records = &self.page.records;
        GridViewModel {
            page_number: self.page.number,
            requested_page: self.requested_page,
            total_pages: self.page.total_pages,
            total_records: self.page.total,
            showing: showing_range(&self.page),
            records: records.clone(),
            selected_records: presenter::selected_items_on_page(&self.selection, records),
            all_selected: presenter::all_selected(&self.selection, records),
            some_selected: presenter::some_selected(&self.selection, records),
            header: presenter::header_state(&self.selection, records),
            loading: self.loading,
            total_selected: self.selection.len(),
            progressive: self.progressive.progress(),
            count_input: self.count_input.clone(),
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn progressive(&self) -> ProgressiveSelection {
        self.progressive
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Records a new fetch as the only one whose response will be applied.
    pub(crate) fn begin_fetch(&mut self, page: u32) -> FetchId {
        self.next_fetch_id += 1;
        let fetch_id = self.next_fetch_id;
        self.latest_fetch = Some(fetch_id);
        self.requested_page = page;
        self.loading = true;
        self.mark_dirty();
        fetch_id
    }

    /// Installs a loaded page. Returns `false` for stale or repeated responses.
    pub(crate) fn accept_page(&mut self, fetch_id: FetchId, page: Page) -> bool {
        if !self.settle_fetch(fetch_id) {
            grid_debug!(
                "Dropping stale page {} (fetch {}, pending {:?})",
                page.number,
                fetch_id,
                self.latest_fetch
            );
            return false;
        }
        self.page = page;
        self.loading = false;
        self.last_error = None;
        self.mark_dirty();
        true
    }

    /// Ends the latest fetch without touching page data or selection.
    pub(crate) fn fail_fetch(&mut self, fetch_id: FetchId, reason: String) -> bool {
        if !self.settle_fetch(fetch_id) {
            grid_debug!("Dropping stale failure for fetch {}: {}", fetch_id, reason);
            return false;
        }
        self.loading = false;
        self.last_error = Some(reason);
        self.mark_dirty();
        true
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionStore {
        &mut self.selection
    }

    /// Split borrow for the controller, which writes into the store.
    pub(crate) fn progressive_and_selection_mut(
        &mut self,
    ) -> (&mut ProgressiveSelection, &mut SelectionStore) {
        (&mut self.progressive, &mut self.selection)
    }

    pub(crate) fn set_count_input(&mut self, text: String) {
        self.count_input = text;
    }

    pub(crate) fn count_input(&self) -> &str {
        &self.count_input
    }

    /// Clears the pending fetch if `fetch_id` is it. Only the first response
    /// for the latest fetch is applied.
    fn settle_fetch(&mut self, fetch_id: FetchId) -> bool {
        if self.latest_fetch != Some(fetch_id) {
            return false;
        }
        self.latest_fetch = None;
        true
    }
}

/// 1-based `(first, last)` row numbers of the displayed page within the collection.
fn showing_range(page: &Page) -> Option<(u64, u64)> {
    if page.records.is_empty() || page.number == 0 {
        return None;
    }
    let page_size = u64::from(page.page_size.max(1));
    let first = u64::from(page.number - 1) * page_size + 1;
    let last = (first + page.records.len() as u64 - 1).min(page.total.max(first));
    Some((first, last))
}
