use crate::pagination::{self, ROWS_PER_PAGE};
use crate::selection::SelectionController;
use crate::view_model::{AppViewModel, ArtworkRowView};
use crate::{Artwork, Effect, PageData, RequestId};

/// Everything one grid view owns: the displayed page, the selection and the
/// bookkeeping needed to ignore stale fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Page the user asked for last. May differ from `displayed_page` while loading.
    page: u32,
    displayed_page: Option<u32>,
    rows: Vec<Artwork>,
    total_records: u64,
    selection: SelectionController,
    cursor: usize,
    popover_open: bool,
    last_request: RequestId,
    loading: bool,
    last_error: Option<String>,
    fetched_at: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: 1,
            displayed_page: None,
            rows: Vec::new(),
            total_records: 0,
            selection: SelectionController::new(),
            cursor: 0,
            popover_open: false,
            last_request: 0,
            loading: false,
            last_error: None,
            fetched_at: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn rows(&self) -> &[Artwork] {
        &self.rows
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.total_records, ROWS_PER_PAGE)
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn view(&self) -> AppViewModel {
        let selection = self.selection.selection();
        let rows: Vec<ArtworkRowView> = self
            .rows
            .iter()
            .map(|record| ArtworkRowView {
                selected: selection.contains(record.id),
                record: record.clone(),
            })
            .collect();
        let selected_off_page = selection
            .records()
            .filter(|kept| self.rows.iter().all(|row| row.id != kept.id))
            .count();

        AppViewModel {
            page: self.page,
            displayed_page: self.displayed_page,
            total_pages: self.total_pages(),
            total_records: self.total_records,
            rows_per_page: ROWS_PER_PAGE,
            window: self
                .displayed_page
                .and_then(|page| pagination::page_window(page, ROWS_PER_PAGE, self.rows.len())),
            cursor: self.cursor,
            selected_ids: selection.ids(),
            selected_off_page,
            rows,
            pending_count: self.selection.pending_count(),
            pending_input: self.selection.pending_input().to_string(),
            popover_open: self.popover_open,
            loading: self.loading,
            last_error: self.last_error.clone(),
            fetched_at: self.fetched_at.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionController {
        self.dirty = true;
        &mut self.selection
    }

    /// Record a new outstanding request for `page` and return the effect that performs it.
    pub(crate) fn issue_fetch(&mut self, page: u32) -> Effect {
        self.last_request += 1;
        self.page = page;
        self.loading = true;
        self.dirty = true;
        Effect::FetchPage {
            request_id: self.last_request,
            page,
        }
    }

    /// Only the most recently issued request may change what is displayed.
    pub(crate) fn is_current(&self, request_id: RequestId) -> bool {
        request_id == self.last_request
    }

    pub(crate) fn apply_loaded(&mut self, page: u32, data: PageData, fetched_at: Option<String>) {
        self.rows = data.records;
        self.total_records = data.total;
        self.page = page;
        self.displayed_page = Some(page);
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        self.loading = false;
        self.last_error = None;
        self.fetched_at = fetched_at;
        self.dirty = true;
    }

    /// Keep the previous rows and total; point the paginator back at them.
    pub(crate) fn apply_failed(&mut self, page: u32, message: &str) {
        if let Some(displayed) = self.displayed_page {
            self.page = displayed;
        }
        self.loading = false;
        self.last_error = Some(format!("page {page}: {message}"));
        self.dirty = true;
    }

    pub(crate) fn toggle_popover(&mut self) {
        self.popover_open = !self.popover_open;
        self.dirty = true;
    }

    /// Runs the bulk select against the rows on display and closes the popover.
    pub(crate) fn confirm_bulk_select(&mut self) {
        self.selection.confirm_bulk_select(&self.rows);
        self.popover_open = false;
        self.dirty = true;
    }

    pub(crate) fn toggle_page_selection(&mut self) {
        self.selection.toggle_page(&self.rows);
        self.dirty = true;
    }

    pub(crate) fn move_cursor(&mut self, down: bool) {
        let last = self.rows.len().saturating_sub(1);
        let next = if down {
            (self.cursor + 1).min(last)
        } else {
            self.cursor.saturating_sub(1)
        };
        if next != self.cursor {
            self.cursor = next;
            self.dirty = true;
        }
    }
}
