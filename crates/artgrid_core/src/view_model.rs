use crate::{Artwork, ArtworkId};

/// Everything the grid widget needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// 1-based page index shown by the paginator.
    pub page: u32,
    /// Page the rows below belong to; `None` until the first successful load.
    pub displayed_page: Option<u32>,
    pub total_pages: u32,
    pub total_records: u64,
    pub rows_per_page: usize,
    /// First and last record number on display, 1-based.
    pub window: Option<(u64, u64)>,
    pub rows: Vec<ArtworkRowView>,
    pub cursor: usize,
    pub selected_ids: Vec<ArtworkId>,
    /// Selected records that live on other pages.
    pub selected_off_page: usize,
    pub pending_count: i64,
    pub pending_input: String,
    pub popover_open: bool,
    pub loading: bool,
    pub last_error: Option<String>,
    pub fetched_at: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRowView {
    pub record: Artwork,
    pub selected: bool,
}
