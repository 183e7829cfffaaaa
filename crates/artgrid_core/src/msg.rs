use crate::{Artwork, PageData, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// View mounted; load the initial page.
    Started,
    /// Paginator jumped to a 1-based page.
    PageChanged { page: u32 },
    NextPage,
    PrevPage,
    /// Re-fetch the current page.
    Refresh,
    /// Engine delivered a page.
    PageLoaded {
        request_id: RequestId,
        page: u32,
        data: PageData,
        fetched_at: Option<String>,
    },
    /// Engine reported a failed (or cancelled) fetch.
    PageFailed {
        request_id: RequestId,
        page: u32,
        message: String,
    },
    /// User edited the bulk-select count input.
    PendingCountChanged(String),
    /// Open or close the bulk-select popover.
    BulkSelectToggled,
    /// User pressed "Select" in the popover.
    BulkSelectConfirmed,
    /// Row checkbox clicked.
    RowToggled(Artwork),
    /// Grid replaced the selection wholesale.
    SelectionChanged(Vec<Artwork>),
    /// Header checkbox clicked.
    PageSelectionToggled,
    SelectionCleared,
    CursorUp,
    CursorDown,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
