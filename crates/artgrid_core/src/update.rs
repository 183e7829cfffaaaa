use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started | Msg::Refresh => {
            let page = state.page();
            vec![state.issue_fetch(page)]
        }
        Msg::PageChanged { page } => {
            if page < 1 {
                return (state, Vec::new());
            }
            vec![state.issue_fetch(page)]
        }
        Msg::NextPage => {
            // Paging forward needs a known total; before the first load there is nothing to bound it.
            let page = state.page();
            if page >= state.total_pages() {
                return (state, Vec::new());
            }
            vec![state.issue_fetch(page + 1)]
        }
        Msg::PrevPage => {
            let page = state.page();
            if page <= 1 {
                return (state, Vec::new());
            }
            vec![state.issue_fetch(page - 1)]
        }
        Msg::PageLoaded {
            request_id,
            page,
            data,
            fetched_at,
        } => {
            if state.is_current(request_id) {
                state.apply_loaded(page, data, fetched_at);
            }
            Vec::new()
        }
        Msg::PageFailed {
            request_id,
            page,
            message,
        } => {
            if state.is_current(request_id) {
                state.apply_failed(page, &message);
            }
            Vec::new()
        }
        Msg::PendingCountChanged(raw) => {
            state.selection_mut().set_pending_count_input(&raw);
            Vec::new()
        }
        Msg::BulkSelectToggled => {
            state.toggle_popover();
            Vec::new()
        }
        Msg::BulkSelectConfirmed => {
            state.confirm_bulk_select();
            Vec::new()
        }
        Msg::RowToggled(record) => {
            state.selection_mut().toggle_row(&record);
            Vec::new()
        }
        Msg::SelectionChanged(records) => {
            state.selection_mut().set_selection(records);
            Vec::new()
        }
        Msg::PageSelectionToggled => {
            state.toggle_page_selection();
            Vec::new()
        }
        Msg::SelectionCleared => {
            state.selection_mut().clear();
            Vec::new()
        }
        Msg::CursorUp => {
            state.move_cursor(false);
            Vec::new()
        }
        Msg::CursorDown => {
            state.move_cursor(true);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
