use artgrid_core::{update, AppState, Artwork, Effect, Msg, PageData};

fn init_logging() {
    artgrid_logging::initialize_for_tests();
}

fn artwork(id: u64) -> Artwork {
    Artwork {
        id,
        title: format!("Artwork {id}"),
        artist_display: "Unknown".to_string(),
        ..Artwork::default()
    }
}

/// Navigates to `page` and completes the load with `ids`.
fn show_page(state: AppState, page: u32, ids: std::ops::RangeInclusive<u64>) -> AppState {
    let (state, effects) = update(state, Msg::PageChanged { page });
    let request_id = match effects.as_slice() {
        [Effect::FetchPage { request_id, .. }] => *request_id,
        other => panic!("expected a single fetch, got {other:?}"),
    };
    update(
        state,
        Msg::PageLoaded {
            request_id,
            page,
            data: PageData {
                records: ids.map(artwork).collect(),
                total: 5000,
            },
            fetched_at: Some("12:00:00".to_string()),
        },
    )
    .0
}

fn bulk_select(state: AppState, count: &str) -> AppState {
    let (state, _) = update(state, Msg::BulkSelectToggled);
    let (state, _) = update(state, Msg::PendingCountChanged(count.to_string()));
    update(state, Msg::BulkSelectConfirmed).0
}

#[test]
fn bulk_select_first_three_of_page_one() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let state = bulk_select(state, "3");

    let view = state.view();
    assert_eq!(view.selected_ids, vec![1, 2, 3]);
    assert!(!view.popover_open);
    let flags: Vec<bool> = view.rows.iter().map(|row| row.selected).collect();
    assert_eq!(flags[..4], [true, true, true, false]);
}

#[test]
fn bulk_select_on_page_two_clamps_and_replaces() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let state = bulk_select(state, "3");
    let state = show_page(state, 2, 11..=20);

    // Page 1 picks survive navigation until the next bulk select.
    let view = state.view();
    assert_eq!(view.selected_ids, vec![1, 2, 3]);
    assert_eq!(view.selected_off_page, 3);

    let state = bulk_select(state, "15");
    let view = state.view();
    assert_eq!(view.selected_ids, (11..=20).collect::<Vec<_>>());
    assert_eq!(view.selected_off_page, 0);
}

#[test]
fn confirm_twice_yields_identical_selection() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let state = bulk_select(state, "5");
    let first = state.selection().selection().clone();

    let (state, _) = update(state, Msg::BulkSelectConfirmed);
    assert_eq!(state.selection().selection(), &first);
}

#[test]
fn zero_count_clears_everything() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let state = bulk_select(state, "7");
    let state = show_page(state, 2, 11..=20);
    let (state, _) = update(state, Msg::RowToggled(artwork(15)));
    assert_eq!(state.view().selected_ids.len(), 8);

    let state = bulk_select(state, "0");
    assert!(state.view().selected_ids.is_empty());
}

#[test]
fn non_numeric_count_is_treated_as_zero() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let state = bulk_select(state, "4");
    let state = bulk_select(state, "four");

    let view = state.view();
    assert_eq!(view.pending_count, 0);
    assert_eq!(view.pending_input, "four");
    assert!(view.selected_ids.is_empty());
}

#[test]
fn negative_count_selects_nothing() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let state = bulk_select(state, "-5");
    assert!(state.view().selected_ids.is_empty());
}

#[test]
fn row_toggle_is_its_own_inverse() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let state = bulk_select(state, "2");
    let before = state.selection().selection().clone();

    let (state, _) = update(state, Msg::RowToggled(artwork(7)));
    assert_eq!(state.view().selected_ids, vec![1, 2, 7]);
    let (state, _) = update(state, Msg::RowToggled(artwork(7)));
    assert_eq!(state.selection().selection(), &before);
}

#[test]
fn manual_edits_are_discarded_by_bulk_select() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let (state, _) = update(state, Msg::RowToggled(artwork(9)));
    let (state, _) = update(state, Msg::RowToggled(artwork(10)));
    let state = bulk_select(state, "1");
    assert_eq!(state.view().selected_ids, vec![1]);
}

#[test]
fn selection_changed_replaces_wholesale() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let state = bulk_select(state, "3");
    let (state, _) = update(
        state,
        Msg::SelectionChanged(vec![artwork(5), artwork(42)]),
    );
    let view = state.view();
    assert_eq!(view.selected_ids, vec![5, 42]);
    assert_eq!(view.selected_off_page, 1);
}

#[test]
fn header_checkbox_toggles_current_page() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let (state, _) = update(state, Msg::RowToggled(artwork(3)));
    let state = show_page(state, 2, 11..=20);

    let (state, _) = update(state, Msg::PageSelectionToggled);
    let view = state.view();
    assert_eq!(view.selected_ids.len(), 11);
    assert!(view.rows.iter().all(|row| row.selected));

    let (state, _) = update(state, Msg::PageSelectionToggled);
    assert_eq!(state.view().selected_ids, vec![3]);

    let (state, _) = update(state, Msg::SelectionCleared);
    assert!(state.view().selected_ids.is_empty());
}

#[test]
fn failed_fetch_does_not_touch_selection() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let state = bulk_select(state, "4");
    let (state, effects) = update(state, Msg::PageChanged { page: 3 });
    let request_id = match effects.as_slice() {
        [Effect::FetchPage { request_id, .. }] => *request_id,
        other => panic!("expected a single fetch, got {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::PageFailed {
            request_id,
            page: 3,
            message: "timeout".to_string(),
        },
    );
    assert_eq!(state.view().selected_ids, vec![1, 2, 3, 4]);
}

#[test]
fn popover_toggle_and_bulk_select_before_any_load() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::BulkSelectToggled);
    assert!(state.view().popover_open);
    let (state, _) = update(state, Msg::BulkSelectToggled);
    assert!(!state.view().popover_open);

    let state = bulk_select(state, "5");
    assert!(state.view().selected_ids.is_empty());
}

#[test]
fn page_with_repeated_id_counts_selection_once() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let request_id = match effects.as_slice() {
        [Effect::FetchPage { request_id, .. }] => *request_id,
        other => panic!("expected a single fetch, got {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request_id,
            page: 1,
            data: PageData {
                records: vec![artwork(1), artwork(1)],
                total: 2,
            },
            fetched_at: None,
        },
    );
    let (state, _) = update(state, Msg::RowToggled(artwork(1)));

    let view = state.view();
    assert_eq!(view.selected_ids, vec![1]);
    assert_eq!(view.selected_off_page, 0);
    assert!(view.rows.iter().all(|row| row.selected));
}

#[test]
fn off_page_count_tracks_other_pages() {
    init_logging();
    let state = show_page(AppState::new(), 1, 1..=10);
    let state = bulk_select(state, "3");
    let state = show_page(state, 2, 11..=20);
    let (state, _) = update(state, Msg::RowToggled(artwork(15)));

    let view = state.view();
    assert_eq!(view.selected_ids, vec![1, 2, 3, 15]);
    assert_eq!(view.selected_off_page, 3);
}
