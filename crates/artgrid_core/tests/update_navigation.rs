use std::sync::Once;

use artgrid_core::{update, AppState, Artwork, Effect, FetchId, Msg, Page};

const PAGE_SIZE: u32 = 12;
const TOTAL: u64 = 60;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(grid_logging::initialize_for_tests);
}

fn catalog_page(number: u32) -> Page {
    let first = u64::from(number - 1) * u64::from(PAGE_SIZE) + 1;
    Page {
        number,
        page_size: PAGE_SIZE,
        total: TOTAL,
        total_pages: 5,
        records: (first..first + u64::from(PAGE_SIZE))
            .map(|id| Artwork::new(id, format!("Artwork {id}")))
            .collect(),
    }
}

fn fetch_of(effects: &[Effect]) -> (FetchId, u32) {
    match effects {
        [Effect::FetchPage { fetch_id, page }] => (*fetch_id, *page),
        other => panic!("expected a single FetchPage effect, got {other:?}"),
    }
}

fn deliver(state: AppState, effects: &[Effect]) -> AppState {
    let (fetch_id, page) = fetch_of(effects);
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            fetch_id,
            page: catalog_page(page),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn startup_fetches_first_page_and_sets_loading() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Started);

    assert_eq!(effects, vec![Effect::FetchPage { fetch_id: 1, page: 1 }]);
    let view = state.view();
    assert!(view.loading);
    assert_eq!(view.requested_page, 1);
    assert_eq!(view.page_number, 0);
    assert!(state.consume_dirty());

    let state = deliver(state, &effects);
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.page_number, 1);
    assert_eq!(view.records.len(), 12);
    assert_eq!(view.total_records, TOTAL);
    assert_eq!(view.showing, Some((1, 12)));
}

#[test]
fn stale_response_is_ignored() {
    init_logging();
    let (state, first) = update(AppState::new(), Msg::Started);
    let state = deliver(state, &first);

    let (state, to_two) = update(state, Msg::PageRequested(2));
    let (mut state, to_three) = update(state, Msg::PageRequested(3));
    assert!(state.consume_dirty());

    let (stale_id, stale_page) = fetch_of(&to_two);
    let (mut state, _) = update(
        state,
        Msg::PageLoaded {
            fetch_id: stale_id,
            page: catalog_page(stale_page),
        },
    );
    assert!(!state.consume_dirty());
    assert_eq!(state.view().page_number, 1);
    assert!(state.view().loading);

    let state = deliver(state, &to_three);
    assert_eq!(state.view().page_number, 3);
    assert_eq!(state.view().showing, Some((25, 36)));
    assert!(!state.view().loading);
}

#[test]
fn failed_fetch_keeps_page_and_selection() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let state = deliver(state, &effects);
    let (state, _) = update(state, Msg::SelectAllClicked);
    let before = state.view();

    let (state, effects) = update(state, Msg::PageRequested(2));
    let (fetch_id, _) = fetch_of(&effects);
    let (state, effects) = update(
        state,
        Msg::PageFailed {
            fetch_id,
            reason: "http status 500".to_string(),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.page_number, 1);
    assert_eq!(view.records, before.records);
    assert_eq!(view.selected_records, before.selected_records);
    assert_eq!(view.total_selected, 12);
    assert_eq!(view.last_error.as_deref(), Some("http status 500"));

    // Retrying the same navigation issues a fresh fetch.
    let (_state, effects) = update(state, Msg::PageRequested(2));
    assert_eq!(fetch_of(&effects).1, 2);
}

#[test]
fn stale_failure_does_not_clear_loading() {
    init_logging();
    let (state, first) = update(AppState::new(), Msg::Started);
    let (state, second) = update(state, Msg::PageRequested(2));

    let (state, _) = update(
        state,
        Msg::PageFailed {
            fetch_id: fetch_of(&first).0,
            reason: "timeout".to_string(),
        },
    );
    assert!(state.view().loading);
    assert_eq!(state.view().last_error, None);

    let state = deliver(state, &second);
    assert_eq!(state.view().page_number, 2);
}

#[test]
fn out_of_range_and_current_pages_are_ignored() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let mut state = deliver(state, &effects);
    assert!(state.consume_dirty());

    for page in [0, 1, 6] {
        let (next, effects) = update(state, Msg::PageRequested(page));
        assert!(effects.is_empty(), "page {page}");
        state = next;
    }
    assert!(!state.consume_dirty());
    assert_eq!(state.view().page_number, 1);
}

#[test]
fn selection_persists_across_navigation() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let state = deliver(state, &effects);

    let (state, _) = update(state, Msg::SelectionChanged([3, 5].into_iter().collect()));

    let (state, effects) = update(state, Msg::PageRequested(2));
    let state = deliver(state, &effects);
    let view = state.view();
    assert!(view.selected_records.is_empty());
    assert_eq!(view.total_selected, 2);
    assert!(!view.all_selected && !view.some_selected);

    let (state, effects) = update(state, Msg::PageRequested(1));
    let state = deliver(state, &effects);
    let ids: Vec<_> = state.view().selected_records.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 5]);
    assert!(state.view().some_selected);
}
