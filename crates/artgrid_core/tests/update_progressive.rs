use std::sync::Once;

use artgrid_core::{update, AppState, Artwork, Effect, FetchId, Msg, Page, ProgressiveSelection};

const PAGE_SIZE: u64 = 12;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(grid_logging::initialize_for_tests);
}

fn catalog_page(number: u32) -> Page {
    let first = u64::from(number - 1) * PAGE_SIZE + 1;
    Page {
        number,
        page_size: PAGE_SIZE as u32,
        total: 120,
        total_pages: 10,
        records: (first..first + PAGE_SIZE)
            .map(|id| Artwork::new(id, format!("Artwork {id}")))
            .collect(),
    }
}

fn single_fetch(effects: &[Effect]) -> (FetchId, u32) {
    match effects {
        [Effect::FetchPage { fetch_id, page }] => (*fetch_id, *page),
        other => panic!("expected a single FetchPage effect, got {other:?}"),
    }
}

fn deliver(state: AppState, effects: &[Effect]) -> AppState {
    let (fetch_id, page) = single_fetch(effects);
    update(
        state,
        Msg::PageLoaded {
            fetch_id,
            page: catalog_page(page),
        },
    )
    .0
}

fn submit_count(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::CountInputChanged(input.to_string()));
    update(state, Msg::CountSubmitted)
}

fn started() -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    deliver(state, &effects)
}

#[test]
fn target_25_spans_three_pages_of_12() {
    init_logging();
    let (state, effects) = submit_count(started(), "25");
    assert_eq!(single_fetch(&effects).1, 1);
    assert_eq!(state.view().count_input, "");

    let state = deliver(state, &effects);
    assert_eq!(state.view().total_selected, 12);
    assert_eq!(state.view().progressive, Some((12, 25)));
    assert!(state.view().all_selected);

    let (state, effects) = update(state, Msg::PageRequested(2));
    let state = deliver(state, &effects);
    assert_eq!(state.view().total_selected, 24);
    assert_eq!(state.view().progressive, Some((24, 25)));

    let (state, effects) = update(state, Msg::PageRequested(3));
    let state = deliver(state, &effects);
    let view = state.view();
    assert_eq!(view.total_selected, 25);
    assert_eq!(view.progressive, None);
    assert_eq!(state.progressive(), ProgressiveSelection::Inactive);
    let ids: Vec<_> = view.selected_records.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![25]);
    assert!(view.some_selected);

    // A further page load adds nothing.
    let (state, effects) = update(state, Msg::PageRequested(4));
    let state = deliver(state, &effects);
    assert_eq!(state.view().total_selected, 25);
}

#[test]
fn target_5_takes_prefix_of_first_page() {
    init_logging();
    let (state, effects) = submit_count(started(), "5");
    let state = deliver(state, &effects);

    let view = state.view();
    let ids: Vec<_> = view.selected_records.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(view.progressive, None);
    assert!(view.some_selected);
}

#[test]
fn new_request_clears_prior_selection() {
    init_logging();
    let state = started();
    let (state, effects) = update(state, Msg::PageRequested(2));
    let state = deliver(state, &effects);
    let (state, _) = update(state, Msg::SelectAllClicked);

    let (state, effects) = submit_count(state, "30");
    let state = deliver(state, &effects);
    assert_eq!(state.view().progressive, Some((12, 30)));

    let (state, effects) = submit_count(state, "3");
    assert!(state.view().loading);
    assert_eq!(state.view().total_selected, 0);

    let state = deliver(state, &effects);
    assert_eq!(state.view().total_selected, 3);
    assert!(!state.selection().is_selected(13));
    assert_eq!(state.view().progressive, None);
}

#[test]
fn invalid_counts_leave_state_untouched() {
    init_logging();
    let (state, _) = update(started(), Msg::SelectionChanged([2, 4].into_iter().collect()));

    for input in ["0", "-3", "", "abc"] {
        let (state, _) = update(state.clone(), Msg::CountInputChanged(input.to_string()));
        let before = state.clone();
        let (after, effects) = update(state, Msg::CountSubmitted);

        assert!(effects.is_empty(), "input {input:?}");
        assert_eq!(after, before, "input {input:?}");
        assert_eq!(after.selection().len(), 2);
        assert_eq!(after.progressive(), ProgressiveSelection::Inactive);
    }
}

#[test]
fn stale_page_is_not_consumed() {
    init_logging();
    let state = started();
    let (state, to_two) = update(state, Msg::PageRequested(2));
    let (state, to_one) = submit_count(state, "20");

    // The page-2 response arrives after the request restarted on page 1.
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            fetch_id: single_fetch(&to_two).0,
            page: catalog_page(2),
        },
    );
    assert_eq!(state.view().total_selected, 0);
    assert_eq!(state.view().progressive, Some((0, 20)));

    let state = deliver(state, &to_one);
    assert_eq!(state.view().progressive, Some((12, 20)));
    assert!(state.selection().is_selected(1));
}

#[test]
fn manual_toggles_do_not_change_progress() {
    init_logging();
    let (state, effects) = submit_count(started(), "20");
    let state = deliver(state, &effects);
    let (state, _) = update(state, Msg::SelectionChanged(Default::default()));
    assert_eq!(state.view().total_selected, 0);
    assert_eq!(state.view().progressive, Some((12, 20)));

    let (state, effects) = update(state, Msg::PageRequested(2));
    let state = deliver(state, &effects);
    assert_eq!(state.view().total_selected, 8);
    assert_eq!(state.view().progressive, None);
}

#[test]
fn cancel_stops_consumption_but_keeps_selection() {
    init_logging();
    let (state, effects) = submit_count(started(), "20");
    let state = deliver(state, &effects);
    let (state, _) = update(state, Msg::CancelProgressive);
    assert_eq!(state.view().progressive, None);

    let (state, effects) = update(state, Msg::PageRequested(2));
    let state = deliver(state, &effects);
    assert_eq!(state.view().total_selected, 12);
}

#[test]
fn repeated_page_delivery_is_counted_once() {
    init_logging();
    let (state, effects) = submit_count(started(), "20");
    let (fetch_id, page) = single_fetch(&effects);
    let loaded = || Msg::PageLoaded {
        fetch_id,
        page: catalog_page(page),
    };

    let (state, _) = update(state, loaded());
    assert_eq!(state.view().progressive, Some((12, 20)));

    let (state, effects) = update(state, loaded());
    assert!(effects.is_empty());
    assert_eq!(state.view().progressive, Some((12, 20)));
    assert_eq!(state.selection().len(), 12);

    let (state, _) = update(
        state,
        Msg::PageFailed {
            fetch_id,
            reason: "late".to_string(),
        },
    );
    assert_eq!(state.view().last_error, None);
    assert_eq!(state.view().progressive, Some((12, 20)));

    let (state, effects) = update(state, Msg::PageRequested(2));
    let state = deliver(state, &effects);
    assert_eq!(state.view().progressive, None);
    assert_eq!(state.selection().len(), 20);
}
