use grid_logging::{grid_debug, grid_info};

use crate::{parse_select_count, presenter, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![navigate(&mut state, 1)],
        Msg::PageRequested(page) => {
            if !is_navigable(&state, page) {
                return (state, Vec::new());
            }
            vec![navigate(&mut state, page)]
        }
        Msg::PageLoaded { fetch_id, page } => {
            if state.accept_page(fetch_id, page) {
                let records = state.page().records.clone();
                let (progressive, selection) = state.progressive_and_selection_mut();
                if progressive.is_active() {
                    progressive.on_page_loaded(&records, selection);
                }
            }
            Vec::new()
        }
        Msg::PageFailed { fetch_id, reason } => {
            state.fail_fetch(fetch_id, reason);
            Vec::new()
        }
        Msg::SelectionChanged(incoming) => {
            let page_ids = state.page().ids();
            state.selection_mut().toggle(&page_ids, &incoming);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SelectAllClicked => {
            let records = &state.page().records;
            if records.is_empty() {
                return (state, Vec::new());
            }
            let all_selected = presenter::all_selected(state.selection(), records);
            let page_ids = state.page().ids();
            if all_selected {
                state.selection_mut().deselect_all_on_page(&page_ids);
            } else {
                state.selection_mut().select_all_on_page(&page_ids);
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::CountInputChanged(text) => {
            state.set_count_input(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::CountSubmitted => {
            let Some(count) = parse_select_count(state.count_input()) else {
                grid_debug!("Ignoring custom count input {:?}", state.count_input());
                return (state, Vec::new());
            };
            let (progressive, selection) = state.progressive_and_selection_mut();
            progressive.start(count, selection);
            state.set_count_input(String::new());
            grid_info!("Selecting first {} rows across pages", count);
            vec![navigate(&mut state, 1)]
        }
        Msg::ClearClicked => {
            let (progressive, selection) = state.progressive_and_selection_mut();
            progressive.cancel();
            selection.clear();
            state.mark_dirty();
            Vec::new()
        }
        Msg::CancelProgressive => {
            if state.progressive().is_active() {
                let (progressive, _) = state.progressive_and_selection_mut();
                progressive.cancel();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn navigate(state: &mut AppState, page: u32) -> Effect {
    let fetch_id = state.begin_fetch(page);
    Effect::FetchPage { fetch_id, page }
}

/// Page numbers are 1-based and bounded by the last known page count.
/// Re-requesting the page already on screen is a no-op unless a fetch is pending.
fn is_navigable(state: &AppState, page: u32) -> bool {
    let current = state.page();
    if page == 0 || (current.total_pages > 0 && page > current.total_pages) {
        return false;
    }
    state.is_loading() || page != current.number
}
