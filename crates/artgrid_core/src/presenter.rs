//! Page-level selection flags derived from the store and the visible rows.

use crate::{Artwork, SelectionStore};

/// Visual state of the page-level selection header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderCheckbox {
    #[default]
    Unchecked,
    Indeterminate,
    Checked,
}

/// True iff the page is non-empty and every row on it is selected.
pub fn all_selected(store: &SelectionStore, items: &[Artwork]) -> bool {
    !items.is_empty() && items.iter().all(|artwork| store.is_selected(artwork.id))
}

/// True iff at least one but not every row on the page is selected.
pub fn some_selected(store: &SelectionStore, items: &[Artwork]) -> bool {
    items.iter().any(|artwork| store.is_selected(artwork.id)) && !all_selected(store, items)
}

/// Selected rows of the page, in page order.
pub fn selected_items_on_page(store: &SelectionStore, items: &[Artwork]) -> Vec<Artwork> {
    items
        .iter()
        .filter(|artwork| store.is_selected(artwork.id))
        .cloned()
        .collect()
}

pub fn header_state(store: &SelectionStore, items: &[Artwork]) -> HeaderCheckbox {
    if all_selected(store, items) {
        HeaderCheckbox::Checked
    } else if some_selected(store, items) {
        HeaderCheckbox::Indeterminate
    } else {
        HeaderCheckbox::Unchecked
    }
}
