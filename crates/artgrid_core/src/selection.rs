use std::collections::HashSet;

use crate::ArtworkId;

/// Global set of selected artwork ids, spanning every page ever visited.
///
/// Membership does not depend on which page is loaded: an id selected on
/// page 1 stays selected while page 5 is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionStore {
    selected: HashSet<ArtworkId>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selected.contains(&id)
    }

    /// Replaces the selection status of every id on the current page.
    ///
    /// `page_ids` are all ids on the current page, `incoming` is the full set
    /// the user now wants selected there. Page ids missing from `incoming` are
    /// deselected, every incoming id is selected, everything else is untouched.
    pub fn toggle(&mut self, page_ids: &[ArtworkId], incoming: &HashSet<ArtworkId>) {
        for id in page_ids {
            if !incoming.contains(id) {
                self.selected.remove(id);
            }
        }
        self.selected.extend(incoming.iter().copied());
    }

    pub fn select_all_on_page(&mut self, page_ids: &[ArtworkId]) {
        self.add_many(page_ids.iter().copied());
    }

    pub fn deselect_all_on_page(&mut self, page_ids: &[ArtworkId]) {
        for id in page_ids {
            self.selected.remove(id);
        }
    }

    /// Idempotent bulk add.
    pub fn add_many(&mut self, ids: impl IntoIterator<Item = ArtworkId>) {
        self.selected.extend(ids);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn selected_subset_of(&self, ids: &[ArtworkId]) -> HashSet<ArtworkId> {
        ids.iter()
            .copied()
            .filter(|id| self.selected.contains(id))
            .collect()
    }
}
