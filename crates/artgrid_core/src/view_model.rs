use crate::{Artwork, HeaderCheckbox};

/// Everything the grid needs for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridViewModel {
    /// Page currently displayed (0 before the first load).
    pub page_number: u32,
    /// Most recently requested page; differs from `page_number` while loading.
    pub requested_page: u32,
    pub total_pages: u32,
    pub total_records: u64,
    /// 1-based `(first, last)` row numbers of the displayed rows.
    pub showing: Option<(u64, u64)>,
    pub records: Vec<Artwork>,
    pub selected_records: Vec<Artwork>,
    pub all_selected: bool,
    pub some_selected: bool,
    pub header: HeaderCheckbox,
    pub loading: bool,
    pub total_selected: usize,
    /// `(consumed, target)` of an active progressive selection.
    pub progressive: Option<(usize, usize)>,
    pub count_input: String,
    pub last_error: Option<String>,
    pub dirty: bool,
}

impl GridViewModel {
    pub fn is_row_selected(&self, artwork: &Artwork) -> bool {
        self.selected_records
            .iter()
            .any(|selected| selected.id == artwork.id)
    }
}
