use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Front end is up; load the first page.
    Started,
    /// User navigated to a 1-based page number.
    PageRequested(u32),
    /// Engine delivered a page for an issued fetch.
    PageLoaded {
        fetch_id: crate::FetchId,
        page: crate::Page,
    },
    /// Engine failed to deliver a page for an issued fetch.
    PageFailed {
        fetch_id: crate::FetchId,
        reason: String,
    },
    /// Full set of ids the user now wants selected on the current page.
    SelectionChanged(HashSet<crate::ArtworkId>),
    /// User clicked the page-level selection header checkbox.
    SelectAllClicked,
    /// User edited the custom row-count input.
    CountInputChanged(String),
    /// User submitted the custom row-count input.
    CountSubmitted,
    /// User cleared every selection.
    ClearClicked,
    /// User stopped an in-flight progressive selection.
    CancelProgressive,
    /// Fallback for placeholder wiring.
    NoOp,
}
