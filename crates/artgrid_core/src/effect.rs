use crate::FetchId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page of the collection. The response must echo `fetch_id`.
    FetchPage { fetch_id: FetchId, page: u32 },
}
