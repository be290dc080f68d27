pub type ArtworkId = u64;

/// Sequence number stamped on every issued page fetch.
pub type FetchId = u64;

/// One catalog entry as displayed in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Artwork with only an id and title set.
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}

/// One fetched batch of records plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    /// 1-based page number.
    pub number: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
    pub records: Vec<Artwork>,
}

impl Page {
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.records.iter().map(|artwork| artwork.id).collect()
    }
}
