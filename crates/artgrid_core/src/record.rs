/// Identity key of an artwork; selection and row diffing go through it.
pub type ArtworkId = u64;

/// Sequence number attached to every page fetch. Strictly increasing per session.
pub type RequestId = u64;

/// One catalog entry as the grid displays it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: String,
    pub date_end: String,
}

/// A successfully fetched page: records in server order plus the overall count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageData {
    pub records: Vec<Artwork>,
    pub total: u64,
}
