//! Artgrid engine: page fetching against the artworks API and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_page, DecodeError};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{
    page_url, FetchSettings, PageFetcher, ReqwestFetcher, DEFAULT_BASE_URL, DEFAULT_ROWS_PER_PAGE,
};
pub use types::{ArtworkRecord, EngineEvent, FailureKind, FetchError, PageResult, RequestId};
