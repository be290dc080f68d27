//! Artgrid engine: page fetching and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::{EngineCommands, EngineError, EngineHandle};
pub use fetch::{
    FetchSettings, PageFetcher, ReqwestPageFetcher, DEFAULT_ENDPOINT, DEFAULT_FIELDS,
};
pub use types::{
    ApiPagination, ApiResponse, ArtworkRecord, EngineEvent, FailureKind, FetchError, FetchId,
    PageOutput,
};
