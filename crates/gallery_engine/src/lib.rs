//! Gallery engine: catalog fetching and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{CatalogFetcher, FetchSettings, ReqwestCatalogFetcher, DEFAULT_BASE_URL};
pub use types::{
    Artwork, ArtworkPage, EngineEvent, FailureKind, FetchError, Pagination, RequestId,
    HTTP_FAILURE_MESSAGE,
};
