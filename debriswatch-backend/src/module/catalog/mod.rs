//! Orbital debris catalog: fetch, cache, classify, normalize, summarize.

pub mod altitude;
pub mod api_client;
pub mod cache;
pub mod classify;
pub mod error;
pub mod manager;
pub mod normalize;
pub mod stats;
pub mod types;

pub use api_client::{CatalogSource, CelestrakClient, DEFAULT_BASE_URL};
pub use cache::{CacheStore, FileCacheStore, MemoryCacheStore};
pub use error::{CacheError, CatalogError, FetchError};
pub use manager::{CatalogManager, CACHE_MAX_AGE_HOURS};
pub use types::{CacheEnvelope, RawCatalogRecord};
