//! Fetch-and-cache orchestration.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, error, info, warn};

use super::api_client::CatalogSource;
use super::cache::CacheStore;
use super::error::CatalogError;
use super::types::{CacheEnvelope, RawCatalogRecord};

/// Snapshots younger than this are served without a remote call.
pub const CACHE_MAX_AGE_HOURS: i64 = 6;

/// Serves catalog snapshots, going remote only when the cached envelope for
/// the requested group is missing or older than the freshness window.
///
/// There is no cross-request locking: concurrent requests that both see a
/// stale envelope will both fetch, and the last write wins. The file store
/// replaces envelopes atomically, so a reader never sees a torn one.
pub struct CatalogManager {
    source: Arc<dyn CatalogSource>,
    cache: Arc<dyn CacheStore>,
    max_age: Duration,
    serve_stale_on_error: bool,
}

impl CatalogManager {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        cache: Arc<dyn CacheStore>,
        max_age: Duration,
        serve_stale_on_error: bool,
    ) -> Self {
        Self {
            source,
            cache,
            max_age,
            serve_stale_on_error,
        }
    }

    /// Return the freshest available snapshot for `group`.
    ///
    /// Cache problems never fail a request: an unreadable envelope counts as
    /// a miss and a failed write is logged while the fetched data is still
    /// returned. The only error path is a remote fetch failing with nothing
    /// acceptable cached.
    pub async fn get_data(&self, group: &str) -> Result<Vec<RawCatalogRecord>, CatalogError> {
        let cached = match self.cache.load(group).await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(
                    "Cache read failed for group '{}', treating as a miss: {}",
                    group, e
                );
                None
            }
        };

        if let Some(envelope) = &cached {
            if envelope.is_fresh(self.max_age) {
                debug!(
                    "Serving group '{}' from cache ({} records, fetched {})",
                    group,
                    envelope.data.len(),
                    envelope.timestamp
                );
                return Ok(envelope.data.clone());
            }
            debug!(
                "Cache for group '{}' expired (fetched {})",
                group, envelope.timestamp
            );
        }

        match self.source.fetch(group).await {
            Ok(records) => {
                info!(
                    "Fetched {} records for group '{}', refreshing cache",
                    records.len(),
                    group
                );
                let envelope = CacheEnvelope::new(records);
                if let Err(e) = self.cache.store(group, &envelope).await {
                    warn!("Failed to write cache for group '{}': {}", group, e);
                }
                Ok(envelope.data)
            }
            Err(e) => {
                if self.serve_stale_on_error {
                    if let Some(envelope) = cached {
                        warn!(
                            "Fetch failed for group '{}', serving stale snapshot from {}: {}",
                            group, envelope.timestamp, e
                        );
                        return Ok(envelope.data);
                    }
                }
                error!("No catalog data available for group '{}': {}", group, e);
                Err(CatalogError::Unavailable { source: e })
            }
        }
    }
}
