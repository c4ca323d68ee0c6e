//! Cache storage for catalog snapshots.
//!
//! One JSON envelope per catalog group, replaced wholesale on every
//! successful fetch. The storage is behind a trait so the manager can run
//! against an in-memory store in tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::error::CacheError;
use super::types::CacheEnvelope;

/// Envelope storage keyed by catalog group.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Load the envelope for a group, `None` when nothing is stored.
    async fn load(&self, group: &str) -> Result<Option<CacheEnvelope>, CacheError>;

    /// Replace the envelope for a group.
    async fn store(&self, group: &str, envelope: &CacheEnvelope) -> Result<(), CacheError>;
}

/// Flat-file store: `<cache_dir>/debris_cache_<group>.json`.
pub struct FileCacheStore {
    cache_dir: PathBuf,
}

impl FileCacheStore {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Self {
        Self {
            cache_dir: cache_dir.as_ref().to_path_buf(),
        }
    }

    async fn ensure_cache_dir(&self) -> Result<(), CacheError> {
        if !self.cache_dir.exists() {
            fs::create_dir_all(&self.cache_dir).await?;
            info!("Created cache directory: {:?}", self.cache_dir);
        }
        Ok(())
    }

    fn envelope_path(&self, group: &str) -> PathBuf {
        // group names come from a query parameter, keep them filename-safe
        let safe: String = group
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            })
            .collect();
        self.cache_dir.join(format!("debris_cache_{}.json", safe))
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    async fn load(&self, group: &str) -> Result<Option<CacheEnvelope>, CacheError> {
        let path = self.envelope_path(group);
        if !path.exists() {
            debug!("No cache envelope at {:?}", path);
            return Ok(None);
        }

        let content = fs::read_to_string(&path).await?;
        let envelope: CacheEnvelope = serde_json::from_str(&content)?;
        debug!(
            "Loaded cache envelope for group '{}' ({} records, fetched {})",
            group,
            envelope.data.len(),
            envelope.timestamp
        );
        Ok(Some(envelope))
    }

    async fn store(&self, group: &str, envelope: &CacheEnvelope) -> Result<(), CacheError> {
        self.ensure_cache_dir().await?;

        let path = self.envelope_path(group);
        let content = serde_json::to_string(envelope)?;

        // write to a sibling temp file first so readers never see a torn envelope
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &path).await?;

        debug!(
            "Stored cache envelope for group '{}' ({} records)",
            group,
            envelope.data.len()
        );
        Ok(())
    }
}

/// In-memory store for tests and embedded use.
#[derive(Default)]
pub struct MemoryCacheStore {
    envelopes: Mutex<HashMap<String, CacheEnvelope>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an envelope directly, bypassing the trait.
    pub async fn insert(&self, group: &str, envelope: CacheEnvelope) {
        self.envelopes
            .lock()
            .await
            .insert(group.to_string(), envelope);
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn load(&self, group: &str) -> Result<Option<CacheEnvelope>, CacheError> {
        Ok(self.envelopes.lock().await.get(group).cloned())
    }

    async fn store(&self, group: &str, envelope: &CacheEnvelope) -> Result<(), CacheError> {
        self.envelopes
            .lock()
            .await
            .insert(group.to_string(), envelope.clone());
        Ok(())
    }
}
