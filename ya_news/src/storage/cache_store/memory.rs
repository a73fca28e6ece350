use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::storage::errors::StorageError;
use crate::storage::types::CacheData;

use super::types::{CacheStore, InMemoryCacheStore, MemoryEntry};

const CACHE_PREFIX: &str = "cache";

impl InMemoryCacheStore {
    pub(crate) fn new() -> Self {
        tracing::info!("Creating new in-memory generic cache store");
        Self {
            entry: HashMap::new(),
        }
    }

    fn make_key(prefix: &str, key: &str) -> String {
        format!("{CACHE_PREFIX}:{prefix}:{key}")
    }

    fn is_live(entry: &MemoryEntry, now: Instant) -> bool {
        entry.expires_at.is_none_or(|deadline| deadline > now)
    }

    /// Drop every entry whose TTL has passed
    fn evict_expired(&mut self) {
        let now = Instant::now();
        let before = self.entry.len();
        self.entry.retain(|_, entry| Self::is_live(entry, now));
        let evicted = before - self.entry.len();
        if evicted > 0 {
            tracing::debug!("Evicted {} expired cache entries", evicted);
        }
    }
}

// Expired entries are hidden on read and swept on every write.
#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn put(&mut self, prefix: &str, key: &str, value: CacheData) -> Result<(), StorageError> {
        self.evict_expired();
        let key = Self::make_key(prefix, key);
        self.entry.insert(
            key,
            MemoryEntry {
                data: value,
                expires_at: None,
            },
        );
        Ok(())
    }

    async fn put_with_ttl(
        &mut self,
        prefix: &str,
        key: &str,
        value: CacheData,
        ttl: usize,
    ) -> Result<(), StorageError> {
        self.evict_expired();
        let key = Self::make_key(prefix, key);
        self.entry.insert(
            key,
            MemoryEntry {
                data: value,
                expires_at: Some(Instant::now() + Duration::from_secs(ttl as u64)),
            },
        );
        Ok(())
    }

    async fn get(&self, prefix: &str, key: &str) -> Result<Option<CacheData>, StorageError> {
        let key = Self::make_key(prefix, key);
        let now = Instant::now();
        Ok(self
            .entry
            .get(&key)
            .filter(|entry| Self::is_live(entry, now))
            .map(|entry| entry.data.clone()))
    }

    async fn remove(&mut self, prefix: &str, key: &str) -> Result<(), StorageError> {
        let key = Self::make_key(prefix, key);
        self.entry.remove(&key);
        Ok(())
    }
}
