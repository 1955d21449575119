use super::{StorageError, UrlStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use types::UrlRecord;

/// Process-local store for development and tests. Contents are lost on
/// restart.
#[derive(Debug, Default)]
pub struct MemoryUrlStore {
    records: RwLock<HashMap<String, UrlRecord>>,
}

impl MemoryUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError> {
        let mut records = self.records.write().await;

        if records.contains_key(alias) {
            return Err(StorageError::UrlExists);
        }

        records.insert(alias.to_string(), UrlRecord::new(alias, url));

        Ok(())
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        self.records
            .read()
            .await
            .get(alias)
            .map(|record| record.url.clone())
            .ok_or(StorageError::UrlNotFound)
    }

    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        self.records
            .write()
            .await
            .remove(alias)
            .map(|_| ())
            .ok_or(StorageError::UrlNotFound)
    }
}
