//! Persistence of alias to URL mappings.
//!
//! Handlers only see [`UrlStore`]; the concrete backend is chosen at startup
//! from the configuration.

use async_trait::async_trait;
use thiserror::Error;

mod dynamodb;
mod memory;

pub use dynamodb::DynamoDbUrlStore;
pub use memory::MemoryUrlStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("url not found")]
    UrlNotFound,
    #[error("url exists")]
    UrlExists,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to decode record: {0}")]
    Decode(#[from] serde_dynamo::Error),
}

#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Stores `url` under `alias`.
    ///
    /// # Errors
    /// `StorageError::UrlExists` if the alias is already taken.
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError>;

    /// Resolves `alias` to its URL.
    ///
    /// # Errors
    /// `StorageError::UrlNotFound` if the alias is unknown.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the mapping for `alias`.
    ///
    /// # Errors
    /// `StorageError::UrlNotFound` if the alias is unknown.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
}
