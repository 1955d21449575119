use crate::config::Config;
use crate::storage::{DynamoDbUrlStore, MemoryUrlStore, UrlStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn UrlStore>,
    pub config: Config,
}

impl AppContext {
    pub fn with_store(config: Config, store: Arc<dyn UrlStore>) -> Self {
        Self { store, config }
    }
}

impl us_app::ContextProvider<Config> for AppContext {
    async fn new(config: Config, aws_config: aws_config::SdkConfig) -> Self {
        let store: Arc<dyn UrlStore> = match &config.urls_table {
            Some(table) => {
                tracing::info!("using DynamoDB table: {table}");
                Arc::new(DynamoDbUrlStore::new(
                    aws_sdk_dynamodb::Client::new(&aws_config),
                    table.clone(),
                ))
            }
            None => {
                tracing::warn!("URLS_TABLE is not set, using in-memory store");
                Arc::new(MemoryUrlStore::new())
            }
        };

        Self { store, config }
    }
}
