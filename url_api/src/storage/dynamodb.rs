use super::{StorageError, UrlStore};
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use types::{UrlRecord, utils::alias_key};

// placeholder for the key attribute in condition expressions
const ALIAS_NAME: &str = "#alias";
const ALIAS_ATTRIBUTE: &str = "alias";

/// Alias store backed by a DynamoDB table whose partition key is `alias`.
#[derive(Debug, Clone)]
pub struct DynamoDbUrlStore {
    client: Client,
    table: String,
}

impl DynamoDbUrlStore {
    pub const fn new(client: Client, table: String) -> Self {
        Self { client, table }
    }
}

#[async_trait]
impl UrlStore for DynamoDbUrlStore {
    #[tracing::instrument(skip(self))]
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError> {
        let record = UrlRecord::new(alias, url);
        let item = HashMap::<String, AttributeValue>::try_from(&record)?;

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item))
            .condition_expression(format!("attribute_not_exists({ALIAS_NAME})"))
            .expression_attribute_names(ALIAS_NAME, ALIAS_ATTRIBUTE)
            .send()
            .await
            .map_err(|e| {
                let e = e.into_service_error();
                if e.is_conditional_check_failed_exception() {
                    StorageError::UrlExists
                } else {
                    StorageError::Backend(DisplayErrorContext(&e).to_string())
                }
            })?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .set_key(Some(alias_key(alias)))
            .send()
            .await
            .map_err(|e| StorageError::Backend(DisplayErrorContext(&e).to_string()))?;

        let Some(item) = output.item else {
            return Err(StorageError::UrlNotFound);
        };

        let record = UrlRecord::try_from(item)?;

        Ok(record.url)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        self.client
            .delete_item()
            .table_name(&self.table)
            .set_key(Some(alias_key(alias)))
            .condition_expression(format!("attribute_exists({ALIAS_NAME})"))
            .expression_attribute_names(ALIAS_NAME, ALIAS_ATTRIBUTE)
            .send()
            .await
            .map_err(|e| {
                let e = e.into_service_error();
                if e.is_conditional_check_failed_exception() {
                    StorageError::UrlNotFound
                } else {
                    StorageError::Backend(DisplayErrorContext(&e).to_string())
                }
            })?;

        Ok(())
    }
}
