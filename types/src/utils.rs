use crate::UrlRecord;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

impl TryFrom<HashMap<String, AttributeValue>> for UrlRecord {
    type Error = serde_dynamo::Error;

    fn try_from(
        item: HashMap<String, AttributeValue>,
    ) -> Result<Self, Self::Error> {
        serde_dynamo::from_item(item)
    }
}

impl TryFrom<&UrlRecord> for HashMap<String, AttributeValue> {
    type Error = serde_dynamo::Error;

    fn try_from(record: &UrlRecord) -> Result<Self, Self::Error> {
        serde_dynamo::to_item(record)
    }
}

/// Builds the key map for a record in a table keyed by `alias`.
pub fn alias_key(alias: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([("alias".to_string(), AttributeValue::S(alias.to_string()))])
}
