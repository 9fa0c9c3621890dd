//! DynamoDB repository implementation.
//!
//! Implements [`RecordStore`] from `rpa_functions_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::Utc;

use rpa_functions_core::storage::{Comparison, FieldFilter, RecordStore, Result, TableRecord};

use super::conversions::{item_to_record, property_to_attribute, record_to_item};
use super::error::{map_put_item_error, map_scan_error};

/// DynamoDB-based record store.
///
/// The table must have a string partition key `PK` and a string sort key `SK`.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn from_table_name(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);

        Self::new(client, table_name)
    }
}

/// Filter expression for a single-attribute comparison.
fn filter_expression(comparison: Comparison) -> &'static str {
    match comparison {
        Comparison::Equal => "#f = :v",
        Comparison::NotEqual => "#f <> :v",
    }
}

#[async_trait]
impl RecordStore for DynamoDbRepository {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn insert_or_replace(&self, mut record: TableRecord) -> Result<()> {
        record.timestamp = Some(Utc::now());

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(&record)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn retrieve_records(&self, filter: &FieldFilter) -> Result<Vec<TableRecord>> {
        let mut records = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression(filter_expression(filter.comparison))
                .expression_attribute_names("#f", &filter.field)
                .expression_attribute_values(":v", property_to_attribute(&filter.value))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in output.items.unwrap_or_default() {
                records.push(item_to_record(&item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(
            table = %self.table_name,
            field = %filter.field,
            count = records.len(),
            "Scanned record store"
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_expression() {
        assert_eq!(filter_expression(Comparison::Equal), "#f = :v");
        assert_eq!(filter_expression(Comparison::NotEqual), "#f <> :v");
    }
}
