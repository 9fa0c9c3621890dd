//! DynamoDB item conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and table records.
//! String properties are stored as `S`, integer properties as `N`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};

use rpa_functions_core::storage::{PropertyValue, RepositoryError, TableRecord};

pub const PK: &str = "PK";
pub const SK: &str = "SK";
pub const TIMESTAMP: &str = "Timestamp";

/// Convert a property value to a DynamoDB attribute.
pub fn property_to_attribute(value: &PropertyValue) -> AttributeValue {
    match value {
        PropertyValue::String(s) => AttributeValue::S(s.clone()),
        PropertyValue::Int(i) => AttributeValue::N(i.to_string()),
    }
}

/// Convert a table record to a DynamoDB item.
pub fn record_to_item(record: &TableRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(PK.to_string(), AttributeValue::S(record.partition_key.clone()));
    item.insert(SK.to_string(), AttributeValue::S(record.row_key.clone()));

    if let Some(timestamp) = record.timestamp {
        item.insert(TIMESTAMP.to_string(), AttributeValue::S(timestamp.to_rfc3339()));
    }

    for (name, value) in &record.properties {
        item.insert(name.clone(), property_to_attribute(value));
    }

    item
}

/// Convert a DynamoDB item to a table record.
///
/// Attributes of any type other than `S` or `N` are skipped.
pub fn item_to_record(
    item: &HashMap<String, AttributeValue>,
) -> Result<TableRecord, RepositoryError> {
    let mut record = TableRecord::new(get_string(item, PK)?, get_string(item, SK)?);
    record.timestamp = get_optional_datetime(item, TIMESTAMP)?;

    for (name, value) in item {
        if name == PK || name == SK || name == TIMESTAMP {
            continue;
        }
        match value {
            AttributeValue::S(s) => {
                record
                    .properties
                    .insert(name.clone(), PropertyValue::String(s.clone()));
            }
            AttributeValue::N(n) => {
                let parsed = n.parse::<i64>().map_err(|e| {
                    RepositoryError::InvalidData(format!("Invalid number {}: {}", name, e))
                })?;
                record
                    .properties
                    .insert(name.clone(), PropertyValue::Int(parsed));
            }
            _ => {}
        }
    }

    Ok(record)
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional datetime attribute (RFC 3339 format).
fn get_optional_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    match item.get(key).and_then(|v| v.as_s().ok()) {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e))),
        None => Ok(None),
    }
}
