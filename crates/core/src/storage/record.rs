//! Schemaless table records and the typed view over them.
//!
//! A [`TableRecord`] is what a [`RecordStore`] persists: a partition key, a row
//! key, a write timestamp and a bag of named properties. Domain types opt in to
//! storage by implementing [`TableEntity`].

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use super::{RecordStore, RepositoryError, Result};

/// A single property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    String(String),
    Int(i64),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

/// Comparison operator for [`FieldFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
}

impl Comparison {
    /// Applies the operator to a stored value and the filter value.
    pub fn matches(self, stored: &PropertyValue, expected: &PropertyValue) -> bool {
        match self {
            Comparison::Equal => stored == expected,
            Comparison::NotEqual => stored != expected,
        }
    }
}

/// Single-property filter used by [`RecordStore::retrieve_records`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: String,
    pub comparison: Comparison,
    pub value: PropertyValue,
}

impl FieldFilter {
    pub fn new(
        field: impl Into<String>,
        comparison: Comparison,
        value: impl Into<PropertyValue>,
    ) -> Self {
        Self {
            field: field.into(),
            comparison,
            value: value.into(),
        }
    }

    /// Shorthand for an equality filter.
    pub fn equal(field: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self::new(field, Comparison::Equal, value)
    }

    /// Returns true if the record satisfies this filter.
    ///
    /// A record without the property never matches, whatever the operator.
    pub fn matches(&self, record: &TableRecord) -> bool {
        record
            .properties
            .get(&self.field)
            .is_some_and(|stored| self.comparison.matches(stored, &self.value))
    }
}

/// A stored record addressed by partition and row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord {
    pub partition_key: String,
    pub row_key: String,
    /// Set by the store on write.
    pub timestamp: Option<DateTime<Utc>>,
    pub properties: BTreeMap<String, PropertyValue>,
}

impl TableRecord {
    pub fn new(partition_key: impl Into<String>, row_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            row_key: row_key.into(),
            timestamp: None,
            properties: BTreeMap::new(),
        }
    }

    /// Sets a property, replacing any previous value.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Gets a required string property.
    pub fn get_string(&self, name: &str) -> Result<String> {
        match self.properties.get(name) {
            Some(PropertyValue::String(s)) => Ok(s.clone()),
            Some(PropertyValue::Int(_)) => Err(RepositoryError::InvalidData(format!(
                "Property {name} is not a string"
            ))),
            None => Err(RepositoryError::InvalidData(format!(
                "Missing property: {name}"
            ))),
        }
    }

    /// Gets an optional string property. Missing and non-string values read as `None`.
    pub fn get_optional_string(&self, name: &str) -> Option<String> {
        match self.properties.get(name) {
            Some(PropertyValue::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Gets a required integer property.
    pub fn get_int(&self, name: &str) -> Result<i64> {
        match self.properties.get(name) {
            Some(PropertyValue::Int(i)) => Ok(*i),
            Some(PropertyValue::String(_)) => Err(RepositoryError::InvalidData(format!(
                "Property {name} is not an integer"
            ))),
            None => Err(RepositoryError::InvalidData(format!(
                "Missing property: {name}"
            ))),
        }
    }
}

/// A domain type that can be stored as a [`TableRecord`].
pub trait TableEntity: Sized {
    fn to_record(&self) -> TableRecord;

    fn from_record(record: &TableRecord) -> Result<Self>;
}

impl dyn RecordStore {
    /// Gets every record whose `field` compares to `value`, decoded as `T`.
    pub async fn retrieve_by_field<T: TableEntity>(
        &self,
        field: &str,
        comparison: Comparison,
        value: impl Into<PropertyValue>,
    ) -> Result<Vec<T>> {
        let filter = FieldFilter::new(field, comparison, value);
        let records = self.retrieve_records(&filter).await?;
        records.iter().map(T::from_record).collect()
    }

    /// Upserts a typed entity.
    pub async fn insert_or_replace_entity<T: TableEntity>(&self, entity: &T) -> Result<()> {
        self.insert_or_replace(entity.to_record()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct VecStore {
        records: Mutex<Vec<TableRecord>>,
    }

    #[async_trait]
    impl RecordStore for VecStore {
        fn table_name(&self) -> &str {
            "test"
        }

        async fn insert_or_replace(&self, record: TableRecord) -> Result<()> {
            self.records.lock().unwrap().push(record);
            Ok(())
        }

        async fn retrieve_records(&self, filter: &FieldFilter) -> Result<Vec<TableRecord>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect())
        }
    }

    #[derive(Debug, PartialEq)]
    struct Tag {
        name: String,
        weight: i64,
    }

    impl TableEntity for Tag {
        fn to_record(&self) -> TableRecord {
            TableRecord::new("tags", self.name.as_str())
                .with_property("Name", self.name.as_str())
                .with_property("Weight", self.weight)
        }

        fn from_record(record: &TableRecord) -> Result<Self> {
            Ok(Tag {
                name: record.get_string("Name")?,
                weight: record.get_int("Weight")?,
            })
        }
    }

    #[test]
    fn test_filter_matches_equal() {
        let record = TableRecord::new("p", "r").with_property("Status", 0i64);

        assert!(FieldFilter::equal("Status", 0i64).matches(&record));
        assert!(!FieldFilter::equal("Status", 1i64).matches(&record));
    }

    #[test]
    fn test_filter_matches_not_equal() {
        let record = TableRecord::new("p", "r").with_property("Status", 0i64);
        let filter = FieldFilter::new("Status", Comparison::NotEqual, 1i64);

        assert!(filter.matches(&record));
    }

    #[test]
    fn test_filter_type_mismatch_does_not_match() {
        let record = TableRecord::new("p", "r").with_property("Status", "0");
        assert!(!FieldFilter::equal("Status", 0i64).matches(&record));
    }

    #[test]
    fn test_filter_missing_property_never_matches() {
        let record = TableRecord::new("p", "r");

        assert!(!FieldFilter::equal("Status", 0i64).matches(&record));
        assert!(!FieldFilter::new("Status", Comparison::NotEqual, 0i64).matches(&record));
    }

    #[test]
    fn test_get_string_wrong_type() {
        let record = TableRecord::new("p", "r").with_property("Id", 5i64);
        assert!(matches!(
            record.get_string("Id"),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_get_int_missing() {
        let record = TableRecord::new("p", "r");
        assert!(record.get_int("Status").is_err());
    }

    #[test]
    fn test_get_optional_string() {
        let record = TableRecord::new("p", "r").with_property("LCI", "abc");

        assert_eq!(record.get_optional_string("LCI"), Some("abc".to_string()));
        assert_eq!(record.get_optional_string("SAP"), None);
    }

    #[tokio::test]
    async fn test_retrieve_by_field_decodes_matches() {
        let store: Box<dyn RecordStore> = Box::new(VecStore::default());
        let heavy = Tag {
            name: "heavy".to_string(),
            weight: 10,
        };
        let light = Tag {
            name: "light".to_string(),
            weight: 1,
        };

        store.insert_or_replace_entity(&heavy).await.unwrap();
        store.insert_or_replace_entity(&light).await.unwrap();

        let found: Vec<Tag> = store
            .retrieve_by_field("Weight", Comparison::Equal, 10i64)
            .await
            .unwrap();

        assert_eq!(found, vec![heavy]);
    }
}
