use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{Result, TableEntity, TableRecord};

/// Property holding the package identifier.
pub const ID_FIELD_NAME: &str = "Id";
/// Property holding the package status.
pub const STATUS_FIELD_NAME: &str = "Status";
const LCI_FIELD_NAME: &str = "LCI";
const SAP_FIELD_NAME: &str = "SAP";

/// Value written to `LCI` when a package is marked processed.
pub const PLACEHOLDER_LCI: &str = "test";
/// Value written to `SAP` when a package is marked processed.
pub const PLACEHOLDER_SAP: &str = "teest";

/// Processing status of a package. Encoded as an integer on the wire and in the store.
///
/// Only `0` means pending; codes other than `0` and `1` are kept as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i64", from = "i64")]
pub enum PackageStatus {
    /// Awaiting robot processing.
    #[default]
    Pending,
    Processed,
    Other(i64),
}

impl PackageStatus {
    pub fn code(self) -> i64 {
        match self {
            PackageStatus::Pending => 0,
            PackageStatus::Processed => 1,
            PackageStatus::Other(code) => code,
        }
    }

    pub fn is_pending(self) -> bool {
        self == PackageStatus::Pending
    }
}

impl From<PackageStatus> for i64 {
    fn from(status: PackageStatus) -> Self {
        status.code()
    }
}

impl From<i64> for PackageStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => PackageStatus::Pending,
            1 => PackageStatus::Processed,
            other => PackageStatus::Other(other),
        }
    }
}

/// A package check as exchanged with clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageCheck {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Status")]
    pub status: PackageStatus,
    #[serde(rename = "LCI")]
    pub lci: String,
    #[serde(rename = "SAP")]
    pub sap: String,
}

impl PackageCheck {
    /// Creates a pending package with empty auxiliary fields.
    pub fn pending(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: PackageStatus::Pending,
            lci: String::new(),
            sap: String::new(),
        }
    }
}

/// A package check as persisted in the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCheckTableEntity {
    pub partition_key: String,
    pub row_key: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub id: String,
    pub status: PackageStatus,
    pub lci: String,
    pub sap: String,
}

impl PackageCheckTableEntity {
    /// Overwrites the auxiliary fields with the placeholders and advances the status.
    pub fn mark_processed(&mut self) {
        self.lci = PLACEHOLDER_LCI.to_string();
        self.sap = PLACEHOLDER_SAP.to_string();
        self.status = PackageStatus::Processed;
    }
}

impl TableEntity for PackageCheckTableEntity {
    fn to_record(&self) -> TableRecord {
        let mut record = TableRecord::new(self.partition_key.as_str(), self.row_key.as_str())
            .with_property(ID_FIELD_NAME, self.id.as_str())
            .with_property(STATUS_FIELD_NAME, self.status.code())
            .with_property(LCI_FIELD_NAME, self.lci.as_str())
            .with_property(SAP_FIELD_NAME, self.sap.as_str());
        record.timestamp = self.timestamp;
        record
    }

    fn from_record(record: &TableRecord) -> Result<Self> {
        let status = PackageStatus::from(record.get_int(STATUS_FIELD_NAME)?);

        Ok(Self {
            partition_key: record.partition_key.clone(),
            row_key: record.row_key.clone(),
            timestamp: record.timestamp,
            id: record.get_string(ID_FIELD_NAME)?,
            status,
            lci: record.get_optional_string(LCI_FIELD_NAME).unwrap_or_default(),
            sap: record.get_optional_string(SAP_FIELD_NAME).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RepositoryError;

    fn sample_entity() -> PackageCheckTableEntity {
        PackageCheckTableEntity {
            partition_key: "PackageCheck".to_string(),
            row_key: "PKG-1".to_string(),
            timestamp: None,
            id: "PKG-1".to_string(),
            status: PackageStatus::Pending,
            lci: "LCI-77".to_string(),
            sap: "4500012".to_string(),
        }
    }

    #[test]
    fn test_status_wire_encoding() {
        assert_eq!(serde_json::to_string(&PackageStatus::Pending).unwrap(), "0");
        assert_eq!(serde_json::to_string(&PackageStatus::Processed).unwrap(), "1");
        assert_eq!(
            serde_json::from_str::<PackageStatus>("7").unwrap(),
            PackageStatus::Other(7)
        );
        assert!(!PackageStatus::Other(7).is_pending());
    }

    #[test]
    fn test_package_check_field_names() {
        let package = PackageCheck::pending("PKG-9");
        let json = serde_json::to_value(&package).unwrap();

        assert_eq!(json["Id"], "PKG-9");
        assert_eq!(json["Status"], 0);
        assert_eq!(json["LCI"], "");
        assert_eq!(json["SAP"], "");
    }

    #[test]
    fn test_mark_processed_uses_placeholders() {
        let mut entity = sample_entity();

        entity.mark_processed();

        assert_eq!(entity.lci, "test");
        assert_eq!(entity.sap, "teest");
        assert_eq!(entity.status, PackageStatus::Processed);
    }

    #[test]
    fn test_record_carries_status_as_integer() {
        let record = sample_entity().to_record();

        assert_eq!(record.partition_key, "PackageCheck");
        assert_eq!(record.row_key, "PKG-1");
        assert_eq!(record.get_int(STATUS_FIELD_NAME).unwrap(), 0);
        assert_eq!(record.get_string(ID_FIELD_NAME).unwrap(), "PKG-1");
    }

    #[test]
    fn test_from_record_keeps_unlisted_status() {
        let record = TableRecord::new("PackageCheck", "PKG-1")
            .with_property(ID_FIELD_NAME, "PKG-1")
            .with_property(STATUS_FIELD_NAME, 5i64);

        let entity = PackageCheckTableEntity::from_record(&record).unwrap();

        assert_eq!(entity.status, PackageStatus::Other(5));
        assert_eq!(entity.to_record().get_int(STATUS_FIELD_NAME).unwrap(), 5);
    }

    #[test]
    fn test_from_record_rejects_non_integer_status() {
        let record = TableRecord::new("PackageCheck", "PKG-1")
            .with_property(ID_FIELD_NAME, "PKG-1")
            .with_property(STATUS_FIELD_NAME, "pending");

        assert!(matches!(
            PackageCheckTableEntity::from_record(&record),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_from_record_defaults_missing_auxiliary_fields() {
        let record = TableRecord::new("PackageCheck", "PKG-2")
            .with_property(ID_FIELD_NAME, "PKG-2")
            .with_property(STATUS_FIELD_NAME, 1i64);

        let entity = PackageCheckTableEntity::from_record(&record).unwrap();

        assert_eq!(entity.status, PackageStatus::Processed);
        assert!(entity.lci.is_empty());
        assert!(entity.sap.is_empty());
    }
}
