//! Conversions between wire packages and table entities.
//!
//! Table-only fields (keys, timestamp) are dropped when going to the wire.

use uuid::Uuid;

use super::requests::NewPackageCheck;
use super::types::{PackageCheck, PackageCheckTableEntity};

/// Turns submitted packages into complete ones.
///
/// Missing ids are generated, missing status defaults to pending, and missing
/// auxiliary fields default to empty strings.
pub fn insert_request_to_packages(packages: Vec<NewPackageCheck>) -> Vec<PackageCheck> {
    packages
        .into_iter()
        .map(|package| PackageCheck {
            id: package.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            status: package.status.unwrap_or_default(),
            lci: package.lci.unwrap_or_default(),
            sap: package.sap.unwrap_or_default(),
        })
        .collect()
}

/// Places a package in the given partition, keyed by its id.
pub fn to_table_entity(package: &PackageCheck, partition_key: &str) -> PackageCheckTableEntity {
    PackageCheckTableEntity {
        partition_key: partition_key.to_string(),
        row_key: package.id.clone(),
        timestamp: None,
        id: package.id.clone(),
        status: package.status,
        lci: package.lci.clone(),
        sap: package.sap.clone(),
    }
}

pub fn from_table_entity(entity: &PackageCheckTableEntity) -> PackageCheck {
    PackageCheck {
        id: entity.id.clone(),
        status: entity.status,
        lci: entity.lci.clone(),
        sap: entity.sap.clone(),
    }
}

pub fn from_table_entities(entities: &[PackageCheckTableEntity]) -> Vec<PackageCheck> {
    entities.iter().map(from_table_entity).collect()
}
