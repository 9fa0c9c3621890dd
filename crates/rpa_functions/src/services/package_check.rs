//! Package-check orchestration over the record store.
//!
//! The service is built per request around the shared store handle and holds no
//! state of its own.

use std::sync::Arc;

use rpa_functions_core::package_check::{
    from_table_entities, insert_request_to_packages, to_table_entity, NewPackageCheck,
    PackageCheck, PackageCheckTableEntity, PackageStatus, UpdatePackageRequest, ID_FIELD_NAME,
    STATUS_FIELD_NAME,
};
use rpa_functions_core::storage::{Comparison, RecordStore, Result};

pub struct PackageCheckService {
    store: Arc<dyn RecordStore>,
}

impl PackageCheckService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Upserts every package, one at a time, into the store's own partition.
    ///
    /// A failure part-way leaves the earlier packages written.
    pub async fn insert_batch(&self, packages: Vec<NewPackageCheck>) -> Result<()> {
        let partition_key = self.store.table_name().to_string();

        for package in insert_request_to_packages(packages) {
            let entity = to_table_entity(&package, &partition_key);
            self.store.insert_or_replace_entity(&entity).await?;
            tracing::debug!(id = %package.id, "Stored package check");
        }

        Ok(())
    }

    /// Gets every package still awaiting processing.
    pub async fn query_pending(&self) -> Result<Vec<PackageCheck>> {
        let entities: Vec<PackageCheckTableEntity> = self
            .store
            .retrieve_by_field(
                STATUS_FIELD_NAME,
                Comparison::Equal,
                PackageStatus::Pending.code(),
            )
            .await?;

        Ok(from_table_entities(&entities))
    }

    /// Marks the package with the given id processed.
    ///
    /// Returns `false` without writing unless exactly one record carries the id.
    /// The read and the write are not atomic; a concurrent update in between is
    /// overwritten.
    pub async fn update_package(&self, request: &UpdatePackageRequest) -> Result<bool> {
        let mut matches: Vec<PackageCheckTableEntity> = self
            .store
            .retrieve_by_field(ID_FIELD_NAME, Comparison::Equal, request.id.as_str())
            .await?;

        if matches.len() != 1 {
            tracing::warn!(id = %request.id, matches = matches.len(), "Package update skipped");
            return Ok(false);
        }

        let Some(mut entity) = matches.pop() else {
            return Ok(false);
        };
        entity.mark_processed();
        self.store.insert_or_replace_entity(&entity).await?;

        Ok(true)
    }
}
