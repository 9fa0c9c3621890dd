//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Store handles are created once at startup and shared by
//! every request. Each store picks its backend from the enabled features.

use std::sync::Arc;

use rpa_functions_core::storage::{
    AssetRepository, DailyReportRepository, RecordStore, WellsTestRepository,
};

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler; clones share the same stores.
#[derive(Clone)]
pub struct AppState {
    pub asset_repo: Arc<dyn AssetRepository>,
    pub daily_report_repo: Arc<dyn DailyReportRepository>,
    pub wells_test_repo: Arc<dyn WellsTestRepository>,
    /// Package-check records, partitioned by the configured table name.
    pub record_store: Arc<dyn RecordStore>,
}

/// The three relational repositories, usually views of one backend.
struct RelationalStores {
    assets: Arc<dyn AssetRepository>,
    daily_reports: Arc<dyn DailyReportRepository>,
    wells_tests: Arc<dyn WellsTestRepository>,
}

impl RelationalStores {
    fn from_backend<R>(backend: Arc<R>) -> Self
    where
        R: AssetRepository + DailyReportRepository + WellsTestRepository + 'static,
    {
        Self {
            assets: backend.clone(),
            daily_reports: backend.clone(),
            wells_tests: backend,
        }
    }
}

impl AppState {
    /// Creates AppState with the backends selected by the enabled features.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let relational = relational_stores(config).await?;
        let record_store = record_store(config).await;

        tracing::info!(table = record_store.table_name(), "Stores initialized");

        Ok(Self {
            asset_repo: relational.assets,
            daily_report_repo: relational.daily_reports,
            wells_test_repo: relational.wells_tests,
            record_store,
        })
    }
}

// ============================================================================
// Factory functions for the different backends
// ============================================================================

#[cfg(feature = "sqlite")]
async fn relational_stores(config: &Config) -> Result<RelationalStores, anyhow::Error> {
    use crate::storage::SqliteRepository;

    tracing::info!(path = %config.sqlite_path, "Opening SQLite relational store");
    let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);

    Ok(RelationalStores::from_backend(sqlite_repo))
}

#[cfg(not(feature = "sqlite"))]
async fn relational_stores(_config: &Config) -> Result<RelationalStores, anyhow::Error> {
    use crate::storage::InMemoryRepository;

    tracing::warn!("Relational store is in memory; data is lost on shutdown");
    let inmemory_repo = Arc::new(InMemoryRepository::default());

    Ok(RelationalStores::from_backend(inmemory_repo))
}

#[cfg(feature = "dynamodb")]
async fn record_store(config: &Config) -> Arc<dyn RecordStore> {
    use crate::storage::DynamoDbRepository;

    Arc::new(DynamoDbRepository::from_table_name(config.record_table_name.clone()).await)
}

#[cfg(not(feature = "dynamodb"))]
async fn record_store(config: &Config) -> Arc<dyn RecordStore> {
    use crate::storage::InMemoryRepository;

    tracing::warn!("Record store is in memory; data is lost on shutdown");
    Arc::new(InMemoryRepository::new(config.record_table_name.clone()))
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        use crate::storage::InMemoryRepository;

        let repo = Arc::new(InMemoryRepository::default());
        let relational = RelationalStores::from_backend(repo.clone());

        Self {
            asset_repo: relational.assets,
            daily_report_repo: relational.daily_reports,
            wells_test_repo: relational.wells_tests,
            record_store: repo,
        }
    }
}
