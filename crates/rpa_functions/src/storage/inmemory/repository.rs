//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use rpa_functions_core::assets::{
    Asset, DailyReport, NewAsset, NewDailyReport, NewWellsTest, WellsTest,
};
use rpa_functions_core::storage::{
    AssetRepository, DailyReportRepository, FieldFilter, RecordStore, Result, TableRecord,
    WellsTestRepository,
};

/// In-memory storage backend.
///
/// Relational collections assign ids from per-collection counters starting at 1.
/// Records are keyed by `(partition_key, row_key)`.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    table_name: String,
    assets: Arc<RwLock<Vec<Asset>>>,
    daily_reports: Arc<RwLock<Vec<DailyReport>>>,
    wells_tests: Arc<RwLock<Vec<WellsTest>>>,
    next_asset_id: Arc<AtomicI64>,
    next_dailyreport_id: Arc<AtomicI64>,
    next_wellstest_id: Arc<AtomicI64>,
    records: Arc<RwLock<HashMap<(String, String), TableRecord>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new("PackageCheck")
    }
}

impl InMemoryRepository {
    /// Creates a new empty repository whose record store is named `table_name`.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            assets: Arc::new(RwLock::new(Vec::new())),
            daily_reports: Arc::new(RwLock::new(Vec::new())),
            wells_tests: Arc::new(RwLock::new(Vec::new())),
            next_asset_id: Arc::new(AtomicI64::new(1)),
            next_dailyreport_id: Arc::new(AtomicI64::new(1)),
            next_wellstest_id: Arc::new(AtomicI64::new(1)),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl AssetRepository for InMemoryRepository {
    async fn list_assets_by_name(&self) -> Result<Vec<Asset>> {
        let mut assets = self.assets.read().await.clone();
        assets.sort_by(|a, b| a.asset_name.cmp(&b.asset_name));
        Ok(assets)
    }

    async fn create_asset(&self, asset: &NewAsset) -> Result<Asset> {
        let id = self.next_asset_id.fetch_add(1, Ordering::SeqCst);
        let asset = asset.clone().into_asset(id);
        self.assets.write().await.push(asset.clone());
        Ok(asset)
    }
}

#[async_trait]
impl DailyReportRepository for InMemoryRepository {
    async fn create_daily_report(&self, report: &NewDailyReport) -> Result<DailyReport> {
        let id = self.next_dailyreport_id.fetch_add(1, Ordering::SeqCst);
        let report = report.clone().into_daily_report(id);
        self.daily_reports.write().await.push(report.clone());
        Ok(report)
    }
}

#[async_trait]
impl WellsTestRepository for InMemoryRepository {
    async fn create_wells_test(&self, test: &NewWellsTest) -> Result<WellsTest> {
        let id = self.next_wellstest_id.fetch_add(1, Ordering::SeqCst);
        let test = test.clone().into_wells_test(id);
        self.wells_tests.write().await.push(test.clone());
        Ok(test)
    }
}

#[async_trait]
impl RecordStore for InMemoryRepository {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn insert_or_replace(&self, mut record: TableRecord) -> Result<()> {
        record.timestamp = Some(Utc::now());
        let key = (record.partition_key.clone(), record.row_key.clone());
        self.records.write().await.insert(key, record);
        Ok(())
    }

    async fn retrieve_records(&self, filter: &FieldFilter) -> Result<Vec<TableRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }
}
