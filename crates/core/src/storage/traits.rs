use async_trait::async_trait;

use crate::assets::{Asset, DailyReport, NewAsset, NewDailyReport, NewWellsTest, WellsTest};

use super::{FieldFilter, Result, TableRecord};

/// Repository for asset operations.
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Gets every asset, ordered by name ascending.
    async fn list_assets_by_name(&self) -> Result<Vec<Asset>>;

    /// Inserts a new asset and returns it with its assigned id.
    async fn create_asset(&self, asset: &NewAsset) -> Result<Asset>;
}

/// Repository for daily report operations.
#[async_trait]
pub trait DailyReportRepository: Send + Sync {
    /// Inserts a new daily report and returns it with its assigned id.
    ///
    /// The parent asset is not checked for existence.
    async fn create_daily_report(&self, report: &NewDailyReport) -> Result<DailyReport>;
}

/// Repository for well test operations.
#[async_trait]
pub trait WellsTestRepository: Send + Sync {
    /// Inserts a new well test and returns it with its assigned id.
    ///
    /// The parent daily report is not checked for existence.
    async fn create_wells_test(&self, test: &NewWellsTest) -> Result<WellsTest>;
}

/// A partition/row keyed table of schemaless records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Name of the table every operation targets.
    fn table_name(&self) -> &str;

    /// Upserts a record keyed by its partition and row keys.
    ///
    /// Whatever is currently stored under the same keys is overwritten.
    async fn insert_or_replace(&self, record: TableRecord) -> Result<()>;

    /// Gets every record whose property matches the filter.
    async fn retrieve_records(&self, filter: &FieldFilter) -> Result<Vec<TableRecord>>;
}
