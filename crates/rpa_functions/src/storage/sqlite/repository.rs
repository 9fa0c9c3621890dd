//! SQLite repository implementation.
//!
//! Implements the relational repository traits from `rpa_functions_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use rpa_functions_core::assets::{
    Asset, DailyReport, NewAsset, NewDailyReport, NewWellsTest, WellsTest,
};
use rpa_functions_core::storage::{
    AssetRepository, DailyReportRepository, RepositoryError, Result, WellsTestRepository,
};

use super::conversions::{format_optional_date, row_to_asset};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Identifiers are assigned by SQLite and read back with `last_insert_rowid`.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// AssetRepository implementation
// ============================================================================

#[async_trait]
impl AssetRepository for SqliteRepository {
    async fn list_assets_by_name(&self) -> Result<Vec<Asset>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ASSETS_ORDERED_BY_NAME)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_asset).map_err(wrap_err)?;

                let mut assets = Vec::new();
                for row_result in rows {
                    assets.push(row_result.map_err(wrap_err)?);
                }
                Ok(assets)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "assets"))
    }

    async fn create_asset(&self, asset: &NewAsset) -> Result<Asset> {
        let new_asset = asset.clone();

        let asset_id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ASSET,
                    rusqlite::params![
                        new_asset.asset_name,
                        new_asset.asset_type,
                        new_asset.location
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "assets"))?;

        Ok(asset.clone().into_asset(asset_id))
    }
}

// ============================================================================
// DailyReportRepository implementation
// ============================================================================

#[async_trait]
impl DailyReportRepository for SqliteRepository {
    async fn create_daily_report(&self, report: &NewDailyReport) -> Result<DailyReport> {
        let asset_id = report.asset_id;
        let report_date = format_optional_date(report.report_date.as_ref());
        let comment = report.comment.clone();

        let dailyreport_id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_DAILY_REPORT,
                    rusqlite::params![asset_id, report_date, comment],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "daily_reports"))?;

        Ok(report.clone().into_daily_report(dailyreport_id))
    }
}

// ============================================================================
// WellsTestRepository implementation
// ============================================================================

#[async_trait]
impl WellsTestRepository for SqliteRepository {
    async fn create_wells_test(&self, test: &NewWellsTest) -> Result<WellsTest> {
        let new_test = test.clone();

        let wellstest_id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_WELLS_TEST,
                    rusqlite::params![
                        new_test.dailyreport_id,
                        new_test.well_name,
                        new_test.oil_rate,
                        new_test.water_rate,
                        new_test.gas_rate
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "wells_tests"))?;

        Ok(test.clone().into_wells_test(wellstest_id))
    }
}
