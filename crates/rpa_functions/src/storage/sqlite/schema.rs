//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
///
/// Foreign keys are declared but not enforced. Bundled SQLite turns
/// `foreign_keys` on by default, so the batch switches it off first; a daily
/// report may name an asset that was never created.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = OFF;

-- Assets table
CREATE TABLE IF NOT EXISTS assets (
    asset_id INTEGER PRIMARY KEY AUTOINCREMENT,
    asset_name TEXT NOT NULL,
    asset_type TEXT,
    location TEXT
);

-- Daily reports table
CREATE TABLE IF NOT EXISTS daily_reports (
    dailyreport_id INTEGER PRIMARY KEY AUTOINCREMENT,
    asset_id INTEGER NOT NULL,
    report_date TEXT,
    comment TEXT,
    FOREIGN KEY (asset_id) REFERENCES assets(asset_id)
);

-- Well tests table
CREATE TABLE IF NOT EXISTS wells_tests (
    wellstest_id INTEGER PRIMARY KEY AUTOINCREMENT,
    dailyreport_id INTEGER NOT NULL,
    well_name TEXT NOT NULL,
    oil_rate REAL,
    water_rate REAL,
    gas_rate REAL,
    FOREIGN KEY (dailyreport_id) REFERENCES daily_reports(dailyreport_id)
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_assets_name ON assets(asset_name);
CREATE INDEX IF NOT EXISTS idx_daily_reports_asset_id ON daily_reports(asset_id);
CREATE INDEX IF NOT EXISTS idx_wells_tests_dailyreport_id ON wells_tests(dailyreport_id);
"#;

// Asset queries
pub const INSERT_ASSET: &str = r#"
INSERT INTO assets (asset_name, asset_type, location)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ASSETS_ORDERED_BY_NAME: &str = r#"
SELECT asset_id, asset_name, asset_type, location
FROM assets
ORDER BY asset_name ASC
"#;

// Daily report queries
pub const INSERT_DAILY_REPORT: &str = r#"
INSERT INTO daily_reports (asset_id, report_date, comment)
VALUES (?1, ?2, ?3)
"#;

// Well test queries
pub const INSERT_WELLS_TEST: &str = r#"
INSERT INTO wells_tests (dailyreport_id, well_name, oil_rate, water_rate, gas_rate)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        // Verify the SQL contains expected table names
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS assets"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS daily_reports"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS wells_tests"));
    }

    #[test]
    fn test_foreign_keys_switched_off_before_tables() {
        let pragma = CREATE_TABLES.find("PRAGMA foreign_keys = OFF;").unwrap();
        let first_table = CREATE_TABLES.find("CREATE TABLE").unwrap();
        assert!(pragma < first_table);
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_ASSET.contains("INSERT"));
        assert!(SELECT_ASSETS_ORDERED_BY_NAME.contains("ORDER BY asset_name ASC"));
        assert!(INSERT_DAILY_REPORT.contains("INSERT"));
        assert!(INSERT_WELLS_TEST.contains("INSERT"));
    }
}
