//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::NaiveDate;
use rusqlite::Row;

use rpa_functions_core::assets::Asset;

/// Convert a SQLite row to an Asset.
///
/// Expected columns: asset_id, asset_name, asset_type, location
pub fn row_to_asset(row: &Row) -> rusqlite::Result<Asset> {
    Ok(Asset {
        asset_id: row.get(0)?,
        asset_name: row.get(1)?,
        asset_type: row.get(2)?,
        location: row.get(3)?,
    })
}

/// Format an optional NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_optional_date(date: Option<&NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_optional_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

        assert_eq!(
            format_optional_date(Some(&date)),
            Some("2024-02-29".to_string())
        );
        assert_eq!(format_optional_date(None), None);
    }

    #[test]
    fn test_row_to_asset() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();

        let asset = conn
            .query_row(
                "SELECT 4, 'Heidrun', 'platform', NULL",
                [],
                row_to_asset,
            )
            .unwrap();

        assert_eq!(asset.asset_id, 4);
        assert_eq!(asset.asset_name, "Heidrun");
        assert_eq!(asset.asset_type.as_deref(), Some("platform"));
        assert_eq!(asset.location, None);
    }
}
