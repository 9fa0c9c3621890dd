//! Request payloads for the relational endpoints.
//!
//! Identifiers present in a request body are accepted and ignored; the store
//! assigns them on insert. Parent identifiers are taken from the URL path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Asset, DailyReport, WellsTest};

/// Request payload for creating an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAsset {
    pub asset_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl NewAsset {
    /// Create a new request with just a name.
    pub fn new(asset_name: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            asset_type: None,
            location: None,
        }
    }

    /// Set the asset type.
    pub fn with_asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type.into());
        self
    }

    /// Combine with a store-assigned id.
    pub fn into_asset(self, asset_id: i64) -> Asset {
        Asset {
            asset_id,
            asset_name: self.asset_name,
            asset_type: self.asset_type,
            location: self.location,
        }
    }
}

/// Request payload for creating a daily report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDailyReport {
    #[serde(rename = "asset_Id", default)]
    pub asset_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NewDailyReport {
    /// Overwrite the parent asset, whatever the body said.
    pub fn for_asset(mut self, asset_id: i64) -> Self {
        self.asset_id = asset_id;
        self
    }

    /// Combine with a store-assigned id.
    pub fn into_daily_report(self, dailyreport_id: i64) -> DailyReport {
        DailyReport {
            dailyreport_id,
            asset_id: self.asset_id,
            report_date: self.report_date,
            comment: self.comment,
        }
    }
}

/// Request payload for creating a well test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWellsTest {
    #[serde(rename = "dailyreport_Id", default)]
    pub dailyreport_id: i64,
    pub well_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_rate: Option<f64>,
}

impl NewWellsTest {
    /// Overwrite the parent daily report, whatever the body said.
    pub fn for_daily_report(mut self, dailyreport_id: i64) -> Self {
        self.dailyreport_id = dailyreport_id;
        self
    }

    /// Combine with a store-assigned id.
    pub fn into_wells_test(self, wellstest_id: i64) -> WellsTest {
        WellsTest {
            wellstest_id,
            dailyreport_id: self.dailyreport_id,
            well_name: self.well_name,
            oil_rate: self.oil_rate,
            water_rate: self.water_rate,
            gas_rate: self.gas_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_asset_ignores_body_id() {
        let json = r#"{"asset_Id": 99, "asset_name": "Troll B"}"#;

        let request: NewAsset = serde_json::from_str(json).unwrap();
        let asset = request.into_asset(1);

        assert_eq!(asset.asset_id, 1);
        assert_eq!(asset.asset_name, "Troll B");
    }

    #[test]
    fn test_new_asset_requires_name() {
        let result: Result<NewAsset, _> = serde_json::from_str(r#"{"asset_type": "field"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_daily_report_parent_comes_from_path() {
        let json = r#"{"asset_Id": 42, "comment": "normal operations"}"#;

        let request: NewDailyReport = serde_json::from_str(json).unwrap();
        let report = request.for_asset(7).into_daily_report(5);

        assert_eq!(report.asset_id, 7);
        assert_eq!(report.dailyreport_id, 5);
        assert_eq!(report.comment.as_deref(), Some("normal operations"));
    }

    #[test]
    fn test_daily_report_without_parent_in_body() {
        let request: NewDailyReport = serde_json::from_str("{}").unwrap();
        assert_eq!(request.for_asset(3).asset_id, 3);
    }

    #[test]
    fn test_wells_test_parent_comes_from_path() {
        let json = r#"{"dailyreport_Id": 1, "well_name": "C-4H", "oil_rate": 812.5}"#;

        let request: NewWellsTest = serde_json::from_str(json).unwrap();
        let test = request.for_daily_report(11).into_wells_test(2);

        assert_eq!(test.dailyreport_id, 11);
        assert_eq!(test.oil_rate, Some(812.5));
    }
}
