use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A production asset (field, platform or plant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "asset_Id")]
    pub asset_id: i64,
    pub asset_name: String,
    #[serde(default)]
    pub asset_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A daily report filed against an [`Asset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    #[serde(rename = "dailyreport_Id")]
    pub dailyreport_id: i64,
    #[serde(rename = "asset_Id")]
    pub asset_id: i64,
    #[serde(default)]
    pub report_date: Option<NaiveDate>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// A well test recorded as part of a [`DailyReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellsTest {
    #[serde(rename = "wellstest_Id")]
    pub wellstest_id: i64,
    #[serde(rename = "dailyreport_Id")]
    pub dailyreport_id: i64,
    pub well_name: String,
    #[serde(default)]
    pub oil_rate: Option<f64>,
    #[serde(default)]
    pub water_rate: Option<f64>,
    #[serde(default)]
    pub gas_rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_serializes_with_wire_field_names() {
        let asset = Asset {
            asset_id: 3,
            asset_name: "Gullfaks".to_string(),
            asset_type: Some("platform".to_string()),
            location: None,
        };

        let json = serde_json::to_value(&asset).unwrap();

        assert_eq!(json["asset_Id"], 3);
        assert_eq!(json["asset_name"], "Gullfaks");
        assert_eq!(json["asset_type"], "platform");
        assert!(json["location"].is_null());
    }

    #[test]
    fn test_daily_report_serializes_parent_id() {
        let report = DailyReport {
            dailyreport_id: 10,
            asset_id: 7,
            report_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            comment: None,
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["dailyreport_Id"], 10);
        assert_eq!(json["asset_Id"], 7);
        assert_eq!(json["report_date"], "2024-03-01");
    }

    #[test]
    fn test_wells_test_deserializes_without_rates() {
        let json = r#"{"wellstest_Id": 1, "dailyreport_Id": 2, "well_name": "A-12"}"#;

        let test: WellsTest = serde_json::from_str(json).unwrap();

        assert_eq!(test.well_name, "A-12");
        assert_eq!(test.oil_rate, None);
    }
}
