use serde::{Deserialize, Serialize};

/// Date and value of the newest valid reading in a summary window.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct LatestWaterLevel {
    /// Rendered `dd-mm-YYYY`.
    pub date: String,
    pub level: Option<f64>,
}

/// Aggregate statistics for one analysis window.
///
/// Windows with no records, or no non-null readings, come back as a bare
/// `message` with every statistic absent. The summary cards render `N/A`
/// for each missing statistic rather than failing the whole view.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundwaterSummary {
    pub message: Option<String>,
    pub total_record_count: Option<u32>,
    pub valid_record_count: Option<u32>,
    pub latest_water_level: Option<LatestWaterLevel>,
    pub min_level: Option<f64>,
    pub max_level: Option<f64>,
    /// Mean of the valid readings, rounded to two decimals.
    pub average_level: Option<f64>,
    /// Newest minus oldest valid reading, rounded to two decimals.
    pub net_change: Option<f64>,
}

/// One point of the water level trend, oldest first.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Rendered `dd-mm-YYYY`.
    pub date: String,
    pub level: f64,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct TrendResponse {
    #[serde(default)]
    pub trend_data: Vec<TrendPoint>,
}

#[cfg(test)]
mod tests {
    use super::{GroundwaterSummary, TrendResponse};

    #[test]
    fn test_deserialize_full_summary() {
        let json = r#"{
            "total_record_count": 120,
            "valid_record_count": 118,
            "latest_water_level": {"date": "28-05-2024", "level": 6.1},
            "min_level": 2.35,
            "max_level": 11.8,
            "average_level": 6.02,
            "net_change": -0.43
        }"#;
        let summary: GroundwaterSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_record_count, Some(120));
        assert_eq!(summary.valid_record_count, Some(118));
        let latest = summary.latest_water_level.unwrap();
        assert_eq!(latest.date, "28-05-2024");
        assert_eq!(latest.level, Some(6.1));
        assert_eq!(summary.net_change, Some(-0.43));
        assert!(summary.message.is_none());
    }

    #[test]
    fn test_deserialize_message_only_summary() {
        let json = r#"{"message": "No records found for the given criteria."}"#;
        let summary: GroundwaterSummary = serde_json::from_str(json).unwrap();
        assert!(summary.message.is_some());
        assert!(summary.latest_water_level.is_none());
        assert!(summary.min_level.is_none());
        assert!(summary.average_level.is_none());
    }

    #[test]
    fn test_deserialize_trend() {
        let json = r#"{"trend_data": [
            {"date": "01-01-2024", "level": 4.5},
            {"date": "15-01-2024", "level": 4.9}
        ]}"#;
        let trend: TrendResponse = serde_json::from_str(json).unwrap();
        assert_eq!(trend.trend_data.len(), 2);
        assert_eq!(trend.trend_data[0].date, "01-01-2024");
        assert_eq!(trend.trend_data[1].level, 4.9);

        let empty: TrendResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.trend_data.is_empty());
    }
}
