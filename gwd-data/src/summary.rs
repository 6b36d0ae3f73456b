use chrono::NaiveDateTime;
use gwd_utils::dates::format_display_date;
use gwd_utils::numbers::round2;
use gwd_wris::observation::GroundwaterObservation;
use gwd_wris::summary::{GroundwaterSummary, LatestWaterLevel, TrendPoint, TrendResponse};

pub const NO_RECORDS_MESSAGE: &str = "No records found for the given criteria.";
pub const NO_VALID_RECORDS_MESSAGE: &str = "No valid water level data available for processing.";

struct ValidReading {
    at: NaiveDateTime,
    level: f64,
}

/// Readings with a non-null level and a parseable timestamp, oldest
/// first. The sort is stable, so same-instant readings keep their
/// upstream order.
fn valid_readings(records: &[GroundwaterObservation]) -> Vec<ValidReading> {
    let mut readings: Vec<ValidReading> = records
        .iter()
        .filter_map(|record| {
            let level = record.data_value?;
            let at = record.timestamp()?;
            Some(ValidReading { at, level })
        })
        .collect();
    readings.sort_by_key(|r| r.at);
    readings
}

/// Aggregate one window of observations into summary statistics.
///
/// Mirrors what the gateway serves: an empty window or a window with no
/// usable readings degrades to a bare message, everything else gets the
/// full set of statistics with levels rounded to two decimals where
/// they are derived rather than observed.
pub fn summarize(records: &[GroundwaterObservation]) -> GroundwaterSummary {
    if records.is_empty() {
        return GroundwaterSummary {
            message: Some(NO_RECORDS_MESSAGE.to_string()),
            ..Default::default()
        };
    }
    let readings = valid_readings(records);
    let (Some(first), Some(last)) = (readings.first(), readings.last()) else {
        return GroundwaterSummary {
            message: Some(NO_VALID_RECORDS_MESSAGE.to_string()),
            ..Default::default()
        };
    };

    let mut min = first.level;
    let mut max = first.level;
    let mut sum = 0.0;
    for reading in &readings {
        min = min.min(reading.level);
        max = max.max(reading.level);
        sum += reading.level;
    }

    GroundwaterSummary {
        message: None,
        total_record_count: Some(records.len() as u32),
        valid_record_count: Some(readings.len() as u32),
        latest_water_level: Some(LatestWaterLevel {
            date: format_display_date(&last.at.date()),
            level: Some(last.level),
        }),
        min_level: Some(min),
        max_level: Some(max),
        average_level: Some(round2(sum / readings.len() as f64)),
        net_change: Some(round2(last.level - first.level)),
    }
}

/// The chronological level series for the trend chart.
pub fn trend_of(records: &[GroundwaterObservation]) -> TrendResponse {
    let trend_data = valid_readings(records)
        .into_iter()
        .map(|reading| TrendPoint {
            date: format_display_date(&reading.at.date()),
            level: reading.level,
        })
        .collect();
    TrendResponse { trend_data }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(time: &str, value: Option<f64>) -> GroundwaterObservation {
        GroundwaterObservation {
            data_time: Some(time.to_string()),
            data_value: value,
            ..Default::default()
        }
    }

    fn sample_window() -> Vec<GroundwaterObservation> {
        vec![
            obs("2024-03-10T00:00:00", Some(5.0)),
            obs("2024-01-05T06:00:00", Some(2.5)),
            obs("2024-06-20T12:00:00", Some(4.25)),
            obs("2024-02-01T00:00:00", None),
        ]
    }

    #[test]
    fn test_summarize_window() {
        let summary = summarize(&sample_window());
        assert!(summary.message.is_none());
        assert_eq!(summary.total_record_count, Some(4));
        assert_eq!(summary.valid_record_count, Some(3));
        let latest = summary.latest_water_level.unwrap();
        assert_eq!(latest.date, "20-06-2024");
        assert_eq!(latest.level, Some(4.25));
        assert_eq!(summary.min_level, Some(2.5));
        assert_eq!(summary.max_level, Some(5.0));
        assert_eq!(summary.average_level, Some(3.92));
        assert_eq!(summary.net_change, Some(1.75));
    }

    #[test]
    fn test_summarize_empty_window() {
        let summary = summarize(&[]);
        assert_eq!(summary.message.as_deref(), Some(NO_RECORDS_MESSAGE));
        assert!(summary.total_record_count.is_none());
        assert!(summary.latest_water_level.is_none());
    }

    #[test]
    fn test_summarize_window_without_usable_readings() {
        let records = vec![
            obs("2024-01-01T00:00:00", None),
            obs("2024-01-02T00:00:00", None),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.message.as_deref(), Some(NO_VALID_RECORDS_MESSAGE));
        assert!(summary.min_level.is_none());
    }

    #[test]
    fn test_summarize_skips_unparseable_timestamps() {
        let records = vec![
            obs("garbage", Some(99.0)),
            obs("2024-01-05T06:00:00", Some(2.0)),
            obs("2024-03-05T06:00:00", Some(3.0)),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total_record_count, Some(3));
        assert_eq!(summary.valid_record_count, Some(2));
        assert_eq!(summary.max_level, Some(3.0));
        assert_eq!(summary.net_change, Some(1.0));
    }

    #[test]
    fn test_net_change_can_be_negative() {
        let records = vec![
            obs("2024-01-01T00:00:00", Some(8.4)),
            obs("2024-05-01T00:00:00", Some(6.15)),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.net_change, Some(-2.25));
        let latest = summary.latest_water_level.unwrap();
        assert_eq!(latest.date, "01-05-2024");
    }

    #[test]
    fn test_trend_is_chronological() {
        let trend = trend_of(&sample_window());
        let dates: Vec<&str> = trend.trend_data.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["05-01-2024", "10-03-2024", "20-06-2024"]);
        let levels: Vec<f64> = trend.trend_data.iter().map(|p| p.level).collect();
        assert_eq!(levels, vec![2.5, 5.0, 4.25]);
    }

    #[test]
    fn test_trend_of_empty_window() {
        assert!(trend_of(&[]).trend_data.is_empty());
        let null_only = vec![obs("2024-01-01T00:00:00", None)];
        assert!(trend_of(&null_only).trend_data.is_empty());
    }
}
