//! Shared utility functions for GWD crates.

/// Date and timestamp helpers
pub mod dates {
    use anyhow::anyhow;
    use chrono::{Local, Months, NaiveDate, NaiveDateTime};

    /// Wire format used by the analysis endpoints and the date pickers.
    pub const ISO_DATE_FMT: &str = "%Y-%m-%d";
    /// Human-facing format used by the summary cards.
    pub const DISPLAY_DATE_FMT: &str = "%d-%m-%Y";

    pub fn parse_iso_date(s: &str) -> anyhow::Result<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), ISO_DATE_FMT)
            .map_err(|e| anyhow!("invalid date {s:?}: {e}"))
    }

    pub fn format_iso_date(date: &NaiveDate) -> String {
        date.format(ISO_DATE_FMT).to_string()
    }

    pub fn format_display_date(date: &NaiveDate) -> String {
        date.format(DISPLAY_DATE_FMT).to_string()
    }

    /// Station timestamps arrive in several shapes depending on the upstream
    /// batch: `2024-06-01T04:30:00`, `2024-06-01 04:30:00`, with or without
    /// fractional seconds, or occasionally a bare date.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim();
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(dt);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, ISO_DATE_FMT) {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(dt);
            }
        }
        Err(anyhow!("unrecognized timestamp {s:?}"))
    }

    /// Default analysis window: one year back from today, inclusive.
    pub fn default_analysis_range() -> (NaiveDate, NaiveDate) {
        let today = Local::now().naive_local().date();
        let start = today
            .checked_sub_months(Months::new(12))
            .unwrap_or(today);
        (start, today)
    }
}

/// Numeric helpers
pub mod numbers {
    /// Round to two decimal places, the precision every derived level uses.
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::dates::*;
    use super::numbers::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("2024-06-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert!(parse_iso_date("15-06-2024").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn test_parse_iso_date_trims_whitespace() {
        let date = parse_iso_date(" 2024-01-02 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 9).unwrap();
        assert_eq!(format_iso_date(&date), "2023-01-09");
        assert_eq!(parse_iso_date(&format_iso_date(&date)).unwrap(), date);
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 9).unwrap();
        assert_eq!(format_display_date(&date), "09-01-2023");
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        for s in [
            "2024-06-01T04:30:00",
            "2024-06-01 04:30:00",
            "2024-06-01T04:30:00.500",
            "2024-06-01",
        ] {
            let dt = parse_timestamp(s).unwrap();
            assert_eq!(dt.date(), expected_date, "input {s:?}");
        }
        let dt = parse_timestamp("2024-06-01T04:30:00").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (4, 30));
        let dt = parse_timestamp("2024-06-01").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
        assert!(parse_timestamp("01/06/2024").is_err());
    }

    #[test]
    fn test_default_analysis_range_spans_a_year() {
        let (start, end) = default_analysis_range();
        assert!(start < end);
        assert_eq!(end.year() - start.year(), 1);
        assert_eq!(start.month(), end.month());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.6789), 2.68);
        assert_eq!(round2(-4.3621), -4.36);
        assert_eq!(round2(10.0), 10.0);
    }
}
