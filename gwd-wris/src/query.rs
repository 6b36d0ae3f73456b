use chrono::NaiveDate;
use gwd_utils::dates;
use serde::{Deserialize, Serialize};

/// Request body shared by the three analysis endpoints.
///
/// The WRIS dataset matches locations case-sensitively against upper-case
/// names, so the constructor upper-cases both. Field spellings are the
/// exact wire names, including the lower-case date keys.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AnalysisQuery {
    #[serde(rename = "stateName")]
    pub state_name: String,
    #[serde(rename = "districtName")]
    pub district_name: String,
    #[serde(rename = "startdate")]
    pub start_date: String,
    #[serde(rename = "enddate")]
    pub end_date: String,
}

impl AnalysisQuery {
    pub fn new(state: &str, district: &str, start: &NaiveDate, end: &NaiveDate) -> Self {
        AnalysisQuery {
            state_name: state.to_uppercase(),
            district_name: district.to_uppercase(),
            start_date: dates::format_iso_date(start),
            end_date: dates::format_iso_date(end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisQuery;
    use chrono::NaiveDate;

    #[test]
    fn test_new_uppercases_location() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let query = AnalysisQuery::new("Tamil Nadu", "Chennai", &start, &end);
        assert_eq!(query.state_name, "TAMIL NADU");
        assert_eq!(query.district_name, "CHENNAI");
        assert_eq!(query.start_date, "2023-06-01");
        assert_eq!(query.end_date, "2024-06-01");
    }

    #[test]
    fn test_wire_field_names() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let query = AnalysisQuery::new("Goa", "North Goa", &start, &end);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["stateName"], "GOA");
        assert_eq!(json["districtName"], "NORTH GOA");
        assert_eq!(json["startdate"], "2023-01-01");
        assert_eq!(json["enddate"], "2023-12-31");
    }
}
