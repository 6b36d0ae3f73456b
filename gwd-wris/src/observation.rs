use chrono::NaiveDateTime;
use gwd_utils::dates;
use serde::{Deserialize, Serialize};

/// One groundwater level reading as returned by the WRIS dataset.
///
/// Upstream is inconsistent about casing between dataset exports, so the
/// snake_case spellings are accepted as aliases. Nearly every field can be
/// absent or null in real batches; only `dataTime` is reliably present.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct GroundwaterObservation {
    #[serde(rename = "stationCode", alias = "station_code", default)]
    pub station_code: Option<String>,
    #[serde(rename = "stationName", alias = "station_name", default)]
    pub station_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    /// Decimal degrees north.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Decimal degrees east.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Observation timestamp, ISO-ish (`2024-06-01T04:30:00`).
    #[serde(rename = "dataTime", alias = "data_time", default)]
    pub data_time: Option<String>,
    /// Water level in metres below ground level; null for failed readings.
    #[serde(rename = "dataValue", alias = "data_value", default)]
    pub data_value: Option<f64>,
}

impl GroundwaterObservation {
    /// Station name for display and grouping, `"N/A"` when upstream
    /// omitted it.
    pub fn display_name(&self) -> &str {
        self.station_name.as_deref().unwrap_or("N/A")
    }

    /// Parsed observation timestamp, if present and well formed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.data_time
            .as_deref()
            .and_then(|s| dates::parse_timestamp(s).ok())
    }

    /// Observation date rendered `dd-mm-YYYY` for table rows.
    pub fn display_date(&self) -> Option<String> {
        self.timestamp().map(|t| dates::format_display_date(&t.date()))
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Envelope around the raw observation list.
///
/// A missing or empty `data` array means the query matched nothing; the
/// upstream then usually carries an explanatory `message` instead.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct GroundwaterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<GroundwaterObservation>>,
}

impl GroundwaterResponse {
    pub fn records(&self) -> &[GroundwaterObservation] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn into_records(self) -> Vec<GroundwaterObservation> {
        self.data.unwrap_or_default()
    }
}
