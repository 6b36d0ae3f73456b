use chrono::NaiveDateTime;
use gwd_utils::dates;
use serde::{Deserialize, Serialize};

/// One monitoring station as served by the all-stations endpoint.
///
/// Snapshots always carry an identity; position and the latest reading
/// can both be missing, for stations that have never reported a usable
/// record. State and district default to empty when the endpoint omits
/// them.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct LiveStation {
    #[serde(alias = "stationCode")]
    pub station_code: String,
    #[serde(alias = "stationName")]
    pub station_name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Most recent water level in metres below ground level.
    #[serde(alias = "latestLevel", default)]
    pub latest_level: Option<f64>,
    /// ISO timestamp of the most recent reading.
    #[serde(alias = "latestDate", default)]
    pub latest_date: Option<String>,
}

impl LiveStation {
    pub fn latest_timestamp(&self) -> Option<NaiveDateTime> {
        self.latest_date
            .as_deref()
            .and_then(|s| dates::parse_timestamp(s).ok())
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
