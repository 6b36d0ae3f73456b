use gwd_utils::numbers::round2;
use gwd_wris::observation::GroundwaterObservation;
use serde::Serialize;

/// Mean water level of one station over the analysed window, for the
/// station bar chart.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct StationAverage {
    pub name: String,
    #[serde(rename = "avgLevel")]
    pub avg_level: f64,
}

/// Average the non-null readings of each station, rounded to two
/// decimals.
///
/// Stations appear in first-observation order; stations whose readings
/// are all null do not appear at all. Districts rarely exceed a few
/// dozen stations, so the linear lookup is fine.
pub fn station_averages(observations: &[GroundwaterObservation]) -> Vec<StationAverage> {
    let mut sums: Vec<(String, f64, u32)> = Vec::new();
    for obs in observations {
        let Some(level) = obs.data_value else {
            continue;
        };
        let name = obs.display_name();
        match sums.iter_mut().find(|(n, _, _)| n == name) {
            Some((_, sum, count)) => {
                *sum += level;
                *count += 1;
            }
            None => sums.push((name.to_string(), level, 1)),
        }
    }
    sums.into_iter()
        .map(|(name, sum, count)| StationAverage {
            name,
            avg_level: round2(sum / count as f64),
        })
        .collect()
}
