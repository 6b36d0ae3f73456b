//! All-India station sweep: walk every district in the location directory
//! and keep the newest usable reading per station.
//!
//! This is the batch half of the live map. The gateway's all-stations
//! endpoint serves whatever the most recent sweep produced.

use std::collections::HashMap;

use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveDateTime};
use gwd_wris::locations::LocationDirectory;
use gwd_wris::observation::GroundwaterObservation;
use gwd_wris::query::AnalysisQuery;
use gwd_wris::station::LiveStation;
use gwd_wris::upstream;
use log::{info, warn};

/// Run the full sweep and write the per-station snapshot CSV.
///
/// Districts that fail or come back empty are logged and skipped; a
/// sweep only aborts when the location directory itself cannot be
/// fetched or the output cannot be written.
pub async fn run_sweep(stations_csv: &str) -> anyhow::Result<()> {
    info!("Starting data fetch for all stations...");

    let client = reqwest::Client::new();
    let directory = LocationDirectory::fetch(&client)
        .await
        .context("Failed to fetch location list")?;

    // A wide recent window, so sparsely reporting wells still surface
    let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end_date = Local::now().naive_local().date();

    let mut latest: HashMap<String, (NaiveDateTime, LiveStation)> = HashMap::new();
    let total_states = directory.states.len();

    for (i, entry) in directory.states.iter().enumerate() {
        for district in &entry.districts {
            info!(
                "Fetching data for {}, {} ({}/{})...",
                district,
                entry.state,
                i + 1,
                total_states
            );

            let query = AnalysisQuery::new(&entry.state, district, &start_date, &end_date);
            let Some(response) = upstream::fetch_groundwater_levels(&client, &query).await
            else {
                warn!("Could not fetch data for {}", district);
                continue;
            };

            let records = response.into_records();
            if records.is_empty() {
                warn!("No data returned for {}", district);
                continue;
            }

            retain_newest(&mut latest, &records, &entry.state, district);

            // Be polite to the WRIS server
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        }
    }

    let mut stations: Vec<LiveStation> = latest.into_values().map(|(_, s)| s).collect();
    stations.sort_by(|a, b| a.station_code.cmp(&b.station_code));

    write_stations_csv(stations_csv, &stations)
        .with_context(|| format!("Failed to write stations to {}", stations_csv))?;

    info!(
        "Sweep complete. {} stations written to {}",
        stations.len(),
        stations_csv
    );
    Ok(())
}

/// Fold one district's records into the per-station latest map.
///
/// A record only counts when it carries a station code, both coordinates
/// and a parseable timestamp. Newer readings replace older ones; ties
/// keep the record seen first. Records missing their own state or
/// district inherit the swept location.
fn retain_newest(
    latest: &mut HashMap<String, (NaiveDateTime, LiveStation)>,
    records: &[GroundwaterObservation],
    state: &str,
    district: &str,
) {
    for record in records {
        let Some(code) = record.station_code.as_deref().filter(|c| !c.is_empty()) else {
            continue;
        };
        let (Some(latitude), Some(longitude)) = (record.latitude, record.longitude) else {
            continue;
        };
        let Some(at) = record.timestamp() else {
            continue;
        };

        if let Some((seen, _)) = latest.get(code) {
            if at <= *seen {
                continue;
            }
        }

        let station = LiveStation {
            station_code: code.to_string(),
            station_name: record.display_name().to_string(),
            state: record.state.clone().unwrap_or_else(|| state.to_string()),
            district: record
                .district
                .clone()
                .unwrap_or_else(|| district.to_string()),
            latitude: Some(latitude),
            longitude: Some(longitude),
            latest_level: record.data_value,
            latest_date: Some(at.format("%Y-%m-%dT%H:%M:%S").to_string()),
        };
        latest.insert(station.station_code.clone(), (at, station));
    }
}

fn write_stations_csv(path: &str, stations: &[LiveStation]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for station in stations {
        writer.serialize(station)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::retain_newest;
    use gwd_wris::observation::GroundwaterObservation;
    use std::collections::HashMap;

    fn record(code: &str, time: &str, level: Option<f64>) -> GroundwaterObservation {
        GroundwaterObservation {
            station_code: Some(code.to_string()),
            station_name: Some(format!("{} Well", code)),
            latitude: Some(21.15),
            longitude: Some(79.09),
            data_time: Some(time.to_string()),
            data_value: level,
            ..Default::default()
        }
    }

    #[test]
    fn test_newest_reading_wins() {
        let mut latest = HashMap::new();
        let records = vec![
            record("W1", "2024-03-01T06:00:00", Some(4.0)),
            record("W1", "2024-05-01T06:00:00", Some(6.5)),
            record("W1", "2024-04-01T06:00:00", Some(5.0)),
        ];
        retain_newest(&mut latest, &records, "Maharashtra", "Nagpur");
        assert_eq!(latest.len(), 1);
        let (_, station) = &latest["W1"];
        assert_eq!(station.latest_level, Some(6.5));
        assert_eq!(station.latest_date.as_deref(), Some("2024-05-01T06:00:00"));
        assert_eq!(station.station_name, "W1 Well");
    }

    #[test]
    fn test_tie_keeps_first_record() {
        let mut latest = HashMap::new();
        let records = vec![
            record("W6", "2024-01-01T00:00:00", Some(1.0)),
            record("W6", "2024-01-01T00:00:00", Some(9.0)),
        ];
        retain_newest(&mut latest, &records, "Maharashtra", "Nagpur");
        let (_, station) = &latest["W6"];
        assert_eq!(station.latest_level, Some(1.0));
    }

    #[test]
    fn test_unusable_records_are_skipped() {
        let mut latest = HashMap::new();
        let mut no_code = record("", "2024-01-01T00:00:00", Some(1.0));
        no_code.station_code = None;
        let empty_code = record("", "2024-01-01T00:00:00", Some(1.0));
        let mut no_coords = record("W2", "2024-01-01T00:00:00", Some(1.0));
        no_coords.longitude = None;
        let bad_date = record("W3", "yesterday", Some(1.0));
        let good = record("W4", "2024-01-01T00:00:00", None);

        retain_newest(
            &mut latest,
            &[no_code, empty_code, no_coords, bad_date, good],
            "Bihar",
            "Gaya",
        );

        // A null level is usable; only identity, position and time gate entry
        assert_eq!(latest.len(), 1);
        let (_, station) = &latest["W4"];
        assert_eq!(station.latest_level, None);
    }

    #[test]
    fn test_query_context_fills_missing_location() {
        let mut latest = HashMap::new();
        let records = vec![record("W5", "2024-02-02T00:00:00", Some(3.3))];
        retain_newest(&mut latest, &records, "Odisha", "Puri");
        let (_, station) = &latest["W5"];
        assert_eq!(station.state, "Odisha");
        assert_eq!(station.district, "Puri");
    }

    #[test]
    fn test_record_location_wins_over_query_context() {
        let mut latest = HashMap::new();
        let mut rec = record("W7", "2024-02-02T00:00:00", Some(3.0));
        rec.state = Some("Gujarat".to_string());
        rec.district = Some("Rajkot".to_string());
        retain_newest(&mut latest, &[rec], "Odisha", "Puri");
        let (_, station) = &latest["W7"];
        assert_eq!(station.state, "Gujarat");
        assert_eq!(station.district, "Rajkot");
    }
}
