//! Single-district query: fetch one analysis window from WRIS and report it.

use anyhow::Context;
use gwd_data::summary::{summarize, trend_of};
use gwd_utils::dates;
use gwd_wris::observation::GroundwaterObservation;
use gwd_wris::query::AnalysisQuery;
use gwd_wris::upstream;
use log::info;

/// Run a one-district groundwater query.
///
/// Fetches the observation window straight from the WRIS dataset, prints
/// the same statistics the dashboard cards show, and optionally writes
/// the raw observations to CSV under their wire column names.
pub async fn run_query(
    state: &str,
    district: &str,
    start: Option<&str>,
    end: Option<&str>,
    observations_csv: Option<&str>,
) -> anyhow::Result<()> {
    let (default_start, default_end) = dates::default_analysis_range();
    let start_date = match start {
        Some(s) => dates::parse_iso_date(s)?,
        None => default_start,
    };
    let end_date = match end {
        Some(s) => dates::parse_iso_date(s)?,
        None => default_end,
    };

    let client = reqwest::Client::new();
    let query = AnalysisQuery::new(state, district, &start_date, &end_date);

    info!(
        "Querying groundwater levels for {}, {} from {} to {}",
        query.district_name, query.state_name, query.start_date, query.end_date
    );

    let Some(response) = upstream::fetch_groundwater_levels(&client, &query).await else {
        anyhow::bail!("Failed to fetch data from WRIS API after multiple attempts");
    };
    let records = response.into_records();

    print_summary(&records);

    if let Some(path) = observations_csv {
        write_observations_csv(path, &records)
            .with_context(|| format!("Failed to write observations to {}", path))?;
        info!("{} observations written to {}", records.len(), path);
    }

    Ok(())
}

/// Print the window statistics in the shape the dashboard cards use.
fn print_summary(records: &[GroundwaterObservation]) {
    let summary = summarize(records);
    if let Some(message) = &summary.message {
        println!("{}", message);
        return;
    }

    println!(
        "Records:       {} fetched, {} with usable levels",
        count(summary.total_record_count),
        count(summary.valid_record_count)
    );
    if let Some(latest) = &summary.latest_water_level {
        println!("Latest level:  {} on {}", level(latest.level), latest.date);
    }
    println!("Min level:     {}", level(summary.min_level));
    println!("Max level:     {}", level(summary.max_level));
    println!("Average level: {}", level(summary.average_level));
    println!("Net change:    {}", level(summary.net_change));

    let trend = trend_of(records);
    println!("Trend points:  {}", trend.trend_data.len());
}

fn count(value: Option<u32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn level(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{:.2} m", v))
}

fn write_observations_csv(
    path: &str,
    records: &[GroundwaterObservation],
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
