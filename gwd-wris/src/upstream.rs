use std::{thread::sleep, time::Duration};

use log::{info, warn};
use reqwest::{Client, StatusCode};

use crate::observation::GroundwaterResponse;
use crate::query::AnalysisQuery;

/// The WRIS dataset endpoint. The space in the path is real; reqwest
/// percent-encodes it on the way out.
pub const WRIS_DATASET_URL: &str = "https://indiawris.gov.in/Dataset/Ground Water Level";

/// Monitoring agency whose wells the sweep covers.
pub const WRIS_AGENCY: &str = "CGWB";

const WRIS_PAGE_SIZE: u32 = 1000;
const WRIS_TIMEOUT_SECS: u64 = 30;

/// Fetch one district's observations straight from WRIS, with retry and
/// exponential backoff.
///
/// The dataset takes its filters as query string parameters on a POST
/// with an empty body. Returns `None` once every attempt has failed; the
/// sweep treats that as a district to skip, not a fatal error.
pub async fn fetch_groundwater_levels(
    client: &Client,
    query: &AnalysisQuery,
) -> Option<GroundwaterResponse> {
    let max_tries = 3;
    let mut sleep_millis: u64 = 1000;
    let params = [
        ("agencyName", WRIS_AGENCY.to_string()),
        ("stateName", query.state_name.clone()),
        ("districtName", query.district_name.clone()),
        ("startdate", query.start_date.clone()),
        ("enddate", query.end_date.clone()),
        ("download", "false".to_string()),
        ("page", "0".to_string()),
        ("size", WRIS_PAGE_SIZE.to_string()),
    ];
    let district = format!("{}, {}", query.district_name, query.state_name);

    for attempt in 1..=max_tries {
        let request = client
            .post(WRIS_DATASET_URL)
            .query(&params)
            .timeout(Duration::from_secs(WRIS_TIMEOUT_SECS));

        match request.send().await {
            Ok(response) => {
                if response.status() != StatusCode::OK {
                    warn!(
                        "Attempt {}/{}: Bad response status for {}: {}",
                        attempt,
                        max_tries,
                        district,
                        response.status()
                    );
                } else {
                    match response.json::<GroundwaterResponse>().await {
                        Ok(body) => return Some(body),
                        Err(e) => {
                            warn!(
                                "Attempt {}/{}: Failed to decode response for {}: {}",
                                attempt, max_tries, district, e
                            );
                        }
                    }
                }
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{}: Request failed for {}: {}",
                    attempt, max_tries, district, e
                );
            }
        }

        if attempt < max_tries {
            info!(
                "Sleeping for {} milliseconds before retry for {}",
                sleep_millis, district
            );
            sleep(Duration::from_millis(sleep_millis));
            sleep_millis *= 2;
        }
    }

    warn!("All attempts failed for {}", district);
    None
}
