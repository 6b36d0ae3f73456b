use gwd_wris::station::LiveStation;

use crate::markers::LevelBounds;

/// Bounds of the latest levels across all reporting stations.
///
/// `None` when no station has a non-null level, so a cycle of silent
/// wells clears the previous range instead of leaving it stale.
pub fn live_level_bounds(stations: &[LiveStation]) -> Option<LevelBounds> {
    let mut levels = stations.iter().filter_map(|s| s.latest_level);
    let first = levels.next()?;
    let (min, max) = levels.fold((first, first), |(min, max), level| {
        (min.min(level), max.max(level))
    });
    Some(LevelBounds::new(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(code: &str, latest_level: Option<f64>) -> LiveStation {
        LiveStation {
            station_code: code.to_string(),
            station_name: format!("Station {code}"),
            latitude: Some(20.0),
            longitude: Some(77.0),
            latest_level,
            ..Default::default()
        }
    }

    #[test]
    fn test_bounds_over_reporting_stations() {
        let stations = vec![
            station("W1", Some(4.5)),
            station("W2", None),
            station("W3", Some(12.0)),
            station("W4", Some(1.25)),
        ];
        let bounds = live_level_bounds(&stations).unwrap();
        assert_eq!(bounds.min, Some(1.25));
        assert_eq!(bounds.max, Some(12.0));
    }

    #[test]
    fn test_single_reporting_station_collapses_bounds() {
        let stations = vec![station("W1", Some(6.0)), station("W2", None)];
        let bounds = live_level_bounds(&stations).unwrap();
        assert_eq!(bounds.min, Some(6.0));
        assert_eq!(bounds.max, Some(6.0));
    }

    #[test]
    fn test_no_reporting_stations_yields_none() {
        assert!(live_level_bounds(&[]).is_none());
        let silent = vec![station("W1", None), station("W2", None)];
        assert!(live_level_bounds(&silent).is_none());
    }
}
