use gwd_wris::observation::GroundwaterObservation;
use gwd_wris::station::LiveStation;
use gwd_wris::summary::GroundwaterSummary;
use serde::Serialize;

/// Marker for stations without a usable level, and for windows where the
/// level range is degenerate.
pub const NEUTRAL_MARKER_COLOR: &str = "#8884d8";
/// Bottom third of the window's level range.
pub const LOW_MARKER_COLOR: &str = "#e74c3c";
/// Middle third.
pub const MID_MARKER_COLOR: &str = "#2ecc71";
/// Top third.
pub const HIGH_MARKER_COLOR: &str = "#3498db";

/// Centre of India; the wide default view before any analysis runs.
pub const INDIA_CENTER: (f64, f64) = (22.5937, 78.9629);
pub const COUNTRY_ZOOM: u8 = 4;
/// Zoom applied once an analysis pins the map to a district.
pub const DISTRICT_ZOOM: u8 = 9;

/// Level range a marker is classified against.
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize)]
pub struct LevelBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl LevelBounds {
    pub fn new(min: f64, max: f64) -> Self {
        LevelBounds {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn from_summary(summary: &GroundwaterSummary) -> Self {
        LevelBounds {
            min: summary.min_level,
            max: summary.max_level,
        }
    }
}

/// Classify a level into the window's three colour tiers.
///
/// Neutral when the level is missing, when either bound is missing, and
/// when the bounds coincide (a single-valued window has no tiers). The
/// thirds are closed below and open above, so `min` itself is low and
/// `max` itself is high.
pub fn marker_color(level: Option<f64>, bounds: &LevelBounds) -> &'static str {
    let (Some(level), Some(min), Some(max)) = (level, bounds.min, bounds.max) else {
        return NEUTRAL_MARKER_COLOR;
    };
    if min == max {
        return NEUTRAL_MARKER_COLOR;
    }
    let fraction = (level - min) / (max - min);
    if fraction < 0.33 {
        LOW_MARKER_COLOR
    } else if fraction < 0.66 {
        MID_MARKER_COLOR
    } else {
        HIGH_MARKER_COLOR
    }
}

/// One station dot on the map, ready for the rendering layer.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct StationMarker {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub level: f64,
    pub color: &'static str,
}

/// Markers for an analysis window. Observations without both coordinates
/// or without a level are left off the map.
pub fn markers_from_observations(
    observations: &[GroundwaterObservation],
    bounds: &LevelBounds,
) -> Vec<StationMarker> {
    observations
        .iter()
        .filter_map(|obs| {
            let latitude = obs.latitude?;
            let longitude = obs.longitude?;
            let level = obs.data_value?;
            Some(StationMarker {
                code: obs.station_code.clone().unwrap_or_default(),
                name: obs.display_name().to_string(),
                latitude,
                longitude,
                level,
                color: marker_color(Some(level), bounds),
            })
        })
        .collect()
}

/// Markers for the live page. Same rule as the analysis map: a station
/// has to carry both coordinates and a level to earn a dot.
pub fn markers_from_stations(stations: &[LiveStation], bounds: &LevelBounds) -> Vec<StationMarker> {
    stations
        .iter()
        .filter_map(|station| {
            let latitude = station.latitude?;
            let longitude = station.longitude?;
            let level = station.latest_level?;
            Some(StationMarker {
                code: station.station_code.clone(),
                name: station.station_name.clone(),
                latitude,
                longitude,
                level,
                color: marker_color(Some(level), bounds),
            })
        })
        .collect()
}

/// Where the map looks and how far in.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct MapFocus {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl Default for MapFocus {
    fn default() -> Self {
        MapFocus {
            latitude: INDIA_CENTER.0,
            longitude: INDIA_CENTER.1,
            zoom: COUNTRY_ZOOM,
        }
    }
}

/// District focus derived from the first observation carrying both
/// coordinates. `None` leaves the previous focus in place.
pub fn focus_for(observations: &[GroundwaterObservation]) -> Option<MapFocus> {
    observations
        .iter()
        .find(|obs| obs.has_coordinates())
        .map(|obs| MapFocus {
            latitude: obs.latitude.unwrap_or_default(),
            longitude: obs.longitude.unwrap_or_default(),
            zoom: DISTRICT_ZOOM,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_color_tiers() {
        let bounds = LevelBounds::new(0.0, 100.0);
        assert_eq!(marker_color(Some(0.0), &bounds), LOW_MARKER_COLOR);
        assert_eq!(marker_color(Some(32.9), &bounds), LOW_MARKER_COLOR);
        assert_eq!(marker_color(Some(33.0), &bounds), MID_MARKER_COLOR);
        assert_eq!(marker_color(Some(65.9), &bounds), MID_MARKER_COLOR);
        assert_eq!(marker_color(Some(66.0), &bounds), HIGH_MARKER_COLOR);
        assert_eq!(marker_color(Some(100.0), &bounds), HIGH_MARKER_COLOR);
    }

    #[test]
    fn test_marker_color_offset_range() {
        let bounds = LevelBounds::new(5.0, 15.0);
        assert_eq!(marker_color(Some(5.0), &bounds), LOW_MARKER_COLOR);
        assert_eq!(marker_color(Some(10.0), &bounds), MID_MARKER_COLOR);
        assert_eq!(marker_color(Some(14.9), &bounds), HIGH_MARKER_COLOR);
    }

    #[test]
    fn test_marker_color_neutral_cases() {
        let bounds = LevelBounds::new(2.0, 8.0);
        assert_eq!(marker_color(None, &bounds), NEUTRAL_MARKER_COLOR);
        let flat = LevelBounds::new(5.0, 5.0);
        assert_eq!(marker_color(Some(5.0), &flat), NEUTRAL_MARKER_COLOR);
        let absent = LevelBounds::default();
        assert_eq!(marker_color(Some(5.0), &absent), NEUTRAL_MARKER_COLOR);
        let half = LevelBounds {
            min: Some(1.0),
            max: None,
        };
        assert_eq!(marker_color(Some(5.0), &half), NEUTRAL_MARKER_COLOR);
    }

    #[test]
    fn test_markers_from_observations_filters_incomplete() {
        let observations = vec![
            GroundwaterObservation {
                station_code: Some("W1".to_string()),
                station_name: Some("Full".to_string()),
                latitude: Some(20.0),
                longitude: Some(77.0),
                data_value: Some(4.0),
                ..Default::default()
            },
            GroundwaterObservation {
                station_name: Some("No coords".to_string()),
                data_value: Some(5.0),
                ..Default::default()
            },
            GroundwaterObservation {
                station_name: Some("No level".to_string()),
                latitude: Some(21.0),
                longitude: Some(78.0),
                ..Default::default()
            },
        ];
        let markers = markers_from_observations(&observations, &LevelBounds::new(0.0, 10.0));
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].code, "W1");
        assert_eq!(markers[0].name, "Full");
        assert_eq!(markers[0].color, MID_MARKER_COLOR);
    }

    #[test]
    fn test_markers_from_stations_skips_incomplete_snapshots() {
        let stations = vec![
            LiveStation {
                station_code: "W1".to_string(),
                station_name: "Reporting".to_string(),
                latitude: Some(23.0),
                longitude: Some(72.0),
                latest_level: Some(9.0),
                ..Default::default()
            },
            LiveStation {
                station_code: "W2".to_string(),
                station_name: "Silent".to_string(),
                latitude: Some(23.5),
                longitude: Some(72.5),
                latest_level: None,
                ..Default::default()
            },
            LiveStation {
                station_code: "W3".to_string(),
                station_name: "Unplaced".to_string(),
                latest_level: Some(2.0),
                ..Default::default()
            },
        ];
        let markers = markers_from_stations(&stations, &LevelBounds::new(0.0, 10.0));
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].code, "W1");
        assert_eq!(markers[0].color, HIGH_MARKER_COLOR);
    }

    #[test]
    fn test_default_focus_is_country_wide() {
        let focus = MapFocus::default();
        assert_eq!((focus.latitude, focus.longitude), INDIA_CENTER);
        assert_eq!(focus.zoom, COUNTRY_ZOOM);
    }

    #[test]
    fn test_focus_for_first_located_observation() {
        let observations = vec![
            GroundwaterObservation {
                data_value: Some(1.0),
                ..Default::default()
            },
            GroundwaterObservation {
                latitude: Some(28.6),
                longitude: Some(77.2),
                ..Default::default()
            },
        ];
        let focus = focus_for(&observations).unwrap();
        assert_eq!(focus.latitude, 28.6);
        assert_eq!(focus.longitude, 77.2);
        assert_eq!(focus.zoom, DISTRICT_ZOOM);
    }

    #[test]
    fn test_focus_for_none_when_nothing_located() {
        let observations = vec![GroundwaterObservation {
            data_value: Some(1.0),
            latitude: Some(28.6),
            ..Default::default()
        }];
        assert!(focus_for(&observations).is_none());
        assert!(focus_for(&[]).is_none());
    }
}
