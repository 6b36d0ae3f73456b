//! Derived views over groundwater observations.
//!
//! This crate turns raw observation and station data into the forms the
//! dashboard renders: window summaries, trend series, per-station
//! averages, and classified map markers. Everything here is pure; the
//! network lives elsewhere.

pub mod live;
pub mod markers;
pub mod selection;
pub mod stations;
pub mod summary;
