pub mod locations;
pub mod observation;
pub mod query;
pub mod station;
pub mod summary;

#[cfg(feature = "api")]
pub mod client;
#[cfg(all(feature = "api", not(target_arch = "wasm32")))]
pub mod upstream;
