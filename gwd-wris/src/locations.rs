use anyhow::Context;
use serde::{Deserialize, Serialize};

#[cfg(feature = "api")]
use crate::client::ApiError;
#[cfg(feature = "api")]
use reqwest::Client;

/// Public JSON listing every Indian state together with its districts.
/// The dashboard and the station sweep both read the same document.
pub const LOCATIONS_URL: &str =
    "https://raw.githubusercontent.com/sab99r/Indian-States-And-Districts/master/states-and-districts.json";

/// One state and the districts it contains.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StateDistricts {
    pub state: String,
    pub districts: Vec<String>,
}

/// The full state-to-districts directory.
///
/// An empty directory is the startup state and also what a failed fetch
/// leaves behind; selectors render disabled until it is populated.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct LocationDirectory {
    pub states: Vec<StateDistricts>,
}

impl LocationDirectory {
    /// Parse the directory from its JSON document.
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid location directory payload")
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.state.as_str()).collect()
    }

    /// Districts of the named state, or an empty slice for an unknown state.
    pub fn districts_of(&self, state: &str) -> &[String] {
        self.states
            .iter()
            .find(|s| s.state == state)
            .map(|s| s.districts.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, state: &str, district: &str) -> bool {
        self.districts_of(state).iter().any(|d| d == district)
    }

    /// Initial selection after a successful load: the first state and its
    /// first district. The district comes back empty when the first state
    /// lists none.
    pub fn default_selection(&self) -> Option<(String, String)> {
        self.states.first().map(|s| {
            let district = s.districts.first().cloned().unwrap_or_default();
            (s.state.clone(), district)
        })
    }

    /// Fetch and parse the directory from [`LOCATIONS_URL`].
    #[cfg(feature = "api")]
    pub async fn fetch(client: &Client) -> Result<Self, ApiError> {
        let response = client.get(LOCATIONS_URL).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json::<LocationDirectory>().await?)
    }
}
