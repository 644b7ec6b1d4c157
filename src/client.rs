//! HTTP client for the statistics and geocoding APIs

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{Config, GEOCODE_COUNTRY_SUFFIX};
use crate::models::{Coordinate, GeocodeMatch, PopulationEnvelope, StateRecord};

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed: {} - {}", status, text)
        }
    }

    /// All state population records for the latest year
    pub async fn fetch_populations(&self) -> Result<Vec<StateRecord>> {
        debug!("Fetching populations from {}", self.config.population_url);
        let envelope: PopulationEnvelope = self
            .get(self.client.get(&self.config.population_url))
            .await
            .context("population request failed")?;
        Ok(envelope.data)
    }

    /// Raw geocoding matches for a state name, best match first
    pub async fn geocode(&self, place: &str) -> Result<Vec<GeocodeMatch>> {
        let query = format!("{}{}", place, GEOCODE_COUNTRY_SUFFIX);
        debug!("Geocoding {:?}", query);
        let request = self
            .client
            .get(&self.config.geocode_url)
            .query(&[("q", query.as_str()), ("format", "json")]);
        self.get(request)
            .await
            .with_context(|| format!("geocoding request for {:?} failed", place))
    }

    /// First geocoding match as a map coordinate, `None` if nothing matched
    pub async fn locate(&self, place: &str) -> Result<Option<Coordinate>> {
        let matches = self.geocode(place).await?;
        matches.first().map(Coordinate::try_from).transpose()
    }
}
