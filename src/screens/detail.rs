//! Detail screen for a single state: population text and a map pin.

use serde::Serialize;
use tracing::{debug, error};

use crate::client::ApiClient;
use crate::format::population_label;
use crate::models::{Coordinate, Population, StateRecord};

use super::LOADING_INDICATOR;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub coordinate: Coordinate,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub region: Coordinate,
    pub marker: Marker,
}

impl MapView {
    /// Approximate slippy-map zoom that shows the region's span
    pub fn zoom(&self) -> u8 {
        let span = self.region.latitude_delta.max(self.region.longitude_delta);
        if span <= 0.0 {
            return 18;
        }
        (360.0 / span).log2().round().clamp(0.0, 18.0) as u8
    }

    pub fn osm_url(&self) -> String {
        let c = &self.marker.coordinate;
        format!(
            "https://www.openstreetmap.org/?mlat={lat:.4}&mlon={lon:.4}#map={zoom}/{lat:.4}/{lon:.4}",
            lat = c.latitude,
            lon = c.longitude,
            zoom = self.zoom()
        )
    }
}

#[derive(Debug)]
pub struct DetailScreen {
    state_name: String,
    loading: bool,
    location: Option<Coordinate>,
    population: Option<Population>,
}

impl DetailScreen {
    pub fn new(state_name: impl Into<String>) -> Self {
        Self {
            state_name: state_name.into(),
            loading: true,
            location: None,
            population: None,
        }
    }

    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    /// `Unknown` until a matching record has been loaded
    pub fn population(&self) -> Population {
        self.population.unwrap_or(Population::Unknown)
    }

    /// Geocode and fetch populations concurrently; loading ends once both settle.
    pub async fn load(&mut self, client: &ApiClient) {
        self.loading = true;
        let name = self.state_name.clone();

        let (location, populations) =
            tokio::join!(client.locate(&name), client.fetch_populations());

        self.apply(location, populations);
    }

    /// Reload only when navigation hands over a different state
    pub async fn set_state_name(&mut self, state_name: impl Into<String>, client: &ApiClient) {
        if self.navigate(state_name) {
            self.load(client).await;
        }
    }

    /// Switch to another state and go back to loading. Returns `false` when
    /// the name is unchanged and nothing needs fetching.
    pub fn navigate(&mut self, state_name: impl Into<String>) -> bool {
        let state_name = state_name.into();
        if state_name == self.state_name {
            return false;
        }
        self.state_name = state_name;
        self.location = None;
        self.population = None;
        self.loading = true;
        true
    }

    /// Any failure is logged and shown as missing data
    pub fn apply(
        &mut self,
        location: anyhow::Result<Option<Coordinate>>,
        populations: anyhow::Result<Vec<StateRecord>>,
    ) {
        self.location = match location {
            Ok(Some(c)) => Some(c),
            Ok(None) => {
                debug!("No geocoding match for {}", self.state_name);
                None
            }
            Err(e) => {
                error!("Failed to locate {}: {:#}", self.state_name, e);
                None
            }
        };

        self.population = Some(match populations {
            Ok(records) => Population::find(&records, &self.state_name),
            Err(e) => {
                error!("Failed to load population for {}: {:#}", self.state_name, e);
                Population::Unknown
            }
        });

        self.loading = false;
    }

    pub fn population_text(&self) -> String {
        population_label(&self.population())
    }

    /// Map centred on the state with one marker; omitted without a location
    pub fn map(&self) -> Option<MapView> {
        self.location.map(|region| MapView {
            region,
            marker: Marker {
                coordinate: region,
                title: self.state_name.clone(),
            },
        })
    }

    pub fn render(&self) -> String {
        if self.loading {
            return format!("{}\n", LOADING_INDICATOR);
        }

        let mut out = format!("{}\n{}\n", self.state_name, self.population_text());

        if let Some(map) = self.map() {
            let r = &map.region;
            out.push_str(&format!(
                "\nMap\n  centre: {:.4}, {:.4}\n  span:   {}° x {}°\n  marker: {}\n  {}\n",
                r.latitude,
                r.longitude,
                r.latitude_delta,
                r.longitude_delta,
                map.marker.title,
                map.osm_url()
            ));
        }
        out
    }
}
