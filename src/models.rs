use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::format_thousands;

/// Map span (degrees) used around a geocoded state
pub const REGION_DELTA: f64 = 5.0;

/// One row of the statistics endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    #[serde(rename = "State")]
    pub name: String,
    #[serde(rename = "Population")]
    pub population: u64,
}

/// JSON envelope returned by the statistics endpoint
#[derive(Debug, Deserialize)]
pub struct PopulationEnvelope {
    pub data: Vec<StateRecord>,
}

/// Raw geocoding match; coordinates arrive as numeric strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeMatch {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Map region centre and span
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl TryFrom<&GeocodeMatch> for Coordinate {
    type Error = anyhow::Error;

    fn try_from(m: &GeocodeMatch) -> anyhow::Result<Self> {
        let latitude: f64 = m
            .lat
            .trim()
            .parse()
            .with_context(|| format!("invalid latitude {:?}", m.lat))?;
        let longitude: f64 = m
            .lon
            .trim()
            .parse()
            .with_context(|| format!("invalid longitude {:?}", m.lon))?;

        Ok(Coordinate {
            latitude,
            longitude,
            latitude_delta: REGION_DELTA,
            longitude_delta: REGION_DELTA,
        })
    }
}

/// Population as displayed: a count, or the unknown marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    Known(u64),
    Unknown,
}

impl Population {
    /// Exact-name lookup over a fetched collection
    pub fn find(records: &[StateRecord], name: &str) -> Self {
        records
            .iter()
            .find(|r| r.name == name)
            .map(|r| Population::Known(r.population))
            .unwrap_or(Population::Unknown)
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Population::Known(n) => f.write_str(&format_thousands(*n)),
            Population::Unknown => f.write_str("Unknown"),
        }
    }
}

// Serialized as the raw number, or the string "Unknown"
impl Serialize for Population {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Population::Known(n) => serializer.serialize_u64(*n),
            Population::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}
