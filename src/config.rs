//! Endpoint configuration
//!
//! Environment variables:
//!   STATES_POPULATION_URL - statistics endpoint (default: datausa.io, latest year)
//!   STATES_GEOCODE_URL    - geocoding search endpoint (default: Nominatim)
//!   STATES_USER_AGENT     - User-Agent sent with every request

pub const DEFAULT_POPULATION_URL: &str =
    "https://datausa.io/api/data?drilldowns=State&measures=Population&year=latest";
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Appended to a state name before geocoding
pub const GEOCODE_COUNTRY_SUFFIX: &str = ", USA";

#[derive(Debug, Clone)]
pub struct Config {
    pub population_url: String,
    pub geocode_url: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            population_url: std::env::var("STATES_POPULATION_URL")
                .unwrap_or(defaults.population_url),
            geocode_url: std::env::var("STATES_GEOCODE_URL").unwrap_or(defaults.geocode_url),
            user_agent: std::env::var("STATES_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            population_url: DEFAULT_POPULATION_URL.to_string(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            user_agent: format!("us-states/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.population_url.contains("drilldowns=State"));
        assert!(config.population_url.contains("year=latest"));
        assert_eq!(config.geocode_url, DEFAULT_GEOCODE_URL);
        assert!(config.user_agent.starts_with("us-states/"));
    }
}
