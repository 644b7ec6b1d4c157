//! List screen: every state with its flag and population, filtered by a
//! live search string.

use serde::Serialize;
use tracing::{error, info};

use crate::client::ApiClient;
use crate::format::population_label;
use crate::models::{Population, StateRecord};
use crate::navigation::Route;
use crate::state_codes::{flag_image, FlagImage};

use super::LOADING_INDICATOR;

/// Records whose name contains `query`, ignoring case. Order is kept.
pub fn filter_states<'a>(states: &'a [StateRecord], query: &str) -> Vec<&'a StateRecord> {
    let needle = query.to_lowercase();
    states
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect()
}

/// One rendered row of the list
#[derive(Debug, Clone, Serialize)]
pub struct StateRow {
    pub name: String,
    #[serde(skip)]
    pub flag: FlagImage,
    pub flag_url: Option<String>,
    pub population: u64,
    pub population_label: String,
    pub route: String,
}

impl StateRow {
    pub fn new(record: &StateRecord) -> Self {
        let flag = flag_image(&record.name);
        Self {
            name: record.name.clone(),
            flag_url: flag.url().map(str::to_string),
            flag,
            population: record.population,
            population_label: population_label(&Population::Known(record.population)),
            route: Route::state(record.name.clone()).path(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ListScreen {
    states: Vec<StateRecord>,
    loading: bool,
    refreshing: bool,
    mounted: bool,
    search_query: String,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Last successfully fetched collection
    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    pub async fn mount(&mut self, client: &ApiClient) {
        self.begin_mount();
        self.settle(client).await;
    }

    /// Pull-to-refresh
    pub async fn refresh(&mut self, client: &ApiClient) {
        self.begin_refresh();
        self.settle(client).await;
    }

    /// Mark the screen mounted and pending; `settle` performs the fetch.
    pub fn begin_mount(&mut self) {
        self.mounted = true;
        self.loading = true;
    }

    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
        self.loading = true;
    }

    /// Run the pending fetch, if any
    pub async fn settle(&mut self, client: &ApiClient) {
        if !self.loading {
            return;
        }
        let result = client.fetch_populations().await;
        self.apply_fetch(result);
    }

    /// Settle a fetch. Failures keep whatever was shown before.
    pub fn apply_fetch(&mut self, result: anyhow::Result<Vec<StateRecord>>) {
        match result {
            Ok(states) => {
                info!("Loaded {} states", states.len());
                self.states = states;
            }
            Err(e) => error!("Failed to load states: {:#}", e),
        }
        self.loading = false;
        self.refreshing = false;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn visible(&self) -> Vec<&StateRecord> {
        filter_states(&self.states, &self.search_query)
    }

    pub fn rows(&self) -> Vec<StateRow> {
        self.visible().into_iter().map(StateRow::new).collect()
    }

    /// Route for the visible row at `index`
    pub fn select(&self, index: usize) -> Option<Route> {
        self.visible()
            .get(index)
            .map(|s| Route::state(s.name.clone()))
    }

    pub fn render(&self) -> String {
        let search = if self.search_query.is_empty() {
            "Search states"
        } else {
            self.search_query.as_str()
        };
        let mut out = format!("[ {} ]\n\n", search);

        if self.loading {
            out.push_str(LOADING_INDICATOR);
            out.push('\n');
            return out;
        }

        for (i, row) in self.rows().iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. {}\n     {}\n     flag: {}\n",
                i + 1,
                row.name,
                row.population_label,
                row.flag.source()
            ));
        }
        out
    }
}
