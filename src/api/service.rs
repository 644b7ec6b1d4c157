//! Screen logic shared by the REST handlers
//!
//! One list screen is kept for the whole server so every request filters the
//! same last-fetched collection. Detail screens are built per request.

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::client::ApiClient;
use crate::models::Population;
use crate::screens::{filter_states, DetailScreen, ListScreen, MapView, StateRow};

#[derive(Debug, Serialize)]
pub struct StatesView {
    pub search: String,
    pub count: usize,
    pub states: Vec<StateRow>,
}

#[derive(Debug, Serialize)]
pub struct StateDetailView {
    pub name: String,
    pub population: Population,
    pub population_label: String,
    pub map: Option<MapView>,
}

pub struct ScreenService {
    client: ApiClient,
    list: RwLock<ListScreen>,
}

impl ScreenService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            list: RwLock::new(ListScreen::new()),
        }
    }

    async fn ensure_mounted(&self) {
        if self.list.read().await.is_mounted() {
            return;
        }
        let mut list = self.list.write().await;
        // another request may have mounted it while we waited
        if !list.is_mounted() {
            info!("Mounting state list");
            list.mount(&self.client).await;
        }
    }

    fn states_view(list: &ListScreen, search: &str) -> StatesView {
        let states: Vec<StateRow> = filter_states(list.states(), search)
            .into_iter()
            .map(StateRow::new)
            .collect();
        StatesView {
            search: search.to_string(),
            count: states.len(),
            states,
        }
    }

    pub async fn list_states(&self, search: &str) -> StatesView {
        self.ensure_mounted().await;
        let list = self.list.read().await;
        Self::states_view(&list, search)
    }

    pub async fn refresh_states(&self) -> StatesView {
        let mut list = self.list.write().await;
        if list.is_mounted() {
            list.refresh(&self.client).await;
        } else {
            list.mount(&self.client).await;
        }
        Self::states_view(&list, "")
    }

    pub async fn state_detail(&self, name: &str) -> StateDetailView {
        let mut screen = DetailScreen::new(name);
        screen.load(&self.client).await;
        StateDetailView {
            name: screen.state_name().to_string(),
            population: screen.population(),
            population_label: screen.population_text(),
            map: screen.map(),
        }
    }
}
