//! Line-driven session over both screens
//!
//! Input lines:
//!   <text>   - set the live search string (empty line clears it)
//!   <number> - open the detail screen for that visible row
//!   :r       - refresh the list
//!   :b       - back to the list
//!   :q       - quit

use crate::client::ApiClient;
use crate::navigation::Route;
use crate::screens::{DetailScreen, ListScreen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Select(usize),
    Refresh,
    Back,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            ":q" => Command::Quit,
            ":r" => Command::Refresh,
            ":b" => Command::Back,
            other => match other.parse::<usize>() {
                // rows are shown 1-based
                Ok(n) if n > 0 => Command::Select(n - 1),
                _ => Command::Search(line.to_string()),
            },
        }
    }
}

pub struct Browser {
    client: ApiClient,
    list: ListScreen,
    detail: Option<DetailScreen>,
}

impl Browser {
    /// New session; the list is mounted and pending until `settle`
    pub fn new(client: ApiClient) -> Self {
        let mut list = ListScreen::new();
        list.begin_mount();
        Self {
            client,
            list,
            detail: None,
        }
    }

    pub fn list(&self) -> &ListScreen {
        &self.list
    }

    pub fn detail(&self) -> Option<&DetailScreen> {
        self.detail.as_ref()
    }

    pub fn route(&self) -> Route {
        match &self.detail {
            Some(d) => Route::state(d.state_name()),
            None => Route::List,
        }
    }

    /// Whether the current screen is waiting on the network
    pub fn is_pending(&self) -> bool {
        match &self.detail {
            Some(detail) => detail.is_loading(),
            None => self.list.is_loading(),
        }
    }

    /// Run whatever fetches the last navigation left pending
    pub async fn settle(&mut self) {
        self.list.settle(&self.client).await;
        if let Some(detail) = self.detail.as_mut() {
            if detail.is_loading() {
                detail.load(&self.client).await;
            }
        }
    }

    /// Navigate to a route, e.g. one given on the command line. A new
    /// detail screen starts out loading.
    pub fn open(&mut self, route: Route) {
        match route {
            Route::List => self.detail = None,
            Route::State(name) => match self.detail.as_mut() {
                Some(detail) => {
                    detail.navigate(name);
                }
                None => self.detail = Some(DetailScreen::new(name)),
            },
        }
    }

    /// Apply one command; returns `false` once the session should end.
    /// Fetches are deferred to `settle` so the pending screen can be shown.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::Back => self.detail = None,
            Command::Refresh => {
                if self.detail.is_none() {
                    self.list.begin_refresh();
                }
            }
            Command::Search(text) => {
                if self.detail.is_none() {
                    self.list.set_search_query(text);
                }
            }
            Command::Select(index) => {
                if self.detail.is_none() {
                    if let Some(route) = self.list.select(index) {
                        self.open(route);
                    }
                }
            }
        }
        true
    }

    pub fn render(&self) -> String {
        match &self.detail {
            Some(detail) => detail.render(),
            None => self.list.render(),
        }
    }
}
