//! In-process stand-in for the statistics and geocoding APIs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::models::StateRecord;

#[derive(Default)]
struct Shared {
    records: Mutex<Vec<StateRecord>>,
    failing: AtomicBool,
    population_hits: AtomicUsize,
    geocode_hits: AtomicUsize,
}

pub struct FakeUpstream {
    addr: SocketAddr,
    shared: Arc<Shared>,
}

#[derive(Deserialize)]
struct SearchQuery {
    q: String,
    format: String,
}

pub fn record(name: &str, population: u64) -> StateRecord {
    StateRecord { name: name.to_string(), population }
}

pub fn sample_records() -> Vec<StateRecord> {
    vec![
        record("New York", 19677151),
        record("New Jersey", 9261699),
        record("Nevada", 3177772),
        record("Wyoming", 578803),
    ]
}

async fn population(State(shared): State<Arc<Shared>>) -> impl IntoResponse {
    shared.population_hits.fetch_add(1, Ordering::SeqCst);
    if shared.failing.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response();
    }
    let data: Vec<_> = shared
        .records
        .lock()
        .unwrap()
        .iter()
        .map(|r| json!({"ID State": "04000US00", "State": r.name, "Year": "2022", "Population": r.population}))
        .collect();
    Json(json!({ "data": data, "source": [] })).into_response()
}

async fn search(
    State(shared): State<Arc<Shared>>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    shared.geocode_hits.fetch_add(1, Ordering::SeqCst);
    if shared.failing.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response();
    }
    if params.q == "Hang, USA" {
        // never answers
        std::future::pending::<()>().await;
    }
    if params.format != "json" {
        return (StatusCode::BAD_REQUEST, "format must be json").into_response();
    }
    let body = match params.q.as_str() {
        "Wyoming, USA" => json!([
            {"lat": "43.1700264", "lon": "-107.5685348", "display_name": "Wyoming, USA"},
            {"lat": "41.0", "lon": "-104.0", "display_name": "Wyoming County"}
        ]),
        "New York, USA" => json!([{"lat": "40.7127281", "lon": "-74.0060152", "display_name": "New York, USA"}]),
        "Garbled, USA" => json!([{"lat": "north", "lon": "west"}]),
        _ => json!([]),
    };
    Json(body).into_response()
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

impl FakeUpstream {
    pub async fn start() -> Self {
        let shared = Arc::new(Shared::default());
        *shared.records.lock().unwrap() = sample_records();

        let app = Router::new()
            .route("/api/data", get(population))
            .route("/search", get(search))
            .route("/broken/api/data", get(broken))
            .route("/broken/search", get(broken))
            .with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, shared }
    }

    pub fn config(&self) -> Config {
        Config {
            population_url: format!(
                "http://{}/api/data?drilldowns=State&measures=Population&year=latest",
                self.addr
            ),
            geocode_url: format!("http://{}/search", self.addr),
            user_agent: "us-states-tests".to_string(),
        }
    }

    pub fn failing_config(&self) -> Config {
        Config {
            population_url: format!("http://{}/broken/api/data", self.addr),
            geocode_url: format!("http://{}/broken/search", self.addr),
            user_agent: "us-states-tests".to_string(),
        }
    }

    pub fn set_records(&self, records: Vec<StateRecord>) {
        *self.shared.records.lock().unwrap() = records;
    }

    pub fn set_failing(&self, failing: bool) {
        self.shared.failing.store(failing, Ordering::SeqCst);
    }

    pub fn population_hits(&self) -> usize {
        self.shared.population_hits.load(Ordering::SeqCst)
    }

    pub fn geocode_hits(&self) -> usize {
        self.shared.geocode_hits.load(Ordering::SeqCst)
    }
}
