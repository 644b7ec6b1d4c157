//! REST API server for the state browser
//!
//! Usage:
//!   ./target/release/api_server [--port PORT]
//!
//! REST endpoints:
//!   GET  /api/v1/health           - Health check
//!   GET  /api/v1/states?search=X  - List screen rows, filtered
//!   POST /api/v1/states/refresh   - Re-fetch the state list
//!   GET  /api/v1/state/:name      - Detail screen for one state

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use us_states::api::{create_router, ScreenService};
use us_states::client::ApiClient;
use us_states::config::Config;

#[derive(Parser, Debug)]
#[command(name = "api_server")]
#[command(about = "Serve the state list and detail screens as JSON")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,
}

fn print_banner(port: u16, config: &Config) {
    println!("============================================================");
    println!("              US STATES BROWSER API SERVER");
    println!("============================================================");
    println!();
    println!("  Port:        {}", port);
    println!("  REST:        http://localhost:{}/api/v1/", port);
    println!("  Statistics:  {}", config.population_url);
    println!("  Geocoding:   {}", config.geocode_url);
    println!();
    println!("REST Endpoints:");
    println!("  GET  /api/v1/health           Health check");
    println!("  GET  /api/v1/states           State list (?search=X)");
    println!("  POST /api/v1/states/refresh   Refresh state list");
    println!("  GET  /api/v1/state/:name      State detail");
    println!();
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    print_banner(args.port, &config);

    let client = ApiClient::new(config)?;
    let service = Arc::new(ScreenService::new(client));
    let app = create_router(service);

    let addr: SocketAddr = format!("0.0.0.0:{}", args.port).parse()?;
    tracing::info!("Starting REST server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
