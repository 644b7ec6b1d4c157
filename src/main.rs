//! US states browser
//!
//! Run: ./target/release/states <command>
//!
//! Commands:
//!   list [--search Q]  - list states with flags and population
//!   show <NAME>        - detail screen for one state
//!   route <PATH>       - open a path-style route, e.g. "/state/Wyoming"
//!   browse             - interactive session over both screens

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use tracing::info;
use us_states::browse::{Browser, Command};
use us_states::client::ApiClient;
use us_states::config::Config;
use us_states::navigation::Route;
use us_states::screens::{DetailScreen, ListScreen};

#[derive(Parser, Debug)]
#[command(name = "states")]
#[command(about = "Browse U.S. states with population figures and flags")]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List every state, optionally filtered
    List {
        /// Case-insensitive substring filter on the state name
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show population and map location for one state
    Show {
        /// Full state name, e.g. "New York"
        name: String,
    },
    /// Open a path-style route
    Route {
        path: String,
    },
    /// Interactive session
    Browse,
}

async fn show_list(client: &ApiClient, search: String) -> Result<()> {
    let mut screen = ListScreen::new();
    screen.set_search_query(search);
    screen.begin_mount();
    present(&screen.render())?;
    screen.settle(client).await;
    present(&screen.render())
}

async fn show_detail(client: &ApiClient, name: String) -> Result<()> {
    let mut screen = DetailScreen::new(name);
    present(&screen.render())?;
    screen.load(client).await;
    present(&screen.render())
}

fn present(screen: &str) -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", screen)?;
    stdout.flush()?;
    Ok(())
}

async fn browse(client: ApiClient) -> Result<()> {
    let mut browser = Browser::new(client);

    println!("Type to search, a row number to open it, :r refresh, :b back, :q quit");
    present(&browser.render())?;
    browser.settle().await;
    present(&browser.render())?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !browser.handle(Command::parse(&line)) {
            break;
        }
        println!();
        present(&browser.render())?;
        if browser.is_pending() {
            browser.settle().await;
            present(&browser.render())?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    info!("Statistics: {}", config.population_url);
    info!("Geocoding: {}", config.geocode_url);

    let client = ApiClient::new(config)?;

    match args.command {
        Cmd::List { search } => show_list(&client, search).await,
        Cmd::Show { name } => show_detail(&client, name).await,
        Cmd::Route { path } => match Route::parse(&path) {
            Some(Route::List) => show_list(&client, String::new()).await,
            Some(Route::State(name)) => show_detail(&client, name).await,
            None => anyhow::bail!("Unknown route: {}", path),
        },
        Cmd::Browse => browse(client).await,
    }
}
