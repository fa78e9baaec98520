use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod data;
mod db;
mod models;
mod services;
mod utils;

use api::{SimulatedChain, SimulatedWallet};
use commands::{Outcome, Session};
use config::Config;
use db::{KeyValueStore, MemoryStore};
use services::MarketStore;

fn prompt() {
    print!("memex> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("memex_market=debug")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🖼️ Starting Memex Market...");
    info!("  Memex Market v{} - simulated NFT marketplace", env!("CARGO_PKG_VERSION"));
    info!("");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    debug!("Configuration: {:?}", config);

    info!("Initializing state store...");
    let kv: Arc<dyn KeyValueStore> = if config.state_dir.as_os_str().is_empty() {
        info!("No state directory configured; nothing will be persisted");
        Arc::new(MemoryStore::new())
    } else {
        match db::init_store(&config.state_dir).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                error!("Failed to initialize state store: {}", e);
                return;
            }
        }
    };

    let store = match MarketStore::open(
        &config,
        Arc::new(SimulatedWallet::new(config.connect_delay)),
        Arc::new(SimulatedChain::new(config.confirm_delay)),
        kv,
    )
    .await
    {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open marketplace: {}", e);
            return;
        }
    };

    let session = Arc::new(Session::new(Arc::new(store), config.page_size));

    println!("Welcome to Memex Market. Type `help` for commands.");
    prompt();

    // Lines are handled concurrently so a second mutation typed while one is
    // pending meets the store's mutation policy.
    let mut pending = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        while pending.try_join_next().is_some() {}

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        let session = Arc::clone(&session);
        pending.spawn(async move {
            match commands::handle_line(&session, &line).await {
                Outcome::Reply(text) => println!("{}", text),
                Outcome::Quit | Outcome::Nothing => {}
            }
            prompt();
        });
    }

    if !pending.is_empty() {
        info!("Waiting for {} pending command(s)...", pending.len());
    }
    while pending.join_next().await.is_some() {}

    info!("👋 Memex Market stopped");
}
