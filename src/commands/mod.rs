pub mod browse;
pub mod buy;
pub mod help;
pub mod list;
pub mod manage;
pub mod profile;
pub mod wallet;

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::services::MarketStore;
use crate::utils::MarketError;

/// What the console front end works against
pub struct Session {
    pub store: Arc<MarketStore>,
    pub page_size: usize,
}

impl Session {
    pub fn new(store: Arc<MarketStore>, page_size: usize) -> Self {
        Session { store, page_size }
    }
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Reply(String),
    Quit,
    Nothing,
}

/// Log a store failure and turn it into the notification text
pub(crate) fn report(err: MarketError, operation: &str) -> String {
    if err.is_validation() {
        debug!("{} refused: {}", operation, err);
    } else {
        warn!("{} failed: {}", operation, err);
    }
    err.user_message(operation)
}

pub async fn handle_line(session: &Session, line: &str) -> Outcome {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Outcome::Nothing;
    }

    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    let result = match command.as_str() {
        "connect" => wallet::connect(session).await,
        "disconnect" => wallet::disconnect(session).await,
        "balance" | "bal" => wallet::balance(session).await,
        "browse" | "market" => browse::execute(session, args).await,
        "show" | "view" => browse::show(session, args).await,
        "buy" | "purchase" => buy::execute(session, args).await,
        "list" | "sell" => list::execute(session, args).await,
        "price" => manage::update_price(session, args).await,
        "relist" => manage::relist(session, args).await,
        "delist" | "unlist" => manage::delist(session, args).await,
        "mine" | "collection" => manage::collection(session).await,
        "profile" => profile::execute(session).await,
        "history" | "tx" => profile::history(session, args).await,
        "help" => Ok(help::text()),
        "quit" | "exit" => return Outcome::Quit,
        other => Err(format!("Unknown command '{}'. Type `help` for a list.", other)),
    };

    match result {
        Ok(reply) => Outcome::Reply(reply),
        Err(e) => {
            error!("Error executing command {}: {}", command, e);
            Outcome::Reply(format!("❌ {}", e))
        }
    }
}
