use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use super::{random_hex, WalletProvider};
use crate::models::{Address, Balances, WalletState};
use crate::utils::MarketError;

/// Stand-in for a browser wallet: random address, random balances
pub struct SimulatedWallet {
    delay: Duration,
}

impl SimulatedWallet {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl WalletProvider for SimulatedWallet {
    async fn connect(&self) -> Result<WalletState, MarketError> {
        tokio::time::sleep(self.delay).await;

        let address = Address(random_hex::<20>());
        let mut rng = rand::thread_rng();
        let balance = Balances {
            eth: rng.gen_range(0.0..10.0),
            memex: rng.gen_range(0.0..1000.0),
            area: rng.gen_range(0.0..500.0),
        };
        debug!("Simulated wallet {} connected", address);

        Ok(WalletState::connected(address, balance))
    }
}
