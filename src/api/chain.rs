use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{random_hex, TransactionSubmitter};
use crate::models::Denomination;
use crate::utils::MarketError;

/// Stand-in for transaction submission; always confirms after `delay`
pub struct SimulatedChain {
    delay: Duration,
}

impl SimulatedChain {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TransactionSubmitter for SimulatedChain {
    async fn submit(&self, amount: f64, denomination: Denomination) -> Result<String, MarketError> {
        tokio::time::sleep(self.delay).await;
        let tx_hash = random_hex::<32>();
        debug!("Confirmed {} {} as {}", amount, denomination, tx_hash);
        Ok(tx_hash)
    }
}
