//! External collaborators
//!
//! The wallet and the chain are reached only through these traits. The
//! bundled implementations simulate both with random data and delays.

use async_trait::async_trait;
use rand::Rng;

use crate::models::{Denomination, WalletState};
use crate::utils::MarketError;

pub mod chain;
pub mod wallet;

#[cfg(test)]
pub mod testing;

pub use chain::SimulatedChain;
pub use wallet::SimulatedWallet;

/// Supplies an actor identity and starting balances
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn connect(&self) -> Result<WalletState, MarketError>;
}

/// Submits a transaction and resolves with its confirmation identifier
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn submit(&self, amount: f64, denomination: Denomination) -> Result<String, MarketError>;
}

/// `0x` followed by `N` random bytes in lowercase hex
pub(crate) fn random_hex<const N: usize>() -> String {
    let mut bytes = [0u8; N];
    rand::thread_rng().fill(&mut bytes[..]);
    format!("0x{}", hex::encode(bytes))
}
