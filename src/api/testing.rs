//! Deterministic collaborators for tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::{TransactionSubmitter, WalletProvider};
use crate::models::{Address, Balances, Denomination, WalletState};
use crate::utils::MarketError;

/// Always connects as the same address with the same balances
pub struct FixedWallet {
    pub address: Address,
    pub balance: Balances,
    pub fail: AtomicBool,
}

impl FixedWallet {
    pub fn new(address: &str, balance: Balances) -> Self {
        FixedWallet {
            address: Address::from(address),
            balance,
            fail: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl WalletProvider for FixedWallet {
    async fn connect(&self) -> Result<WalletState, MarketError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MarketError::Collaborator("wallet refused".into()));
        }
        Ok(WalletState::connected(self.address.clone(), self.balance))
    }
}

/// Confirms instantly with sequential ids; can be made to fail or to block
#[derive(Default)]
pub struct ScriptedChain {
    pub submitted: AtomicUsize,
    pub fail: AtomicBool,
    gate: Option<Arc<Notify>>,
}

impl ScriptedChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every submission waits until `gate` is notified
    pub fn gated(gate: Arc<Notify>) -> Self {
        ScriptedChain {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn submissions(&self) -> usize {
        self.submitted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionSubmitter for ScriptedChain {
    async fn submit(&self, _amount: f64, _denomination: Denomination) -> Result<String, MarketError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(MarketError::Collaborator("node unavailable".into()));
        }
        let n = self.submitted.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("0x{:064x}", n))
    }
}
