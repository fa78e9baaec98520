//! Wallet and identity models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::MarketError;

/// Opaque actor identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    /// Destination recorded for listing transactions
    pub const MARKETPLACE: &'static str = "marketplace";

    pub fn marketplace() -> Self {
        Address(Self::MARKETPLACE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for display, e.g. `0x1a2b3c4d...9f8e7d`
    pub fn short(&self) -> String {
        let s = self.0.as_str();
        if s.len() <= 16 || !s.is_ascii() {
            return s.to_string();
        }
        format!("{}...{}", &s[..10], &s[s.len() - 6..])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Address(value.to_string())
    }
}

/// Token denominations tracked by a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    /// Reference denomination, never used for pricing
    Eth,
    Memex,
    Area,
}

impl Denomination {
    pub fn ticker(&self) -> &'static str {
        match self {
            Denomination::Eth => "ETH",
            Denomination::Memex => "aMEMEX",
            Denomination::Area => "AREA",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for Denomination {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memex" | "amemex" | "a" => Ok(Denomination::Memex),
            "area" | "b" => Ok(Denomination::Area),
            "eth" => Ok(Denomination::Eth),
            "" => Err(MarketError::MissingDenomination),
            other => Err(MarketError::UnknownDenomination(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Balances {
    pub eth: f64,
    pub memex: f64,
    pub area: f64,
}

impl Balances {
    pub fn get(&self, denomination: Denomination) -> f64 {
        match denomination {
            Denomination::Eth => self.eth,
            Denomination::Memex => self.memex,
            Denomination::Area => self.area,
        }
    }

    pub fn get_mut(&mut self, denomination: Denomination) -> &mut f64 {
        match denomination {
            Denomination::Eth => &mut self.eth,
            Denomination::Memex => &mut self.memex,
            Denomination::Area => &mut self.area,
        }
    }
}

/// The connected actor's wallet, persisted across sessions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub is_connected: bool,
    pub address: Option<Address>,
    pub balance: Balances,
}

impl WalletState {
    pub fn connected(address: Address, balance: Balances) -> Self {
        WalletState {
            is_connected: true,
            address: Some(address),
            balance,
        }
    }

    /// Disconnected wallet with zero balances
    pub fn disconnected() -> Self {
        WalletState::default()
    }

    /// The actor identity, present only while connected
    pub fn actor(&self) -> Option<&Address> {
        if self.is_connected {
            self.address.as_ref()
        } else {
            None
        }
    }
}
