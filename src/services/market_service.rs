use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, error, info, warn};

use crate::api::{TransactionSubmitter, WalletProvider};
use crate::config::{Config, MutationPolicy};
use crate::data::seed_catalog;
use crate::db::{self, KeyValueStore};
use crate::models::{
    Address, Denomination, Item, ItemId, NewItem, Price, TransactionKind, TransactionRecord,
    WalletState,
};
use crate::utils::{MarketError, StorageError};

/// Fees submitted for bookkeeping operations. They are confirmed but never
/// debited from the wallet.
pub const LISTING_FEE: f64 = 0.001;
pub const PRICE_UPDATE_FEE: f64 = 0.0005;
pub const DELISTING_FEE: f64 = 0.0001;
pub const RELISTING_FEE: f64 = 0.0001;
const FEE_DENOMINATION: Denomination = Denomination::Memex;

/// Everything the marketplace knows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketState {
    pub items: Vec<Item>,
    pub wallet: WalletState,
    /// Newest first
    pub ledger: Vec<TransactionRecord>,
}

impl MarketState {
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }
}

/// Result of a confirmed mutation
#[derive(Debug, Clone)]
pub struct Receipt {
    pub tx_hash: String,
    /// The item as it stands after the transition
    pub item: Option<Item>,
    pub record: Option<TransactionRecord>,
}

/// Owns the catalog, the wallet and the ledger
///
/// Reads take a snapshot under the state lock. Mutations additionally hold
/// the mutation gate from validation until commit, so exactly one of them
/// is in flight at a time and no two read-then-write windows interleave.
pub struct MarketStore {
    state: RwLock<MarketState>,
    gate: Mutex<()>,
    wallet_provider: Arc<dyn WalletProvider>,
    submitter: Arc<dyn TransactionSubmitter>,
    kv: Arc<dyn KeyValueStore>,
    policy: MutationPolicy,
    legacy_quirks: bool,
}

impl MarketStore {
    /// Restore the wallet and ledger from `kv` and seed the catalog
    pub async fn open(
        config: &Config,
        wallet_provider: Arc<dyn WalletProvider>,
        submitter: Arc<dyn TransactionSubmitter>,
        kv: Arc<dyn KeyValueStore>,
    ) -> Result<Self, MarketError> {
        let wallet = match db::wallet::load_wallet(kv.as_ref()).await? {
            Some(wallet) if wallet.actor().is_some() => {
                info!(
                    "Restored wallet {}",
                    wallet.address.as_ref().map(Address::short).unwrap_or_default()
                );
                wallet
            }
            _ => WalletState::disconnected(),
        };
        let ledger = db::transaction::load_transactions(kv.as_ref()).await?;
        let items = if config.seed_catalog { seed_catalog() } else { Vec::new() };

        info!(
            "Marketplace opened: {} items, {} ledger records",
            items.len(),
            ledger.len()
        );

        Ok(MarketStore {
            state: RwLock::new(MarketState { items, wallet, ledger }),
            gate: Mutex::new(()),
            wallet_provider,
            submitter,
            kv,
            policy: config.mutation_policy,
            legacy_quirks: config.legacy_quirks,
        })
    }

    /// Replace the catalog before the store is shared
    #[cfg(test)]
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.state.get_mut().items = items;
        self
    }

    /// Copy of the current state for rendering
    pub async fn snapshot(&self) -> MarketState {
        self.state.read().await.clone()
    }

    pub async fn wallet(&self) -> WalletState {
        self.state.read().await.wallet.clone()
    }

    pub async fn item(&self, id: &ItemId) -> Option<Item> {
        self.state.read().await.item(id).cloned()
    }

    /// True while a mutation is pending
    pub fn is_busy(&self) -> bool {
        self.gate.try_lock().is_err()
    }

    async fn begin(&self) -> Result<MutexGuard<'_, ()>, MarketError> {
        match self.policy {
            MutationPolicy::Reject => self.gate.try_lock().map_err(|_| {
                debug!("Rejected mutation: another transaction is pending");
                MarketError::Busy
            }),
            MutationPolicy::Queue => Ok(self.gate.lock().await),
        }
    }

    async fn submit(&self, amount: f64, denomination: Denomination) -> Result<String, MarketError> {
        self.submitter
            .submit(amount, denomination)
            .await
            .inspect_err(|e| warn!("Transaction submission failed: {}", e))
    }

    /// Persist, then apply, a transition.
    ///
    /// `record` is prepended to the ledger with its timestamp clamped so the
    /// ledger stays newest-first. Persisted state is written before memory is
    /// touched; if any write fails nothing is applied. A ledger that cannot
    /// be rolled back after a failed wallet write is reported as
    /// `StorageError::Diverged`.
    async fn commit<F>(
        &self,
        record: Option<TransactionRecord>,
        wallet: Option<WalletState>,
        apply: F,
    ) -> Result<Option<TransactionRecord>, MarketError>
    where
        F: FnOnce(&mut Vec<Item>),
    {
        let (ledger, record) = match record {
            Some(mut record) => {
                let state = self.state.read().await;
                if let Some(head) = state.ledger.first() {
                    record.timestamp = record.timestamp.max(head.timestamp);
                }
                let mut ledger = Vec::with_capacity(state.ledger.len() + 1);
                ledger.push(record.clone());
                ledger.extend(state.ledger.iter().cloned());
                (Some(ledger), Some(record))
            }
            None => (None, None),
        };

        if let Some(ledger) = &ledger {
            db::transaction::save_transactions(self.kv.as_ref(), ledger).await?;
        }
        if let Some(wallet) = &wallet {
            if let Err(e) = db::wallet::save_wallet(self.kv.as_ref(), wallet).await {
                if let Some(ledger) = &ledger {
                    if let Err(rollback) =
                        db::transaction::save_transactions(self.kv.as_ref(), &ledger[1..]).await
                    {
                        error!("Failed to roll back persisted ledger: {}", rollback);
                        return Err(StorageError::Diverged {
                            key: db::transaction::TRANSACTIONS_KEY.to_string(),
                            source: Box::new(rollback),
                        }
                        .into());
                    }
                }
                return Err(e.into());
            }
        }

        let mut state = self.state.write().await;
        if let Some(ledger) = ledger {
            state.ledger = ledger;
        }
        if let Some(wallet) = wallet {
            state.wallet = wallet;
        }
        apply(&mut state.items);

        Ok(record)
    }

    /// Connect a wallet, replacing any current one
    pub async fn connect(&self) -> Result<WalletState, MarketError> {
        let _guard = self.begin().await?;

        let wallet = self
            .wallet_provider
            .connect()
            .await
            .inspect_err(|e| warn!("Wallet connection failed: {}", e))?;
        if wallet.actor().is_none() {
            return Err(MarketError::Collaborator(
                "wallet provider returned no identity".to_string(),
            ));
        }

        db::wallet::save_wallet(self.kv.as_ref(), &wallet).await?;
        self.state.write().await.wallet = wallet.clone();

        info!(
            "Wallet {} connected",
            wallet.address.as_ref().map(Address::short).unwrap_or_default()
        );
        Ok(wallet)
    }

    /// Forget the connected wallet and zero its balances.
    ///
    /// Waits for a pending mutation instead of rejecting.
    pub async fn disconnect(&self) -> Result<(), MarketError> {
        let _guard = self.gate.lock().await;

        db::wallet::clear_wallet(self.kv.as_ref()).await?;
        self.state.write().await.wallet = WalletState::disconnected();

        info!("Wallet disconnected");
        Ok(())
    }

    /// Buy `item_id`, paying its price in `denomination`
    pub async fn purchase(
        &self,
        item_id: &ItemId,
        denomination: Denomination,
    ) -> Result<Receipt, MarketError> {
        let _guard = self.begin().await?;

        let (buyer, item, amount, mut wallet) = {
            let state = self.state.read().await;
            let buyer = state.wallet.actor().cloned().ok_or(MarketError::NotConnected)?;
            let item = state
                .item(item_id)
                .cloned()
                .ok_or_else(|| MarketError::NotFound(item_id.clone()))?;

            if item.is_owned_by(&buyer) {
                return Err(MarketError::SelfPurchase);
            }
            if !self.legacy_quirks && !item.is_for_sale {
                return Err(MarketError::NotForSale(item.id));
            }

            let amount = item.price.amount_in(denomination)?;
            let available = state.wallet.balance.get(denomination);
            if available < amount {
                debug!(
                    "Purchase of {} refused: {} {} available, {} required",
                    item.id, available, denomination, amount
                );
                return Err(MarketError::InsufficientBalance {
                    denomination,
                    available,
                    required: amount,
                });
            }

            (buyer, item, amount, state.wallet.clone())
        };

        let tx_hash = self.submit(amount, denomination).await?;

        *wallet.balance.get_mut(denomination) -= amount;
        let record = TransactionRecord::new(
            TransactionKind::Purchase,
            &item,
            item.price,
            denomination,
            item.owner.clone(),
            buyer.clone(),
            Utc::now(),
            tx_hash.clone(),
        );

        let mut updated = item.clone();
        updated.owner = buyer.clone();
        updated.is_for_sale = false;

        let record = self
            .commit(Some(record), Some(wallet), |items| {
                if let Some(slot) = items.iter_mut().find(|i| i.id == item.id) {
                    slot.owner = buyer.clone();
                    slot.is_for_sale = false;
                }
            })
            .await?;

        info!(
            "{} bought {} for {} {} ({})",
            buyer.short(),
            item.id,
            amount,
            denomination,
            tx_hash
        );

        Ok(Receipt {
            tx_hash,
            item: Some(updated),
            record,
        })
    }

    /// List a brand-new item owned and created by the connected actor
    pub async fn list(&self, new_item: NewItem) -> Result<Receipt, MarketError> {
        let _guard = self.begin().await?;

        let actor = self
            .state
            .read()
            .await
            .wallet
            .actor()
            .cloned()
            .ok_or(MarketError::NotConnected)?;

        if new_item.title.trim().is_empty() {
            return Err(MarketError::IncompleteListing("title"));
        }
        if new_item.description.trim().is_empty() {
            return Err(MarketError::IncompleteListing("description"));
        }
        if new_item.category.trim().is_empty() {
            return Err(MarketError::IncompleteListing("category"));
        }
        new_item.price.validate()?;

        let tx_hash = self.submit(LISTING_FEE, FEE_DENOMINATION).await?;

        let now = Utc::now();
        let item = Item {
            id: ItemId::generate(),
            image: new_item.image_or_default(),
            title: new_item.title,
            description: new_item.description,
            price: new_item.price,
            creator: actor.clone(),
            owner: actor.clone(),
            category: new_item.category,
            rarity: new_item.rarity,
            is_for_sale: true,
            created_at: now,
        };
        let record = TransactionRecord::new(
            TransactionKind::Listing,
            &item,
            item.price,
            FEE_DENOMINATION,
            actor.clone(),
            Address::marketplace(),
            now,
            tx_hash.clone(),
        );

        let listed = item.clone();
        let record = self
            .commit(Some(record), None, move |items| items.insert(0, listed))
            .await?;

        info!("{} listed {} ({})", actor.short(), item.id, item.title);

        Ok(Receipt {
            tx_hash,
            item: Some(item),
            record,
        })
    }

    /// Look up an item the connected actor owns.
    ///
    /// With legacy quirks neither connection nor ownership is checked and a
    /// missing item is `Ok(None)`.
    async fn owned_item(&self, item_id: &ItemId) -> Result<(Address, Option<Item>), MarketError> {
        let state = self.state.read().await;
        let item = state.item(item_id).cloned();

        if self.legacy_quirks {
            let actor = state.wallet.address.clone().unwrap_or_else(|| Address::from(""));
            return Ok((actor, item));
        }

        let actor = state.wallet.actor().cloned().ok_or(MarketError::NotConnected)?;
        let item = item.ok_or_else(|| MarketError::NotFound(item_id.clone()))?;
        if !item.is_owned_by(&actor) {
            return Err(MarketError::NotOwner(item.id));
        }
        Ok((actor, Some(item)))
    }

    /// Replace an item's price; ownership and sale status are untouched
    pub async fn update_price(&self, item_id: &ItemId, price: Price) -> Result<Receipt, MarketError> {
        let _guard = self.begin().await?;

        price.validate()?;
        let (actor, item) = self.owned_item(item_id).await?;

        let tx_hash = self.submit(PRICE_UPDATE_FEE, FEE_DENOMINATION).await?;

        let Some(item) = item else {
            debug!("Price update for unknown item {} ignored", item_id);
            return Ok(Receipt {
                tx_hash,
                item: None,
                record: None,
            });
        };

        let record = TransactionRecord::new(
            TransactionKind::Listing,
            &item,
            price,
            FEE_DENOMINATION,
            actor,
            Address::marketplace(),
            Utc::now(),
            tx_hash.clone(),
        );

        let record = self
            .commit(Some(record), None, |items| {
                if let Some(slot) = items.iter_mut().find(|i| i.id == item.id) {
                    slot.price = price;
                }
            })
            .await?;

        info!("Price of {} set to {} / {}", item.id, price.memex, price.area);

        Ok(Receipt {
            tx_hash,
            item: Some(Item { price, ..item }),
            record,
        })
    }

    /// Take an item off the market
    pub async fn remove_from_sale(&self, item_id: &ItemId) -> Result<Receipt, MarketError> {
        let _guard = self.begin().await?;

        let (actor, item) = self.owned_item(item_id).await?;
        if let Some(item) = &item {
            if !self.legacy_quirks && !item.is_for_sale {
                return Err(MarketError::NotForSale(item.id.clone()));
            }
        }

        let tx_hash = self.submit(DELISTING_FEE, FEE_DENOMINATION).await?;

        let Some(item) = item else {
            debug!("Delisting of unknown item {} ignored", item_id);
            return Ok(Receipt {
                tx_hash,
                item: None,
                record: None,
            });
        };

        let record = (!self.legacy_quirks).then(|| {
            TransactionRecord::new(
                TransactionKind::Delisting,
                &item,
                item.price,
                FEE_DENOMINATION,
                actor,
                Address::marketplace(),
                Utc::now(),
                tx_hash.clone(),
            )
        });

        let record = self
            .commit(record, None, |items| {
                if let Some(slot) = items.iter_mut().find(|i| i.id == item.id) {
                    slot.is_for_sale = false;
                }
            })
            .await?;

        info!("{} removed from sale", item.id);

        Ok(Receipt {
            tx_hash,
            item: Some(Item {
                is_for_sale: false,
                ..item
            }),
            record,
        })
    }

    /// Put an owned, unlisted item back on sale at `price`
    pub async fn relist(&self, item_id: &ItemId, price: Price) -> Result<Receipt, MarketError> {
        let _guard = self.begin().await?;

        price.validate()?;
        let (actor, item) = {
            let state = self.state.read().await;
            let actor = state.wallet.actor().cloned().ok_or(MarketError::NotConnected)?;
            let item = state
                .item(item_id)
                .cloned()
                .ok_or_else(|| MarketError::NotFound(item_id.clone()))?;
            if !item.is_owned_by(&actor) {
                return Err(MarketError::NotOwner(item.id));
            }
            if item.is_for_sale {
                return Err(MarketError::AlreadyListed(item.id));
            }
            (actor, item)
        };

        let tx_hash = self.submit(RELISTING_FEE, FEE_DENOMINATION).await?;

        let record = TransactionRecord::new(
            TransactionKind::Listing,
            &item,
            price,
            FEE_DENOMINATION,
            actor.clone(),
            Address::marketplace(),
            Utc::now(),
            tx_hash.clone(),
        );

        let record = self
            .commit(Some(record), None, |items| {
                if let Some(slot) = items.iter_mut().find(|i| i.id == item.id) {
                    slot.price = price;
                    slot.is_for_sale = true;
                }
            })
            .await?;

        info!("{} relisted {} at {} / {}", actor.short(), item.id, price.memex, price.area);

        Ok(Receipt {
            tx_hash,
            item: Some(Item {
                price,
                is_for_sale: true,
                ..item
            }),
            record,
        })
    }
}
