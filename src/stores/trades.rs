use chrono::{Duration, Local, NaiveDate};
use std::sync::Arc;

use crate::bridge::SharedBridge;
use crate::models::market::SECTORS;
use crate::models::trade::{validate_trade_request, StrategyType, Trade, TradeRequest};
use crate::stores::store::{Store, SubscriptionId};
use crate::stores::{race_timeout, StoreError};

/// UI-visible snapshot of the trade journal.
#[derive(Debug, Clone)]
pub struct TradeJournalState {
    pub trades: Vec<Trade>,
    pub strategy_types: Vec<StrategyType>,
    pub sectors: &'static [&'static str],
    pub date_columns: Vec<NaiveDate>,
    pub loading: bool,
    pub selected_trade: Option<Trade>,
}

impl Default for TradeJournalState {
    fn default() -> Self {
        Self {
            trades: Vec::new(),
            strategy_types: Vec::new(),
            sectors: &SECTORS,
            date_columns: Vec::new(),
            loading: false,
            selected_trade: None,
        }
    }
}

/// Holds the logged trades plus reference data, with full CRUD against the
/// backend. Local state is only edited after a successful backend response;
/// a failed load resets the collection while a failed mutation leaves the
/// last good state in place.
#[derive(Clone)]
pub struct TradeStore {
    state: Store<TradeJournalState>,
    bridge: SharedBridge,
}

impl TradeStore {
    pub fn new(bridge: SharedBridge) -> Self {
        Self {
            state: Store::new(TradeJournalState::default()),
            bridge,
        }
    }

    pub fn state(&self) -> TradeJournalState {
        self.state.get()
    }

    pub fn subscribe(
        &self,
        observer: impl Fn(&TradeJournalState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id)
    }

    /// Replaces the whole collection with the active trades in the range,
    /// raced against the request timeout. On failure the collection is
    /// emptied so the calendar never shows stale rows.
    pub async fn load_trades_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Trade>, StoreError> {
        self.state.update(|s| s.loading = true);

        let bridge = Arc::clone(&self.bridge);
        let result =
            race_timeout(async move { bridge.get_active_trades_by_date_range(start, end).await })
                .await;

        match result {
            Ok(trades) => {
                log::info!("loaded {} trades for {start}..{end}", trades.len());
                self.state.update(|s| {
                    s.trades = trades.clone();
                    s.loading = false;
                });
                Ok(trades)
            }
            Err(err) => {
                log::error!("failed to load trades: {err}");
                self.state.update(|s| {
                    s.trades.clear();
                    s.loading = false;
                });
                Err(err)
            }
        }
    }

    /// Refreshes the strategy reference data. Does not touch `loading`.
    pub async fn load_strategy_types(&self) -> Result<Vec<StrategyType>, StoreError> {
        let bridge = Arc::clone(&self.bridge);
        let result = race_timeout(async move { bridge.get_strategy_types().await }).await;

        match result {
            Ok(strategies) => {
                log::info!("loaded {} strategy types", strategies.len());
                self.state.update(|s| s.strategy_types = strategies.clone());
                Ok(strategies)
            }
            Err(err) => {
                log::error!("failed to load strategy types: {err}");
                self.state.update(|s| s.strategy_types.clear());
                Err(err)
            }
        }
    }

    /// Creates a trade and appends the backend's record to the collection.
    /// On any failure the collection is left untouched.
    pub async fn create_trade(&self, request: TradeRequest) -> Result<Trade, StoreError> {
        self.state.update(|s| s.loading = true);

        if let Err(err) = validate_trade_request(&request) {
            log::error!("rejected trade request: {err}");
            self.state.update(|s| s.loading = false);
            return Err(StoreError::Bridge(err));
        }

        match self.bridge.create_trade(request).await {
            Ok(trade) => {
                self.state.update(|s| {
                    s.trades.push(trade.clone());
                    s.loading = false;
                });
                Ok(trade)
            }
            Err(err) => {
                log::error!("failed to create trade: {err}");
                self.state.update(|s| s.loading = false);
                Err(StoreError::Bridge(err))
            }
        }
    }

    /// Updates a trade and replaces the matching record in place.
    pub async fn update_trade(&self, id: i64, request: TradeRequest) -> Result<Trade, StoreError> {
        self.state.update(|s| s.loading = true);

        if let Err(err) = validate_trade_request(&request) {
            log::error!("rejected trade request: {err}");
            self.state.update(|s| s.loading = false);
            return Err(StoreError::Bridge(err));
        }

        match self.bridge.update_trade(id, request).await {
            Ok(updated) => {
                self.replace_trade(id, &updated);
                self.state.update(|s| s.loading = false);
                Ok(updated)
            }
            Err(err) => {
                log::error!("failed to update trade {id}: {err}");
                self.state.update(|s| s.loading = false);
                Err(StoreError::Bridge(err))
            }
        }
    }

    /// Moves a trade through its lifecycle (active/closed/expired). Does not
    /// touch `loading`.
    pub async fn update_trade_status(&self, id: i64, status: &str) -> Result<Trade, StoreError> {
        match self.bridge.update_trade_status(id, status.to_string()).await {
            Ok(updated) => {
                self.replace_trade(id, &updated);
                Ok(updated)
            }
            Err(err) => {
                log::error!("failed to update status of trade {id}: {err}");
                Err(StoreError::Bridge(err))
            }
        }
    }

    /// Deletes a trade and removes exactly the matching record.
    pub async fn delete_trade(&self, id: i64) -> Result<(), StoreError> {
        match self.bridge.delete_trade(id).await {
            Ok(()) => {
                self.state.update(|s| s.trades.retain(|t| t.id != id));
                Ok(())
            }
            Err(err) => {
                log::error!("failed to delete trade {id}: {err}");
                Err(StoreError::Bridge(err))
            }
        }
    }

    pub fn select_trade(&self, trade: Trade) {
        self.state.update(|s| s.selected_trade = Some(trade));
    }

    pub fn clear_selection(&self) {
        self.state.update(|s| s.selected_trade = None);
    }

    pub fn set_date_columns(&self, columns: Vec<NaiveDate>) {
        self.state.update(|s| s.date_columns = columns);
    }

    /// Snapshot filter: trades tagged with exactly this sector.
    pub fn trades_by_sector(&self, sector: &str) -> Vec<Trade> {
        self.state
            .get()
            .trades
            .into_iter()
            .filter(|t| t.sector == sector)
            .collect()
    }

    /// Trades expiring within the next 7 days (inclusive), by calendar date.
    pub fn expiring_trades(&self) -> Vec<Trade> {
        self.expiring_trades_within(Local::now().date_naive())
    }

    /// Expiry window `[today, today + 7]` anchored at a caller-supplied day.
    pub fn expiring_trades_within(&self, today: NaiveDate) -> Vec<Trade> {
        let window_end = today + Duration::days(7);
        self.state
            .get()
            .trades
            .into_iter()
            .filter(|t| {
                let expires = t.expiration_date.date_naive();
                expires >= today && expires <= window_end
            })
            .collect()
    }

    pub fn sectors(&self) -> &'static [&'static str] {
        &SECTORS
    }

    /// Drops everything back to defaults. Teardown hook for tests.
    pub fn reset(&self) {
        self.state.set(TradeJournalState::default());
    }

    fn replace_trade(&self, id: i64, updated: &Trade) {
        self.state.update(|s| {
            if let Some(existing) = s.trades.iter_mut().find(|t| t.id == id) {
                *existing = updated.clone();
            }
        });
    }
}
