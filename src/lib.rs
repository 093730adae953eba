pub mod bridge;
pub mod models;
pub mod stores;

pub use bridge::{BackendBridge, SharedBridge};
pub use stores::market::{MarketState, MarketStore};
pub use stores::store::{Store, SubscriptionId};
pub use stores::toast::ToastStore;
pub use stores::trades::{TradeJournalState, TradeStore};
pub use stores::{StoreError, REQUEST_TIMEOUT};

use std::sync::Arc;

/// All application stores, constructed once at startup around a shared
/// backend bridge. The stores are independent of each other; they share only
/// the bridge and the static sector list.
pub struct Stores {
    pub market: MarketStore,
    pub trades: TradeStore,
    pub toasts: ToastStore,
}

impl Stores {
    pub fn new(bridge: SharedBridge) -> Self {
        Self {
            market: MarketStore::new(Arc::clone(&bridge)),
            trades: TradeStore::new(Arc::clone(&bridge)),
            toasts: ToastStore::new(),
        }
    }

    /// Drops every store back to its default state. Teardown hook for tests
    /// and for signing out of a journal.
    pub fn reset(&self) {
        self.market.reset();
        self.trades.reset();
        self.toasts.clear();
    }
}
