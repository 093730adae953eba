use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::models::market::{MarketRating, MarketRatingRequest};
use crate::models::trade::{StrategyType, Trade, TradeRequest};

/// Request/response channel to the out-of-process backend that owns
/// persistence. Implementations live in the embedding application; the
/// stores only ever hold a [`SharedBridge`].
#[async_trait]
pub trait BackendBridge: Send + Sync {
    /// Most recently saved market rating. Returns the all-zero sentinel
    /// record when nothing has been saved yet.
    async fn get_latest_market_rating(&self) -> Result<MarketRating>;

    async fn save_market_rating(&self, request: MarketRatingRequest) -> Result<MarketRating>;

    /// Active trades whose lifetime overlaps the given date range.
    async fn get_active_trades_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Trade>>;

    async fn get_strategy_types(&self) -> Result<Vec<StrategyType>>;

    async fn create_trade(&self, request: TradeRequest) -> Result<Trade>;

    async fn update_trade(&self, id: i64, request: TradeRequest) -> Result<Trade>;

    async fn update_trade_status(&self, id: i64, status: String) -> Result<Trade>;

    async fn delete_trade(&self, id: i64) -> Result<()>;
}

/// Shared handle the stores clone into their timeout-guarded calls.
pub type SharedBridge = Arc<dyn BackendBridge>;
